//! Page-tree plumbing shared by merge and split.

use crate::types::Result;
use lopdf::{Document, Object, ObjectId};

/// Page object ids in page order.
pub(crate) fn ordered_page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

/// The id of the document's root Pages node.
pub(crate) fn pages_root_id(doc: &Document) -> Result<ObjectId> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_dictionary(catalog_id)?;
    Ok(catalog.get(b"Pages")?.as_reference()?)
}

/// Point the root Pages node at exactly `page_ids`, in order, reparenting
/// every page to it. Intermediate tree nodes are left for pruning.
pub(crate) fn rebuild_page_tree(doc: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let pages_id = pages_root_id(doc)?;

    for &page_id in page_ids {
        let mut page_dict = doc.get_dictionary(page_id)?.clone();
        page_dict.set("Parent", Object::Reference(pages_id));
        doc.objects.insert(page_id, Object::Dictionary(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let mut pages_dict = doc.get_dictionary(pages_id)?.clone();
    pages_dict.set("Count", Object::Integer(page_ids.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    Ok(())
}
