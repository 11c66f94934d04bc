//! Page extraction.
//!
//! Copies the pages named by a page-range expression, in the order the
//! expression resolves to, into a new document. Duplicate selections yield
//! distinct output pages sharing their content streams and resources.

use crate::range::resolve_page_range;
use crate::tree::{pages_root_id, rebuild_page_tree};
use crate::types::{PdfError, Result};
use lopdf::{Document, Object};

/// Extract the pages selected by `expr` from `source` into a new document.
///
/// Fails closed: a malformed expression or any index beyond the document's
/// page count rejects the whole operation before any page is copied.
pub fn split_document(source: &Document, expr: &str) -> Result<Document> {
    let page_count = source.get_pages().len();
    let pages = resolve_page_range(expr, page_count)?;
    extract_pages(source, &pages)
}

/// Copy the given 1-based pages, in order, into a new document.
pub fn extract_pages(source: &Document, pages: &[usize]) -> Result<Document> {
    if pages.is_empty() {
        return Err(PdfError::Range("no pages selected".to_string()));
    }

    let mut out = source.clone();
    let page_map = out.get_pages();
    let page_count = page_map.len();
    let pages_id = pages_root_id(&out)?;

    let mut page_ids = Vec::with_capacity(pages.len());
    for &number in pages {
        let &source_id =
            page_map
                .get(&(number as u32))
                .ok_or(PdfError::PageOutOfBounds {
                    page: number,
                    page_count,
                })?;

        // One page object per occurrence, so a page selected twice stays
        // two pages in the output.
        let mut page_dict = out.get_dictionary(source_id)?.clone();
        page_dict.set("Parent", Object::Reference(pages_id));
        page_ids.push(out.add_object(page_dict));
    }

    rebuild_page_tree(&mut out, &page_ids)?;
    out.prune_objects();
    out.compress();

    Ok(out)
}

/// Async wrapper; the extraction itself is CPU-bound.
pub async fn split(source: Document, expr: impl Into<String>) -> Result<Document> {
    let expr = expr.into();
    tokio::task::spawn_blocking(move || split_document(&source, &expr)).await?
}
