//! Document merging.
//!
//! Concatenates the pages of several loaded documents, in input order, into
//! one new document. Object ids of each subsequent source are shifted past
//! the accumulated maximum id so references never collide, then the page
//! tree is rebuilt flat over the combined page list.

use crate::tree::{ordered_page_ids, rebuild_page_tree};
use crate::types::{PdfError, Result};
use lopdf::{Document, Object};

/// Progress of a running merge, reported once per completed input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeProgress {
    pub completed: usize,
    pub total: usize,
}

impl MergeProgress {
    /// Completion percentage, rounded to the nearest integer. Monotonically
    /// increasing over a merge and exactly 100 on the last document.
    pub fn percent(&self) -> u8 {
        ((self.completed * 100 + self.total / 2) / self.total) as u8
    }
}

/// Merge at least two documents into one.
pub fn merge_documents(documents: &[Document]) -> Result<Document> {
    merge_documents_with(documents, |_| {})
}

/// Merge with a progress callback, invoked once per completed input.
pub fn merge_documents_with(
    documents: &[Document],
    mut progress: impl FnMut(MergeProgress),
) -> Result<Document> {
    if documents.len() < 2 {
        return Err(PdfError::TooFewDocuments {
            count: documents.len(),
        });
    }
    let total = documents.len();

    let mut dest = documents[0].clone();
    let mut page_ids = ordered_page_ids(&dest);
    let mut max_id = dest.max_id;
    progress(MergeProgress { completed: 1, total });

    for (index, source) in documents[1..].iter().enumerate() {
        let source = source.clone();
        let source_pages = ordered_page_ids(&source);
        let offset = max_id;
        max_id += source.max_id;

        for (id, object) in source.objects {
            dest.objects
                .insert((id.0 + offset, id.1), shift_references(object, offset));
        }
        page_ids.extend(source_pages.into_iter().map(|id| (id.0 + offset, id.1)));

        progress(MergeProgress {
            completed: index + 2,
            total,
        });
    }

    if page_ids.is_empty() {
        return Err(PdfError::NoPages);
    }

    dest.max_id = max_id;
    rebuild_page_tree(&mut dest, &page_ids)?;
    dest.prune_objects();
    dest.compress();

    Ok(dest)
}

/// Async wrapper; the merge itself is CPU-bound.
pub async fn merge(documents: Vec<Document>) -> Result<Document> {
    tokio::task::spawn_blocking(move || merge_documents(&documents)).await?
}

/// Recursively shift every object reference by `offset`.
fn shift_references(object: Object, offset: u32) -> Object {
    match object {
        Object::Reference(id) => Object::Reference((id.0 + offset, id.1)),
        Object::Array(items) => Object::Array(
            items
                .into_iter()
                .map(|item| shift_references(item, offset))
                .collect(),
        ),
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = shift_references(value.clone(), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = shift_references(value.clone(), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}
