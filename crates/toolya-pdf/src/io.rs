//! Document I/O.
//!
//! Documents are loaded fully into memory before any page access and
//! serialized back to a byte buffer at the end of an operation. Parsing
//! and serialization are CPU-bound and run under `spawn_blocking`.

use crate::types::Result;
use lopdf::Document;
use std::path::Path;

/// Load a document from an in-memory byte buffer.
pub fn load_document_bytes(bytes: &[u8]) -> Result<Document> {
    Ok(Document::load_mem(bytes)?)
}

/// Load a single document from disk.
pub async fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Load several documents from disk, in order.
///
/// The first unparsable document aborts the whole load.
pub async fn load_documents(paths: &[impl AsRef<Path>]) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        documents.push(load_document(path).await?);
    }
    Ok(documents)
}

/// Serialize a document to a byte buffer.
pub fn save_to_bytes(doc: &mut Document) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Serialize a document and write it to disk.
pub async fn save_document(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let bytes = tokio::task::spawn_blocking(move || save_to_bytes(&mut doc)).await??;
    tokio::fs::write(path.as_ref(), bytes).await?;
    Ok(())
}
