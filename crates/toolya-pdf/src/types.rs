use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid page range: {0}")]
    Range(String),
    #[error("Page {page} is out of bounds for a document with {page_count} pages")]
    PageOutOfBounds { page: usize, page_count: usize },
    #[error("Merging requires at least 2 documents, got {count}")]
    TooFewDocuments { count: usize },
    #[error("Document has no pages")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, PdfError>;
