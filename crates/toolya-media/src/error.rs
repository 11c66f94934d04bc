use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("QR encoding error: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, MediaError>;
