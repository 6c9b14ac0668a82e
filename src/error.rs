/// Error type shared by data loading and image probing
///
/// Nothing in the viewer is fatal: probe errors are logged and the
/// candidate is dropped, load errors become an error card.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid projects JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
