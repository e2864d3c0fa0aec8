//! Content source errors

use thiserror::Error;

/// Errors raised by content sources before they are degraded to empty results
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("CMS request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS returned {status} for {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Unexpected CMS response: {0}")]
    Decode(String),

    #[error("Failed to read content file {path}: {message}")]
    Local { path: String, message: String },
}
