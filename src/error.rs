//! Error taxonomy for the county seat pipeline
//!
//! Every variant names the URL being processed and, for structural
//! failures, the markup feature that was expected but absent.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection, DNS, timeout or body read failure
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Didn't find {selector} table in {url}")]
    TableNotFound { url: String, selector: String },

    #[error("Didn't find {selector} in {url}")]
    FieldNotFound { url: String, selector: String },

    #[error("Didn't find geocode link in {url}")]
    LinkNotFound { url: String },

    #[error("Malformed row {row} in {url}: {reason}")]
    MalformedRow {
        url: String,
        row: usize,
        reason: String,
    },

    #[error("Invalid number {text:?} for {selector} in {url}")]
    NumericParse {
        url: String,
        selector: String,
        text: String,
    },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid selector {selector}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl ScrapeError {
    /// True when an expected markup feature was missing from a fetched page
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ScrapeError::TableNotFound { .. }
                | ScrapeError::FieldNotFound { .. }
                | ScrapeError::LinkNotFound { .. }
                | ScrapeError::MalformedRow { .. }
        )
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ScrapeError::Transport { .. } | ScrapeError::Status { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
