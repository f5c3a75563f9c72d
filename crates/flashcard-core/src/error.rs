//! Error Types

use thiserror::Error;

/// Result type alias for flashcard operations
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Flashcard pipeline errors
#[derive(Error, Debug)]
pub enum FlashcardError {
    /// Request rejected before any provider call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider answered with a non-2xx status
    #[error("Provider returned HTTP {status}: {body}")]
    UpstreamHttp { status: u16, body: String },

    /// Provider could not be reached (connect, TLS, timeout, broken body)
    #[error("Provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Provider body was not the JSON we expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlashcardError {
    /// Whether the provider itself rejected the call (as opposed to the call
    /// never completing)
    pub fn is_upstream_http(&self) -> bool {
        matches!(self, FlashcardError::UpstreamHttp { .. })
    }
}
