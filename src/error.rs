//! Structured error types for artboard-tricks.

/// All errors that can occur while rearranging or renumbering a page.
#[derive(Debug, thiserror::Error)]
pub enum TricksError {
    /// The host document rejected a position, name, or layer-order write.
    #[error("Host write failed: {0}")]
    Host(String),

    /// Page document (de)serialization error.
    #[error("Page document: {0}")]
    Document(#[from] serde_json::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TricksError>;

impl From<String> for TricksError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TricksError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
