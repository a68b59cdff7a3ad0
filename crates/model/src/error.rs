use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading a record tree
#[derive(Error, Debug)]
pub enum ModelError {
    /// The record tree JSON could not be parsed
    #[error("Invalid record tree: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
