use thiserror::Error;

/// Errors that can occur while listing directories or fetching video metadata
#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Path not found: {path}")]
    NotFound { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Metadata fetch failed with status {status}: {body}")]
    Fetch { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for shelf operations
pub type Result<T> = std::result::Result<T, ShelfError>;
