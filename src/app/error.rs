use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Convenience type alias for Results with KitError
pub type Result<T> = std::result::Result<T, KitError>;
