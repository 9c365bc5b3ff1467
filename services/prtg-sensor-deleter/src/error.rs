//! Error types for the PRTG sensor deleter

/// Errors that can end a deletion run
#[derive(Debug, thiserror::Error)]
pub enum DeleterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Malformed sensor listing: {0}")]
    Parse(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for deleter operations
pub type Result<T> = std::result::Result<T, DeleterError>;
