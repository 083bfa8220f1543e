//! Error types for DG Tools

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DgError {
    #[error("Structural error: {0}")]
    Structural(String),

    #[error("Invalid port range: {0}")]
    InvalidPortRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(String),
}

impl From<regex::Error> for DgError {
    fn from(err: regex::Error) -> Self {
        DgError::RegexError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DgError>;
