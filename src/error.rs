use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnipError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("group {0:?} not found")]
    GroupNotFound(String),

    #[error("snippet {name:?} not found in group {group:?}")]
    SnippetNotFound { group: String, name: String },
}

pub type Result<T> = std::result::Result<T, SnipError>;
