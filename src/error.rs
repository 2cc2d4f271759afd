// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the edges of the scraper: configuration and I/O.
/// Extraction itself never fails; missing data falls back to defaults.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("invalid column map `{0}`: expected three indexes CODE,COURSE,PROFESSOR")]
    Columns(String),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
