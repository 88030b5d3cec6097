//! Error types for map persistence and snapshot decoding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed map file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
