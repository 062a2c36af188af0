// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("cannot write graph document to {path}: {source}")]
    WriteDocument {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("cannot serialize graph document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;

// Allow `?` on std::io::Error by converting to GraphError::Io with unknown path.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
