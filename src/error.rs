use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Content directory not found: {}", .0.display())]
    ContentDirNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Content file {} must contain an object at the top level", .0.display())]
    NotAnObject(PathBuf),

    #[error("Cannot derive an identifier from '{0}'")]
    EmptyId(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Invalid {kind} '{id}': {source}")]
    Schema {
        kind: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
