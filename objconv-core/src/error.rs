use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::BlockKind;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a model
#[derive(Error, Debug)]
pub enum Error {
    #[error("can't open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed {kind} data at line {line}: {reason}")]
    Parse {
        kind: BlockKind,
        line: usize,
        reason: String,
    },

    #[error("malformed face at line {line}: {reason}")]
    FaceParse { line: usize, reason: String },

    #[error("expected {expected} faces but read {found}")]
    FaceCountMismatch { expected: usize, found: usize },

    #[error("invalid path: {0}")]
    InvalidPath(String),
}
