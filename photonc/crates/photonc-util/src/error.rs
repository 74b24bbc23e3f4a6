//! Error types shared by the photonc foundation crates.

use std::path::PathBuf;

use thiserror::Error;

use crate::span::FileId;

/// Errors raised by the source manager.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading a source file from disk failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file id that was never registered with this source manager.
    #[error("unknown file id {0:?}")]
    UnknownFile(FileId),
}

/// Result alias for source manager operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
