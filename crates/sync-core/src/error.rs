//! Error types for sync-core

use std::path::PathBuf;

/// Result type for sync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions that abort a sync run.
///
/// Recoverable conditions (a missing topic file, a missing metadata marker)
/// never surface here; they are logged and defaulted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The canonical instructions document could not be read
    #[error("Canonical document not readable at {path}")]
    MissingSourceFile {
        path: PathBuf,
        #[source]
        source: sync_fs::Error,
    },

    /// The canonical document lacks a usable core standards region
    #[error("Malformed canonical document {path}: {reason}")]
    MalformedSourceDocument {
        path: PathBuf,
        reason: MalformedReason,
    },

    /// The sync configuration is structurally invalid
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Filesystem error from sync-fs
    #[error(transparent)]
    Fs(#[from] sync_fs::Error),
}

/// Why a canonical document's core standards region could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("start marker {0} not found")]
    MissingStartMarker(&'static str),

    #[error("end marker {0} not found")]
    MissingEndMarker(&'static str),

    #[error("end marker appears before the start marker")]
    EndBeforeStart,

    #[error("core standards block is empty")]
    EmptyBlock,
}

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
