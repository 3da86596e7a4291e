//! Error types for sync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the process with a non-zero exit code
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from sync-core
    #[error(transparent)]
    Core(#[from] sync_core::Error),

    /// Error from sync-fs
    #[error(transparent)]
    Fs(#[from] sync_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Some outputs could not be written
    #[error("{count} output file(s) could not be written")]
    WriteFailed { count: usize },

    /// `--check` found missing or stale outputs
    #[error("{count} generated file(s) are missing or out of date; run rules-sync to regenerate")]
    OutOfDate { count: usize },
}
