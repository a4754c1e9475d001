//! Error types for patch-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from patch-core
    #[error(transparent)]
    Patch(#[from] patch_core::Error),

    /// Error from patch-fs
    #[error(transparent)]
    Fs(#[from] patch_fs::Error),

    /// Logging could not be initialised
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
