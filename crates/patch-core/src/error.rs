//! Error types for patch-core

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Which marker of an operation failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// The single marker of a line insertion.
    Line,
    /// The marker opening a replaced span.
    Start,
    /// The marker closing a replaced span.
    End,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Line => "Line marker",
            Self::Start => "Start marker",
            Self::End => "End marker",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] patch_fs::Error),

    #[error("{role} not found: {marker:?}")]
    MarkerNotFound { role: MarkerRole, marker: String },

    #[error("Inserted text must be a single line, got {line:?}")]
    InvalidLine { line: String },

    #[error("Invalid marker pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Step {index} ({path}) failed: {source}")]
    Step {
        index: usize,
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn not_found(role: MarkerRole, marker: impl fmt::Display) -> Self {
        Self::MarkerNotFound {
            role,
            marker: marker.to_string(),
        }
    }

    /// True if this error, or the step failure wrapping it, is a missing marker.
    pub fn is_marker_not_found(&self) -> bool {
        match self {
            Self::MarkerNotFound { .. } => true,
            Self::Step { source, .. } => source.is_marker_not_found(),
            _ => false,
        }
    }
}
