//! Error types for paramshape.
//!
//! Signature validation itself never fails: a mismatching callable produces an
//! [`Outcome`](crate::diagnostics::Outcome) carrying diagnostics. The errors
//! here cover the surrounding plumbing, which today means loading
//! configuration from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for paramshape operations
#[derive(Debug, Error)]
pub enum ParamShapeError {
    /// File system related errors
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration file
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Configuration that parsed but makes no sense
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ParamShapeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error is a missing file rather than an unreadable one.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for paramshape operations
pub type Result<T> = std::result::Result<T, ParamShapeError>;
