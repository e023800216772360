//! Error types for Linkfolio.
//!
//! Library crates use [`PortfolioError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Most failure modes in this system are deliberately NOT errors: a missing
//! export file yields empty rows, a missing column yields a field default,
//! and an unreadable persisted document yields a fallback. The variants here
//! cover the remaining genuinely fatal paths (config parsing, output
//! serialization, output I/O) plus the internal CSV error that the ingest
//! layer downgrades to a warning.

use std::path::PathBuf;

/// Top-level error type for all Linkfolio operations.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// CSV read or parse error (downgraded to empty rows by the ingest layer).
    #[error("csv error: {message}")]
    Csv { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document serialization or deserialization error.
    #[error("serialize error: {message}")]
    Serialize { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PortfolioError>;

impl PortfolioError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a CSV error from any displayable message.
    pub fn csv(msg: impl Into<String>) -> Self {
        Self::Csv {
            message: msg.into(),
        }
    }

    /// Create a serialize error from any displayable message.
    pub fn serialize(msg: impl Into<String>) -> Self {
        Self::Serialize {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
