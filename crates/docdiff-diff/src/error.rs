//! Error types for the diff crate.
//!
//! Diffing itself is total; only loading options and documents can fail.

use std::path::PathBuf;

/// Errors that can occur while preparing a diff.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML options could not be parsed.
    #[error("invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON options or a JSON document could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The options file has an extension we do not know how to read.
    #[error("unsupported options file: {0}")]
    UnsupportedConfig(String),
}

/// Convenience alias for fallible diff preparation.
pub type DiffResult<T> = Result<T, DiffError>;
