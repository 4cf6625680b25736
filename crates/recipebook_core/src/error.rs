//! Error types for RecipeBook core.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in RecipeBook core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field was assigned a value that breaks its invariant.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the violation.
        message: String,
    },

    /// A persisted record is malformed (missing or mistyped key).
    #[error("invalid record format: {message}")]
    Format {
        /// Description of the format issue.
        message: String,
    },

    /// The store file could not be read or written.
    #[error("storage error at {}: {source}", path.display())]
    Storage {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The store document could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Creates a validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Creates a storage error for the given path.
    pub fn storage(path: &Path, source: io::Error) -> Self {
        Self::Storage {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true if this is a format error.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
