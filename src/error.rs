//! Error types for ScribeDB
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for ScribeDB operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Validation Errors (raised before any I/O)
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Unable to find resource '{resource}' in collection '{collection}'")]
    NotFound { collection: String, resource: String },

    #[error("Unable to find collection '{0}'")]
    CollectionNotFound(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    pub(crate) fn not_found(collection: &str, resource: &str) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            resource: resource.to_string(),
        }
    }

    /// True for a missing resource or collection.
    ///
    /// Absence is an expected outcome, so callers usually branch on this
    /// instead of treating it as a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::CollectionNotFound(_)
        )
    }

    /// True when the call was rejected before touching the filesystem
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}
