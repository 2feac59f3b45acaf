//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Unrecognized sort key string.
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    /// Unrecognized availability bucket string.
    #[error("Invalid availability bucket: {0}")]
    InvalidAvailability(String),

    /// Unrecognized size system string.
    #[error("Invalid size system: {0}")]
    InvalidSizeSystem(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
