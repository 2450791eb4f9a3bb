//! Resource-specific error types.

use thiserror::Error;

use crate::domains::storage::StorageError;

/// Errors that can occur during resource operations.
///
/// Display strings of the validation variants are returned to clients.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource with ID {0} not found.")]
    NotFound(String),

    /// `title` or `type` was missing on creation.
    #[error("title and type are required.")]
    MissingRequiredFields,

    /// An update carried no fields.
    #[error("No data to update.")]
    EmptyPatch,

    /// Reading or writing the resource collection failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Whether the caller can fix this error by changing the request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
