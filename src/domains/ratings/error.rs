//! Rating-specific error types.

use thiserror::Error;

use crate::domains::storage::StorageError;

/// Errors that can occur while recording a rating.
#[derive(Debug, Error)]
pub enum RatingError {
    /// `ratingValue` was missing, not an integer, or outside 1..=5, or the
    /// body was not a JSON object.
    #[error("Rating must be an integer between 1 and 5.")]
    InvalidRatingValue,

    /// Reading or writing the ratings collection failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RatingError {
    /// Whether the caller can fix this error by changing the request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
