//! Rating record and request types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::RatingError;

/// User attribution used when a rating carries no `userId`.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// A stored rating. Ratings are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub resource_id: String,
    pub rating_value: u8,
    pub user_id: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

/// Body of a rating submission.
///
/// Fields are kept as raw JSON so that type mismatches surface as
/// validation errors instead of body rejections. Absent fields are `Null`.
#[derive(Debug, Clone, Default)]
pub struct NewRating {
    pub rating_value: Value,
    pub user_id: Value,
}

impl NewRating {
    /// Extract `ratingValue` and `userId` from a request body.
    ///
    /// Anything other than a JSON object carries no rating.
    pub fn from_body(body: Value) -> Result<Self, RatingError> {
        let Value::Object(mut fields) = body else {
            return Err(RatingError::InvalidRatingValue);
        };

        Ok(Self {
            rating_value: fields.remove("ratingValue").unwrap_or_default(),
            user_id: fields.remove("userId").unwrap_or_default(),
        })
    }
}
