//! Rating service implementation.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, instrument};
use uuid::Uuid;

use super::error::RatingError;
use super::model::{ANONYMOUS_USER, MAX_RATING, MIN_RATING, NewRating, Rating};
use crate::domains::json::is_truthy;
use crate::domains::storage::{JsonFileStore, StorageError};

/// Service for recording ratings.
#[derive(Debug)]
pub struct RatingService {
    store: JsonFileStore<Rating>,
}

impl RatingService {
    /// Open the service on top of the ratings file at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = JsonFileStore::open(path).await?;
        info!("Rating collection at {}", store.path().display());
        Ok(Self { store })
    }

    /// Validate and append a rating for `resource_id`.
    #[instrument(skip(self, request))]
    pub async fn create(&self, resource_id: &str, request: NewRating) -> Result<Rating, RatingError> {
        let rating_value = parse_rating_value(&request.rating_value)?;
        let user_id = resolve_user_id(request.user_id);

        let rating = Rating {
            id: Uuid::new_v4().to_string(),
            resource_id: resource_id.to_string(),
            rating_value,
            user_id,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        self.store
            .mutate(|ratings| {
                ratings.push(rating.clone());
                Ok::<_, RatingError>(())
            })
            .await?;

        info!(id = %rating.id, value = rating.rating_value, "Recorded rating");
        Ok(rating)
    }

    /// All stored ratings, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Rating>, RatingError> {
        Ok(self.store.load().await?)
    }
}

/// Accept whole JSON numbers in `MIN_RATING..=MAX_RATING`; `3.0` counts as `3`.
fn parse_rating_value(value: &Value) -> Result<u8, RatingError> {
    let n = value.as_f64().ok_or(RatingError::InvalidRatingValue)?;
    if n.fract() != 0.0 || n < f64::from(MIN_RATING) || n > f64::from(MAX_RATING) {
        return Err(RatingError::InvalidRatingValue);
    }
    Ok(n as u8)
}

/// Falsy values fall back to `ANONYMOUS_USER`; other non-strings are kept as
/// their JSON text.
fn resolve_user_id(value: Value) -> String {
    match value {
        v if !is_truthy(&v) => ANONYMOUS_USER.to_string(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;
    use tempfile::TempDir;

    async fn service(temp_dir: &TempDir) -> RatingService {
        RatingService::open(temp_dir.path().join("ratings.json"))
            .await
            .unwrap()
    }

    fn request(rating_value: Value, user_id: Value) -> NewRating {
        NewRating {
            rating_value,
            user_id,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_anonymous_user() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        let rating = service
            .create("res-1", request(json!(3), Value::Null))
            .await
            .unwrap();

        assert_eq!(rating.resource_id, "res-1");
        assert_eq!(rating.rating_value, 3);
        assert_eq!(rating.user_id, ANONYMOUS_USER);
        assert!(rating.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&rating.timestamp).is_ok());

        assert_eq!(service.list_all().await.unwrap(), vec![rating]);
    }

    #[tokio::test]
    async fn test_create_keeps_user_id() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        let rating = service
            .create("res-1", request(json!(5), json!("alice")))
            .await
            .unwrap();

        assert_eq!(rating.user_id, "alice");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        for value in [json!(0), json!(6), json!(3.5), json!("3"), Value::Null, json!(-1)] {
            let result = service.create("res-1", request(value, Value::Null)).await;
            assert!(matches!(result, Err(RatingError::InvalidRatingValue)));
        }

        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[test]
    fn test_resolve_user_id() {
        for falsy in [Value::Null, json!(""), json!(false), json!(0)] {
            assert_eq!(resolve_user_id(falsy), ANONYMOUS_USER);
        }
        assert_eq!(resolve_user_id(json!("alice")), "alice");
        assert_eq!(resolve_user_id(json!(42)), "42");
        assert_eq!(resolve_user_id(json!(true)), "true");
    }

    #[test]
    fn test_parse_rating_value_accepts_whole_float() {
        assert_eq!(parse_rating_value(&json!(3.0)).unwrap(), 3);
        assert_eq!(parse_rating_value(&json!(1)).unwrap(), 1);
        assert_eq!(parse_rating_value(&json!(5)).unwrap(), 5);
    }
}
