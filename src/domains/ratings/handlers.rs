//! HTTP handler for rating submissions.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use super::model::{NewRating, Rating};
use super::service::RatingService;
use crate::core::Result;

/// `POST /resources/{id}/ratings`
#[instrument(skip_all, fields(resource_id = %resource_id))]
pub async fn create_rating(
    State(service): State<Arc<RatingService>>,
    Path(resource_id): Path<String>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Rating>)> {
    let Json(body) = payload?;
    let request = NewRating::from_body(body)?;
    let rating = service.create(&resource_id, request).await?;
    Ok((StatusCode::CREATED, Json(rating)))
}
