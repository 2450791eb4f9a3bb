//! HTTP handlers for the `/resources` routes.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use super::model::{Resource, ResourceFilter};
use super::service::ResourceService;
use crate::core::Result;

/// `GET /resources?type=&authorId=`
#[instrument(skip_all)]
pub async fn list_resources(
    State(service): State<Arc<ResourceService>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Resource>>> {
    let filter = ResourceFilter::from_pairs(params);
    Ok(Json(service.list_all(&filter).await?))
}

/// `GET /resources/{id}`
#[instrument(skip_all, fields(id = %id))]
pub async fn get_resource(
    State(service): State<Arc<ResourceService>>,
    Path(id): Path<String>,
) -> Result<Json<Resource>> {
    Ok(Json(service.get_by_id(&id).await?))
}

/// `POST /resources`
#[instrument(skip_all)]
pub async fn create_resource(
    State(service): State<Arc<ResourceService>>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Resource>)> {
    let Json(body) = payload?;
    let resource = service.create(body).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// `PUT /resources/{id}`
#[instrument(skip_all, fields(id = %id))]
pub async fn update_resource(
    State(service): State<Arc<ResourceService>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Resource>> {
    let Json(patch) = payload?;
    Ok(Json(service.update(&id, patch).await?))
}

/// `DELETE /resources/{id}`
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_resource(
    State(service): State<Arc<ResourceService>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
