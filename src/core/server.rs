//! API server state and route table.
//!
//! `ApiServer` bundles configuration with the domain services and is the
//! shared state behind every handler. Handlers extract only the service
//! they need through `FromRef`.

use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::{
    ratings::{RatingService, create_rating},
    resources::{
        ResourceService, create_resource, delete_resource, get_resource, list_resources,
        update_resource,
    },
};

/// Shared application state.
#[derive(Clone)]
pub struct ApiServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for the resource collection.
    resources: Arc<ResourceService>,

    /// Service for the rating collection.
    ratings: Arc<RatingService>,
}

impl ApiServer {
    /// Create a new server, opening (and if needed seeding) both collections.
    pub async fn new(config: Config) -> Result<Self> {
        let resources = ResourceService::open(config.storage.resources_path()).await?;
        let ratings = RatingService::open(config.storage.ratings_path()).await?;

        info!("Collections opened");

        Ok(Self {
            config: Arc::new(config),
            resources: Arc::new(resources),
            ratings: Arc::new(ratings),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The rating service.
    pub fn ratings(&self) -> &Arc<RatingService> {
        &self.ratings
    }
}

impl FromRef<ApiServer> for Arc<ResourceService> {
    fn from_ref(server: &ApiServer) -> Self {
        server.resources.clone()
    }
}

impl FromRef<ApiServer> for Arc<RatingService> {
    fn from_ref(server: &ApiServer) -> Self {
        server.ratings.clone()
    }
}

/// The `/resources` route table.
pub fn routes() -> Router<ApiServer> {
    Router::new()
        .route("/resources", get(list_resources).post(create_resource))
        .route(
            "/resources/{id}",
            get(get_resource).put(update_resource).delete(delete_resource),
        )
        .route("/resources/{id}/ratings", post(create_rating))
}
