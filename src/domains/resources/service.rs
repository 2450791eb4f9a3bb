//! Resource service implementation.
//!
//! The ResourceService owns the resource collection file and implements
//! listing, lookup, creation, shallow-merge updates and deletion on top of
//! whole-file read-modify-write cycles.

use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{info, instrument};
use uuid::Uuid;

use super::error::ResourceError;
use super::model::{Resource, ResourceFilter};
use crate::domains::json::is_truthy;
use crate::domains::storage::{JsonFileStore, StorageError};

/// Fields that must be present (and truthy) when creating a resource.
const REQUIRED_FIELDS: [&str; 2] = ["title", "type"];

/// Service for managing resources.
#[derive(Debug)]
pub struct ResourceService {
    store: JsonFileStore<Resource>,
}

impl ResourceService {
    /// Open the service on top of the collection file at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = JsonFileStore::open(path).await?;
        info!("Resource collection at {}", store.path().display());
        Ok(Self { store })
    }

    /// List all resources passing the given filter, in stored order.
    pub async fn list_all(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ResourceError> {
        let mut resources = self.store.load().await?;
        resources.retain(|r| filter.matches(r));
        Ok(resources)
    }

    /// Fetch a single resource by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<Resource, ResourceError> {
        self.store
            .load()
            .await?
            .into_iter()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| ResourceError::not_found(id))
    }

    /// Create a resource from a client-supplied JSON body.
    ///
    /// `title` and `type` must be present; a fresh UUID is assigned as `id`.
    #[instrument(skip_all)]
    pub async fn create(&self, body: Value) -> Result<Resource, ResourceError> {
        let fields = match body {
            Value::Object(map) if has_required_fields(&map) => map,
            _ => return Err(ResourceError::MissingRequiredFields),
        };

        let resource = Resource::with_id(Uuid::new_v4().to_string(), fields);

        self.store
            .mutate(|resources| {
                resources.push(resource.clone());
                Ok::<_, ResourceError>(())
            })
            .await?;

        info!(id = resource.id(), "Created resource");
        Ok(resource)
    }

    /// Shallow-merge `patch` over the resource with the given ID.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: Value) -> Result<Resource, ResourceError> {
        let patch = match patch {
            Value::Object(map) if !map.is_empty() => map,
            _ => return Err(ResourceError::EmptyPatch),
        };

        let updated = self
            .store
            .mutate(|resources| {
                let resource = resources
                    .iter_mut()
                    .find(|r| r.id() == Some(id))
                    .ok_or_else(|| ResourceError::not_found(id))?;
                resource.merge(patch);
                Ok::<_, ResourceError>(resource.clone())
            })
            .await?;

        info!("Updated resource");
        Ok(updated)
    }

    /// Remove the resource with the given ID.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ResourceError> {
        self.store
            .mutate(|resources| {
                let index = resources
                    .iter()
                    .position(|r| r.id() == Some(id))
                    .ok_or_else(|| ResourceError::not_found(id))?;
                resources.remove(index);
                Ok::<_, ResourceError>(())
            })
            .await?;

        info!("Deleted resource");
        Ok(())
    }
}

fn has_required_fields(fields: &Map<String, Value>) -> bool {
    REQUIRED_FIELDS
        .iter()
        .all(|key| fields.get(*key).is_some_and(is_truthy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use tempfile::TempDir;

    async fn service(temp_dir: &TempDir) -> ResourceService {
        ResourceService::open(temp_dir.path().join("resources.json"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        let a = service
            .create(json!({"title": "A", "type": "book"}))
            .await
            .unwrap();
        let b = service
            .create(json!({"title": "B", "type": "book"}))
            .await
            .unwrap();

        assert_ne!(a.id(), b.id());
        let all = service.list_all(&ResourceFilter::default()).await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        for body in [
            json!({"title": "A"}),
            json!({"type": "book"}),
            json!({"title": "", "type": "book"}),
            json!({"title": null, "type": "book"}),
            json!(["title", "type"]),
        ] {
            let result = service.create(body).await;
            assert!(matches!(result, Err(ResourceError::MissingRequiredFields)));
        }

        let all = service.list_all(&ResourceFilter::default()).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_type_and_author() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        service
            .create(json!({"title": "A", "type": "book", "authorId": "u1"}))
            .await
            .unwrap();
        service
            .create(json!({"title": "B", "type": "video", "authorId": "u1"}))
            .await
            .unwrap();
        service
            .create(json!({"title": "C", "type": "book", "authorId": "u2"}))
            .await
            .unwrap();

        let books = service
            .list_all(&ResourceFilter {
                resource_type: Some("book".into()),
                author_id: None,
            })
            .await
            .unwrap();
        assert_eq!(books.len(), 2);

        let u1_books = service
            .list_all(&ResourceFilter {
                resource_type: Some("book".into()),
                author_id: Some("u1".into()),
            })
            .await
            .unwrap();
        assert_eq!(u1_books.len(), 1);
        assert_eq!(u1_books[0].get("title"), Some(&json!("A")));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        let created = service
            .create(json!({"title": "A", "type": "book", "extra": [1, 2]}))
            .await
            .unwrap();

        let fetched = service.get_by_id(created.id().unwrap()).await.unwrap();
        assert_eq!(fetched, created);

        let missing = service.get_by_id("nope").await;
        assert!(matches!(missing, Err(ResourceError::NotFound(id)) if id == "nope"));
    }

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        let created = service
            .create(json!({"title": "A", "type": "book", "pages": 10}))
            .await
            .unwrap();
        let id = created.id().unwrap().to_string();

        let updated = service
            .update(&id, json!({"title": "A2", "lang": "de"}))
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&updated).unwrap(),
            json!({"id": id, "title": "A2", "type": "book", "pages": 10, "lang": "de"})
        );
        assert_eq!(service.get_by_id(&id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_patch_and_unknown_id() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        let created = service
            .create(json!({"title": "A", "type": "book"}))
            .await
            .unwrap();

        let empty = service.update(created.id().unwrap(), json!({})).await;
        assert!(matches!(empty, Err(ResourceError::EmptyPatch)));

        let unknown = service.update("nope", json!({"title": "X"})).await;
        assert!(matches!(unknown, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        let keep = service
            .create(json!({"title": "A", "type": "book"}))
            .await
            .unwrap();
        let gone = service
            .create(json!({"title": "B", "type": "book"}))
            .await
            .unwrap();

        service.delete(gone.id().unwrap()).await.unwrap();
        assert!(matches!(
            service.get_by_id(gone.id().unwrap()).await,
            Err(ResourceError::NotFound(_))
        ));

        let unknown = service.delete("nope").await;
        assert!(matches!(unknown, Err(ResourceError::NotFound(_))));

        let all = service.list_all(&ResourceFilter::default()).await.unwrap();
        assert_eq!(all, vec![keep]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_all_persist() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir).await;

        let creates = (0..10).map(|i| service.create(json!({"title": i.to_string(), "type": "t"})));
        let created: Vec<_> = futures::future::join_all(creates)
            .await
            .into_iter()
            .map(Result::unwrap)
            .collect();

        let ids: HashSet<_> = created.iter().filter_map(Resource::id).collect();
        assert_eq!(ids.len(), 10);

        let all = service.list_all(&ResourceFilter::default()).await.unwrap();
        assert_eq!(all.len(), 10);
    }
}
