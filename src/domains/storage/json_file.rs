//! JSON collection file store.
//!
//! A collection is a single file holding a top-level JSON array. Every
//! operation reads the whole file; every mutation rewrites the whole file.
//! Mutations are serialized through an async mutex and written via a
//! sibling temp file plus rename, so concurrent writers never drop each
//! other's changes and readers never observe a half-written array.

use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::error::StorageError;

/// A store for one JSON array file of `T` records.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the collection at `path`, seeding it with `[]` if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::io(parent, e))?;
        }

        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| StorageError::io(&path, e))?;
        if !exists {
            info!("Creating empty collection file {}", path.display());
            fs::write(&path, "[]")
                .await
                .map_err(|e| StorageError::io(&path, e))?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
            _record: PhantomData,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole collection.
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        let data = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;
        serde_json::from_str(&data).map_err(|e| StorageError::parse(&self.path, e))
    }

    /// Run a read-modify-write cycle.
    ///
    /// The closure receives the freshly loaded collection. When it returns
    /// `Ok`, the (possibly modified) collection is written back; when it
    /// returns `Err`, the file is left untouched and the error is passed on.
    pub async fn mutate<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
        E: From<StorageError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let out = f(&mut records)?;
        self.persist(&records).await?;

        Ok(out)
    }

    async fn persist(&self, records: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(records).map_err(StorageError::Serialize)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)
            .await
            .map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;

        debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
