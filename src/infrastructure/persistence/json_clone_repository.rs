//! JSON file implementation of the clone repository.

use async_trait::async_trait;
use std::path::PathBuf;

use super::json_file_store::{Collection, JsonFileStore, StoreError};
use crate::domain::entities::{QueueEntry, RequestCounters};
use crate::domain::repositories::CloneRepository;
use crate::error::AppError;

/// Clone repository persisting each collection as its own JSON document.
///
/// Blocking file I/O is moved onto tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct JsonCloneRepository {
    store: JsonFileStore,
}

impl JsonCloneRepository {
    /// Creates a repository rooted at `data_dir`. Nothing is touched on disk
    /// until the first save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(data_dir),
        }
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }

    async fn blocking<T, F>(&self, collection: Collection, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(JsonFileStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || op(store))
            .await
            .map_err(|_| StoreError::Join { collection })?
    }
}

#[async_trait]
impl CloneRepository for JsonCloneRepository {
    async fn load_approved(&self) -> Result<Vec<String>, AppError> {
        let approved = self
            .blocking(Collection::Approved, |s| s.load(Collection::Approved))
            .await?;
        Ok(approved)
    }

    async fn save_approved(&self, approved: &[String]) -> Result<(), AppError> {
        let approved = approved.to_vec();
        self.blocking(Collection::Approved, move |s| {
            s.save(Collection::Approved, &approved)
        })
        .await?;
        Ok(())
    }

    async fn load_queue(&self) -> Result<Vec<QueueEntry>, AppError> {
        let queue = self
            .blocking(Collection::Queue, |s| s.load(Collection::Queue))
            .await?;
        Ok(queue)
    }

    async fn save_queue(&self, queue: &[QueueEntry]) -> Result<(), AppError> {
        let queue = queue.to_vec();
        self.blocking(Collection::Queue, move |s| s.save(Collection::Queue, &queue))
            .await?;
        Ok(())
    }

    async fn load_counters(&self) -> Result<RequestCounters, AppError> {
        let counters = self
            .blocking(Collection::Requests, |s| s.load(Collection::Requests))
            .await?;
        Ok(counters)
    }

    async fn save_counters(&self, counters: &RequestCounters) -> Result<(), AppError> {
        let counters = counters.clone();
        self.blocking(Collection::Requests, move |s| {
            s.save(Collection::Requests, &counters)
        })
        .await?;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.is_healthy())
            .await
            .unwrap_or(false)
    }
}
