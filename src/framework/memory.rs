//! # In-memory Store & Failure Injection
//!
//! `MemoryStore<T>` implements the same [`RecordStore`] API as [`FileStore`](crate::framework::FileStore)
//! but keeps the collection in a `Vec`. It lets you exercise callers (clients, HTTP handlers)
//! without touching the filesystem, and it can simulate storage failures that are awkward to
//! reproduce with real files.
//!
//! | Feature | MemoryStore | FileStore |
//! |---------|-------------|-----------|
//! | **Speed** | Instant | Disk I/O on every call |
//! | **Persistence** | None | JSON file |
//! | **Error Injection** | Easy (`failing`) | Requires a broken file |
//!
//! ```rust
//! use shop_records::domain::Product;
//! use shop_records::framework::{MemoryStore, RecordStore, StoreError};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Simulate a disk that cannot be read
//!     let store = MemoryStore::<Product>::failing(|| StoreError::StorageUnavailable {
//!         path: "productos.json".into(),
//!         source: std::io::ErrorKind::PermissionDenied.into(),
//!     });
//!
//!     let result = store.list(None).await;
//!     assert!(matches!(result, Err(StoreError::StorageUnavailable { .. })));
//! }
//! ```

use crate::framework::entity::Record;
use crate::framework::error::{StoreError, StoreResult};
use crate::framework::id::generate_id;
use crate::framework::store::{apply_limit, RecordStore};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// An ordered collection of records held in memory.
pub struct MemoryStore<T: Record> {
    records: Mutex<Vec<T>>,
    failure: Option<fn() -> StoreError>,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Starts with the given records, in order.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            failure: None,
        }
    }

    /// A store whose every operation fails with the error built by `failure`.
    pub fn failing(failure: fn() -> StoreError) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure: Some(failure),
        }
    }

    fn check(&self) -> StoreResult<()> {
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(()),
        }
    }

    fn position(records: &[T], id: &str) -> StoreResult<usize> {
        records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn list(&self, limit: Option<usize>) -> StoreResult<Vec<T>> {
        self.check()?;
        let records = self.records.lock().await.clone();
        Ok(apply_limit(records, limit))
    }

    async fn get(&self, id: &str) -> StoreResult<T> {
        self.check()?;
        let records = self.records.lock().await;
        let index = Self::position(&records, id)?;
        Ok(records[index].clone())
    }

    async fn insert(&self, params: T::Create) -> StoreResult<T> {
        self.check()?;
        let item = T::from_create_params(generate_id(), params);
        let mut records = self.records.lock().await;
        records.push(item.clone());
        info!(entity_type = T::KIND, id = %item.id(), size = records.len(), "Created in memory");
        Ok(item)
    }

    async fn update(&self, id: &str, update: T::Update) -> StoreResult<T> {
        self.check()?;
        let mut records = self.records.lock().await;
        let index = Self::position(&records, id)?;
        records[index].on_update(update);
        Ok(records[index].clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<T> {
        self.check()?;
        let mut records = self.records.lock().await;
        let index = Self::position(&records, id)?;
        debug!(entity_type = T::KIND, %id, "Deleted from memory");
        Ok(records.remove(index))
    }
}
