//! # File-backed Stores
//!
//! [`FileStore`] keeps a collection as a JSON array in one file; [`SingleFileStore`]
//! keeps one record as a JSON object in one file. Neither caches anything: every
//! operation reads the file, works on that fresh copy and, if it mutated something,
//! writes the whole document back.
//!
//! **Concurrency Model**:
//! These stores do not coordinate with each other. Two overlapping mutations on the
//! same file both read the same snapshot, and the later write replaces the earlier
//! one (lost update). Wrap the store in [`Serialized`](crate::framework::Serialized)
//! to run one operation at a time per file.

use crate::framework::codec::{CodecOptions, JsonFile};
use crate::framework::entity::Record;
use crate::framework::error::{StoreError, StoreResult};
use crate::framework::id::generate_id;
use crate::framework::store::{apply_limit, RecordStore, SingleRecordStore};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A collection of records stored as a JSON array.
pub struct FileStore<T: Record> {
    file: JsonFile,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> FileStore<T> {
    pub fn new(path: impl Into<PathBuf>, options: CodecOptions) -> Self {
        Self {
            file: JsonFile::new(path, options),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn load(&self) -> StoreResult<Vec<T>> {
        self.file.load().await
    }

    async fn save(&self, records: &[T]) -> StoreResult<()> {
        self.file.save(records).await
    }

    fn position(records: &[T], id: &str) -> StoreResult<usize> {
        records.iter().position(|r| r.id() == id).ok_or_else(|| {
            warn!(entity_type = T::KIND, %id, "Not found");
            StoreError::not_found(T::KIND, id)
        })
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for FileStore<T> {
    async fn list(&self, limit: Option<usize>) -> StoreResult<Vec<T>> {
        let records = self.load().await?;
        debug!(entity_type = T::KIND, size = records.len(), ?limit, "List");
        Ok(apply_limit(records, limit))
    }

    async fn get(&self, id: &str) -> StoreResult<T> {
        let records = self.load().await?;
        let index = Self::position(&records, id)?;
        debug!(entity_type = T::KIND, %id, "Get");
        Ok(records[index].clone())
    }

    async fn insert(&self, params: T::Create) -> StoreResult<T> {
        debug!(entity_type = T::KIND, ?params, "Insert");
        let mut records = self.load().await?;
        let item = T::from_create_params(generate_id(), params);
        records.push(item.clone());
        self.save(&records).await?;
        info!(entity_type = T::KIND, id = %item.id(), size = records.len(), "Created");
        Ok(item)
    }

    async fn update(&self, id: &str, update: T::Update) -> StoreResult<T> {
        debug!(entity_type = T::KIND, %id, ?update, "Update");
        let mut records = self.load().await?;
        let index = Self::position(&records, id)?;
        records[index].on_update(update);
        let item = records[index].clone();
        self.save(&records).await?;
        info!(entity_type = T::KIND, %id, "Updated");
        Ok(item)
    }

    async fn delete(&self, id: &str) -> StoreResult<T> {
        debug!(entity_type = T::KIND, %id, "Delete");
        let mut records = self.load().await?;
        let index = Self::position(&records, id)?;
        let removed = records.remove(index);
        self.save(&records).await?;
        info!(entity_type = T::KIND, %id, size = records.len(), "Deleted");
        Ok(removed)
    }
}

/// A single record stored as a JSON object.
pub struct SingleFileStore<T: Record> {
    file: JsonFile,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> SingleFileStore<T> {
    pub fn new(path: impl Into<PathBuf>, options: CodecOptions) -> Self {
        Self {
            file: JsonFile::new(path, options),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the stored record and checks that it carries `id`.
    async fn load_matching(&self, id: &str) -> StoreResult<T> {
        match self.file.load::<Option<T>>().await? {
            Some(record) if record.id() == id => Ok(record),
            stored => {
                let stored_id = stored.as_ref().map(|r| r.id().to_string());
                warn!(entity_type = T::KIND, %id, ?stored_id, "Not found");
                Err(StoreError::not_found(T::KIND, id))
            }
        }
    }
}

#[async_trait]
impl<T: Record> SingleRecordStore<T> for SingleFileStore<T> {
    async fn get(&self, id: &str) -> StoreResult<T> {
        let record = self.load_matching(id).await?;
        debug!(entity_type = T::KIND, %id, "Get");
        Ok(record)
    }

    async fn insert(&self, params: T::Create) -> StoreResult<T> {
        debug!(entity_type = T::KIND, ?params, "Insert");
        let item = T::from_create_params(generate_id(), params);
        self.file.save(&item).await?;
        info!(entity_type = T::KIND, id = %item.id(), "Created");
        Ok(item)
    }

    async fn apply(&self, id: &str, action: T::Action) -> StoreResult<T> {
        debug!(entity_type = T::KIND, %id, ?action, "Action");
        let mut record = self.load_matching(id).await?;
        record.handle_action(action);
        self.file.save(&record).await?;
        info!(entity_type = T::KIND, %id, "Action ok");
        Ok(record)
    }
}
