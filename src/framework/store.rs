//! # Store Traits
//!
//! Two container shapes exist on disk and each gets its own interface:
//!
//! - [`RecordStore`]: an ordered collection of records with field updates (the product
//!   file holds a JSON array).
//! - [`SingleRecordStore`]: exactly one record changed only through actions (the cart
//!   file holds a single JSON object).
//!
//! Callers only see these traits, so the backing technology can change (flat file,
//! in-memory, serialized wrapper) without touching them.

use crate::framework::entity::Record;
use crate::framework::error::StoreResult;
use async_trait::async_trait;

/// CRUD over an ordered collection of records.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync + 'static {
    /// Returns the first `limit` records in stored order, or all of them when `limit` is `None`.
    async fn list(&self, limit: Option<usize>) -> StoreResult<Vec<T>>;

    /// Returns the record whose id equals `id`.
    async fn get(&self, id: &str) -> StoreResult<T>;

    /// Creates a record with a fresh id, appends it and persists the collection.
    async fn insert(&self, params: T::Create) -> StoreResult<T>;

    /// Merges `update` into the record with the given id and persists the collection.
    async fn update(&self, id: &str, update: T::Update) -> StoreResult<T>;

    /// Removes the record with the given id, persists the collection and returns the removed record.
    async fn delete(&self, id: &str) -> StoreResult<T>;
}

/// Access to a container that holds exactly one record.
#[async_trait]
pub trait SingleRecordStore<T: Record>: Send + Sync + 'static {
    /// Returns the stored record if its id equals `id`.
    async fn get(&self, id: &str) -> StoreResult<T>;

    /// Creates a record with a fresh id, replacing whatever was stored before.
    async fn insert(&self, params: T::Create) -> StoreResult<T>;

    /// Runs a record-specific action on the stored record if its id equals `id`.
    async fn apply(&self, id: &str, action: T::Action) -> StoreResult<T>;
}

/// Truncates `records` to the requested cap. `None` and `Some(0)` keep everything.
pub(crate) fn apply_limit<T>(mut records: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit.filter(|n| *n > 0) {
        records.truncate(limit);
    }
    records
}
