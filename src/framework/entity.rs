//! # Record Trait
//!
//! The `Record` trait defines the contract every persisted type (Product, Cart, …) must
//! implement to be managed by a store. It specifies associated types for the creation,
//! update and action payloads, and the hooks a store calls while it holds the working copy
//! of a collection (`from_create_params`, `on_update`, `handle_action`).
//!
//! # Architecture Note
//! By defining one contract for all record types we write the read-modify-write logic
//! *once* in the stores and reuse it for every file. The associated types keep payloads
//! apart: a `Product` store only accepts a `ProductCreate`, never a cart payload.
//!
//! Hooks are synchronous. They run between the read and the write of a single
//! operation, so they must not wait on anything.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait that any persisted record must implement to be managed by a store.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human-readable kind used in logs and not-found errors (e.g. `"product"`).
    const KIND: &'static str;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug + 'static;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug + 'static;

    /// Enum representing record-specific mutations (e.g. adding a cart line).
    type Action: Send + Sync + Debug + 'static;

    /// The unique identifier of this record.
    fn id(&self) -> &str;

    /// Construct the full record from a freshly generated id and the payload.
    fn from_create_params(id: String, params: Self::Create) -> Self;

    /// Merge an update payload into the stored record.
    fn on_update(&mut self, update: Self::Update);

    /// Apply a record-specific action to the stored record.
    fn handle_action(&mut self, action: Self::Action);
}
