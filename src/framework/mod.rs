//! Generic record-store framework.
//!
//! This module provides the building blocks shared by every persisted collection:
//! the [`Record`] contract, the [`RecordStore`] / [`SingleRecordStore`] interfaces,
//! their file-backed and in-memory implementations, and the [`Serialized`] wrapper
//! that gives one file an exclusive region.
//!
//! # Main Components
//!
//! - [`Record`] - Trait that persisted types implement to be managed by a store
//! - [`FileStore`] / [`SingleFileStore`] - JSON array file / JSON object file
//! - [`StoreActor`] / [`Serialized`] - One-operation-at-a-time store task and its handle
//! - [`JsonFile`] - The on-disk codec with atomic saves
//! - [`StoreError`] - Common error types
//!
//! # Testing
//!
//! See [`memory`] for an in-memory store with failure injection.

pub mod actor;
pub mod codec;
pub mod entity;
pub mod error;
pub mod file;
pub mod id;
pub mod memory;
pub mod store;

// Re-export core types for convenience
pub use actor::{Serialized, StoreActor, WriteDiscipline};
pub use codec::{CodecOptions, JsonFile};
pub use entity::Record;
pub use error::{StoreError, StoreResult};
pub use file::{FileStore, SingleFileStore};
pub use id::generate_id;
pub use memory::MemoryStore;
pub use store::{RecordStore, SingleRecordStore};
