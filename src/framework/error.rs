//! # Store Errors
//!
//! This module defines the error taxonomy shared by every store implementation.
//! Stores surface these typed failures; the clients and the HTTP layer decide
//! how each one is presented to a caller.

use std::path::PathBuf;

/// Errors that can occur within a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with the requested id exists.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The backing file was read but its content does not decode.
    #[error("corrupt data in {}: {source}", path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file could not be read or written.
    #[error("storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The serialized store task has stopped accepting work.
    #[error("store closed")]
    StoreClosed,

    /// The serialized store task dropped the reply channel.
    #[error("store dropped response channel")]
    StoreDropped,
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Returns true for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
