//! Error types for the Cart store.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The stored cart does not carry the requested id.
    #[error("Carrito no encontrado")]
    NotFound(String),

    /// The cart file could not be read, decoded or written.
    #[error("Cart storage error")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for CartError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id, .. } => CartError::NotFound(id),
            other => CartError::Storage(other),
        }
    }
}
