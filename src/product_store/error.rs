//! Error types for the Product store.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Producto no encontrado")]
    NotFound(String),

    /// The product file could not be read, decoded or written.
    #[error("Product storage error")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id, .. } => ProductError::NotFound(id),
            other => ProductError::Storage(other),
        }
    }
}
