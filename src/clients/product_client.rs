use crate::domain::{Product, ProductCreate, ProductUpdate};
use crate::framework::RecordStore;
use crate::product_store::ProductError;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the product collection.
///
/// Holds any [`RecordStore<Product>`] behind an `Arc`, so the backing store
/// (plain file, serialized file, memory) is chosen once at startup.
#[derive(Clone)]
pub struct ProductClient {
    inner: Arc<dyn RecordStore<Product>>,
}

impl ProductClient {
    pub fn new(store: impl RecordStore<Product>) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.list(limit).await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }

    #[instrument(skip(self, params))]
    pub async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!(?params, "create called");
        Ok(self.inner.insert(params).await?)
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: ProductUpdate) -> Result<Product, ProductError> {
        debug!(?update, "update called");
        Ok(self.inner.update(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }
}
