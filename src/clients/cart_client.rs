use crate::cart_store::{CartAction, CartError};
use crate::domain::{Cart, LineItem};
use crate::framework::SingleRecordStore;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the cart file.
#[derive(Clone)]
pub struct CartClient {
    inner: Arc<dyn SingleRecordStore<Cart>>,
}

impl CartClient {
    pub fn new(store: impl SingleRecordStore<Cart>) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Creates a new empty cart, replacing the stored one.
    #[instrument(skip(self))]
    pub async fn create(&self) -> Result<Cart, CartError> {
        debug!("Sending request");
        Ok(self.inner.insert(()).await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Cart, CartError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }

    /// Returns only the line items of the cart.
    #[instrument(skip(self))]
    pub async fn line_items(&self, id: &str) -> Result<Vec<LineItem>, CartError> {
        Ok(self.get(id).await?.products)
    }

    /// Adds one unit of `product_id` to the cart and returns the whole cart.
    #[instrument(skip(self))]
    pub async fn add_product(&self, cart_id: &str, product_id: &str) -> Result<Cart, CartError> {
        debug!("Sending request");
        let action = CartAction::AddProduct(product_id.to_string());
        Ok(self.inner.apply(cart_id, action).await?)
    }
}
