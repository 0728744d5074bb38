//! HTTP routes over the product and cart clients.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Products
//! GET    /api/products         - List (optional ?limit=N)
//! GET    /api/products/{id}    - Get
//! POST   /api/products         - Create
//! PUT    /api/products/{id}    - Partial update
//! DELETE /api/products/{id}    - Delete
//!
//! # Carts
//! POST /api/carts                                - Create
//! GET  /api/carts/{id}                           - Line items
//! POST /api/carts/{cart_id}/product/{product_id} - Add product
//! ```

pub mod carts;
pub mod error;
pub mod products;

pub use error::ApiError;

use crate::clients::{CartClient, ProductClient};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// State shared across all handlers. Both clients are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub carts: CartClient,
}

impl AppState {
    pub fn new(products: ProductClient, carts: CartClient) -> Self {
        Self { products, carts }
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(products::routes())
        .merge(carts::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
