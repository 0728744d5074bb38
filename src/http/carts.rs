//! Cart routes.
//!
//! ```text
//! POST /api/carts                              - Create an empty cart (body ignored)
//! GET  /api/carts/{id}                         - Line items of the cart
//! POST /api/carts/{cart_id}/product/{product_id} - Add one unit of a product
//! ```

use super::error::Result;
use super::AppState;
use crate::domain::{Cart, LineItem};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/carts", post(create))
        .route("/api/carts/{id}", get(show))
        .route("/api/carts/{cart_id}/product/{product_id}", post(add_product))
}

async fn create(State(state): State<AppState>) -> Result<Json<Cart>> {
    Ok(Json(state.carts.create().await?))
}

async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Vec<LineItem>>> {
    Ok(Json(state.carts.line_items(&id).await?))
}

async fn add_product(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(String, String)>,
) -> Result<Json<Cart>> {
    Ok(Json(state.carts.add_product(&cart_id, &product_id).await?))
}
