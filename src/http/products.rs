//! Product routes.
//!
//! ```text
//! GET    /api/products?limit=N  - List (first N when N is a positive integer)
//! GET    /api/products/{id}     - Get
//! POST   /api/products          - Insert
//! PUT    /api/products/{id}     - Partial update
//! DELETE /api/products/{id}     - Delete
//! ```

use super::error::Result;
use super::AppState;
use crate::domain::{Product, ProductCreate, ProductUpdate};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Query string of the list route.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
}

impl ListParams {
    /// The cap to apply, if `limit` is a positive integer.
    pub fn limit(&self) -> Option<usize> {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route("/api/products/{id}", get(show).put(update).delete(remove))
}

async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.products.list(params.limit()).await?))
}

async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    Ok(Json(state.products.get(&id).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(params): Json<ProductCreate>,
) -> Result<Json<Product>> {
    Ok(Json(state.products.create(params).await?))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    Ok(Json(state.products.update(&id, update).await?))
}

async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    Ok(Json(state.products.delete(&id).await?))
}

#[cfg(test)]
mod tests {
    use super::ListParams;

    fn limit(raw: Option<&str>) -> Option<usize> {
        ListParams {
            limit: raw.map(str::to_string),
        }
        .limit()
    }

    #[test]
    fn only_positive_integers_cap_the_list() {
        assert_eq!(limit(Some("2")), Some(2));
        assert_eq!(limit(None), None);
        assert_eq!(limit(Some("0")), None);
        assert_eq!(limit(Some("-1")), None);
        assert_eq!(limit(Some("abc")), None);
        assert_eq!(limit(Some("2.5")), None);
    }
}
