//! Unified error handling for the HTTP layer.
//!
//! Every handler returns `Result<T, ApiError>`. Not-found errors carry their
//! localized message to the client; storage errors are logged and answered with
//! a generic message so file paths never leak.

use crate::cart_store::CartError;
use crate::product_store::ProductError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Body message for any storage failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Application-level error type for the HTTP routes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Product(ProductError::NotFound(_)) | Self::Cart(CartError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Product(ProductError::Storage(_)) | Self::Cart(CartError::Storage(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(error = %error_chain(&self), "Request error");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            tracing::debug!(error = %self, "Request rejected");
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Renders an error and its sources as `outer: inner: ...`.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    std::iter::successors(Some(err), |e| e.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
