//! Record trait implementation for the Product domain type.
//!
//! This module contains the [`Record`] trait implementation
//! that enables [`Product`] to be managed by the generic [`FileStore`](crate::framework::FileStore).
//!
//! # Update Rule
//!
//! A partial update only overrides a stored field when the caller supplied a
//! *truthy* value for it:
//!
//! | Field | Overrides when |
//! |-------|----------------|
//! | `title`, `description`, `code`, `category` | supplied and not `""` |
//! | `price` | supplied and not `0` (or NaN) |
//! | `stock` | supplied and not `0` |
//! | `thumbnails` | supplied (an empty list counts) |
//!
//! Anything else keeps the stored value. As a consequence a caller cannot clear a
//! text field or set `price`/`stock` to zero through an update. `id` and `status`
//! are never touched.

use crate::domain::{Product, ProductCreate, ProductUpdate};
use crate::framework::Record;
use std::convert::Infallible;

impl Record for Product {
    const KIND: &'static str = "product";

    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = Infallible;

    fn id(&self) -> &str {
        &self.id
    }

    /// Creates a new active Product from creation parameters.
    fn from_create_params(id: String, params: ProductCreate) -> Self {
        Self::new(id, params)
    }

    /// Merges a partial update using the truthy-override rule.
    fn on_update(&mut self, update: ProductUpdate) {
        override_text(&mut self.title, update.title);
        override_text(&mut self.description, update.description);
        override_text(&mut self.code, update.code);
        override_text(&mut self.category, update.category);

        if let Some(price) = update.price.filter(|p| *p != 0.0 && !p.is_nan()) {
            self.price = price;
        }
        if let Some(stock) = update.stock.filter(|s| *s != 0) {
            self.stock = stock;
        }
        if let Some(thumbnails) = update.thumbnails {
            self.thumbnails = thumbnails;
        }
    }

    fn handle_action(&mut self, action: Infallible) {
        match action {}
    }
}

fn override_text(field: &mut String, supplied: Option<String>) {
    if let Some(value) = supplied.filter(|v| !v.is_empty()) {
        *field = value;
    }
}
