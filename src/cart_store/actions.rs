//! Custom actions for the Cart store.
//!
//! This module defines the cart-specific mutations that can be applied to a
//! [`Cart`](crate::domain::Cart) record through
//! [`SingleRecordStore::apply`](crate::framework::SingleRecordStore::apply).

/// Custom actions for Cart records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Adds one unit of the given product id to the cart.
    ///
    /// Increments the existing line for that product or appends a new one.
    AddProduct(String),
}
