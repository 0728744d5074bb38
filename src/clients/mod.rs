//! Type-safe wrappers around the record stores.

pub mod cart_client;
pub mod product_client;

pub use cart_client::*;
pub use product_client::*;
