//! Pure data structures (records and DTOs) implementing the [`Record`](crate::framework::Record) trait.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
