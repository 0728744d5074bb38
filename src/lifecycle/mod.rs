//! Runtime orchestration and lifecycle management.
//!
//! - [`ShopSystem`] - Opens both stores, starts their store tasks and shuts them down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod shop_system;
pub mod tracing;

pub use self::shop_system::*;
pub use self::tracing::*;
