//! # Observability & Tracing
//!
//! This module provides the tracing setup for the whole service.
//!
//! ## What Gets Traced
//!
//! - **Store tasks**: startup, shutdown and how many operations they handled
//! - **Record operations**: List, Get, Insert, Update, Delete and Actions, with `entity_type` and `id`
//! - **Codec**: saves, and fallbacks taken for missing or corrupt files
//! - **HTTP**: one span per request via `tower_http::trace::TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default filter when RUST_LOG is unset)
//! cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to the store framework
//! RUST_LOG=shop_records::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a product insert followed by a cart merge looks like:
//!
//! ```text
//! INFO Created entity_type="product" id="lq3x9k2m1b7d0f4h8c" size=1
//! INFO Action ok entity_type="cart" id="lq3xa0c5p2n6w1e9rj"
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "shop_records=info,tower_http=debug";

/// Initializes structured logging.
///
/// Uses `RUST_LOG` when set, [`DEFAULT_FILTER`] otherwise.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line comes from
        .compact()
        .init();
}
