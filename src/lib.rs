//! # Shop Records
//!
//! > **Products and carts over JSON files, behind a small HTTP API.**
//!
//! Two collections are persisted as pretty-printed JSON on local disk: a product
//! collection (a JSON array) and a cart (a single JSON object). Every request reads
//! the file, applies its change to that fresh copy and rewrites the whole document.
//!
//! ## Architecture Notes
//!
//! ### 1. One store, many records
//! The read-modify-write logic is written once in [`framework`] and reused for every
//! record type through the [`Record`](framework::Record) trait. Products and carts
//! only describe how they are created, updated and acted upon.
//!
//! ### 2. Two container shapes
//! A collection file is a [`FileStore`](framework::FileStore) behind the
//! [`RecordStore`](framework::RecordStore) trait. The cart file holds one object and
//! gets its own [`SingleFileStore`](framework::SingleFileStore) /
//! [`SingleRecordStore`](framework::SingleRecordStore) pair.
//!
//! ### 3. Concurrency Model
//! By default stores do not coordinate: overlapping mutations on one file can lose
//! updates, the later full rewrite winning. Setting `SHOP_WRITE_DISCIPLINE=serialized`
//! puts each file behind a [`StoreActor`](framework::StoreActor) that runs one operation
//! at a time. Callers use the same traits either way.
//!
//! ### 4. Update quirk
//! Product updates only override fields supplied with a truthy value, so an update
//! can never set `price` or `stock` to `0` or clear a text field. See
//! [`product_store::entity`].
//!
//! ### 5. Observability
//! `tracing` everywhere with structured fields; see [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`] - Record trait, store traits, file/memory stores, codec, ids, store tasks
//! - [`domain`] - `Product`, `Cart` and their payloads; the cart line-item merger
//! - [`product_store`], [`cart_store`] - Record implementations, errors and factories
//! - [`clients`] - `ProductClient` / `CartClient`, the API the HTTP layer calls
//! - [`http`] - axum routes and error responses
//! - [`lifecycle`] - `ShopSystem` orchestration and tracing setup
//! - [`config`] - Environment configuration
//!
//! ### Running the Server
//!
//! ```bash
//! echo '[]' > productos.json
//! RUST_LOG=info cargo run
//! ```

pub mod cart_store;
pub mod clients;
pub mod config;
pub mod domain;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod product_store;
