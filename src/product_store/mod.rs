//! Product-specific store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::{CodecOptions, FileStore, StoreActor, WriteDiscipline};
use crate::domain::Product;
use std::path::PathBuf;

/// The store task type used when the product file is serialized.
pub type ProductStoreActor = StoreActor<FileStore<Product>>;

/// Opens the product file and its client.
///
/// With [`WriteDiscipline::Serialized`] the returned store task must be spawned
/// before the client is used.
pub fn open(
    path: impl Into<PathBuf>,
    options: CodecOptions,
    discipline: WriteDiscipline,
    buffer_size: usize,
) -> (ProductClient, Option<ProductStoreActor>) {
    let store = FileStore::<Product>::new(path, options);
    match discipline {
        WriteDiscipline::Unguarded => (ProductClient::new(store), None),
        WriteDiscipline::Serialized => {
            let (actor, handle) = StoreActor::new(store, buffer_size);
            (ProductClient::new(handle), Some(actor))
        }
    }
}
