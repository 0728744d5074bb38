//! Cart-specific store logic: the single-record cart file and the line-item action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::domain::Cart;
use crate::framework::{CodecOptions, SingleFileStore, StoreActor, WriteDiscipline};
use std::path::PathBuf;

/// The store task type used when the cart file is serialized.
pub type CartStoreActor = StoreActor<SingleFileStore<Cart>>;

/// Opens the cart file and its client.
///
/// With [`WriteDiscipline::Serialized`] the returned store task must be spawned
/// before the client is used.
pub fn open(
    path: impl Into<PathBuf>,
    options: CodecOptions,
    discipline: WriteDiscipline,
    buffer_size: usize,
) -> (CartClient, Option<CartStoreActor>) {
    let store = SingleFileStore::<Cart>::new(path, options);
    match discipline {
        WriteDiscipline::Unguarded => (CartClient::new(store), None),
        WriteDiscipline::Serialized => {
            let (actor, handle) = StoreActor::new(store, buffer_size);
            (CartClient::new(handle), Some(actor))
        }
    }
}
