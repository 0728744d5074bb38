use crate::cart_store;
use crate::clients::{CartClient, ProductClient};
use crate::config::ShopConfig;
use crate::product_store;
use thiserror::Error;
use tracing::{error, info};

/// Error returned when a store task did not stop cleanly.
#[derive(Debug, Error)]
#[error("Store task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// The runtime orchestrator for the product and cart stores.
///
/// `ShopSystem` is responsible for:
/// - **Wiring**: opening both files with the configured codec options
/// - **Write discipline**: spawning one store task per file when operations are serialized
/// - **Lifecycle Management**: stopping those tasks on shutdown
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new(&config);
///
/// let product = system.product_client.create(params).await?;
/// let cart = system.cart_client.create().await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    /// Client for the product collection
    pub product_client: ProductClient,

    /// Client for the cart file
    pub cart_client: CartClient,

    /// Task handles for running store tasks (empty when unguarded)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Opens both stores and starts their store tasks if needed.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        let (product_client, product_actor) = product_store::open(
            &config.products_file,
            config.codec,
            config.write_discipline,
            config.store_buffer,
        );
        let (cart_client, cart_actor) = cart_store::open(
            &config.carts_file,
            config.codec,
            config.write_discipline,
            config.store_buffer,
        );

        let mut handles = Vec::new();
        if let Some(actor) = product_actor {
            handles.push(tokio::spawn(actor.run()));
        }
        if let Some(actor) = cart_actor {
            handles.push(tokio::spawn(actor.run()));
        }

        info!(
            products = %config.products_file.display(),
            carts = %config.carts_file.display(),
            discipline = ?config.write_discipline,
            "Stores opened"
        );

        Self {
            product_client,
            cart_client,
            handles,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops both clients, which closes the store task queues, then waits for
    /// every store task to finish the operations already queued.
    ///
    /// Clones of the clients still held elsewhere (e.g. by a router) keep their
    /// task alive; drop those first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down stores...");

        drop(self.product_client);
        drop(self.cart_client);

        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                first_failure.get_or_insert(e);
            }
        }

        match first_failure {
            Some(e) => Err(e.into()),
            None => {
                info!("Store shutdown complete.");
                Ok(())
            }
        }
    }
}
