use crate::clients::{OrderClient, ProductClient};
use crate::config::CafeConfig;
use crate::model::ProductCreate;
use crate::product_actor::ProductError;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Seeding the catalog failed: {0}")]
    Seed(#[from] ProductError),

    #[error("Actor task failed: {0}")]
    ActorPanicked(String),
}

/// The runtime orchestrator for the café backend.
///
/// `CafeSystem` owns one Product actor (the catalog) and one Order actor,
/// wired so that the Order actor reserves stock through its own
/// `ProductClient`.
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::start(&CafeConfig::default()).await?;
///
/// let menu = system.product_client.list_products().await?;
/// let order = system.order_client.create_order("John", lines).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    /// Client for placing and reading orders
    pub order_client: OrderClient,

    /// Client for the catalog
    pub product_client: ProductClient,

    /// Actor tasks, Order actor first (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Spawns both actors with an empty catalog.
    ///
    /// `mailbox_capacity` must be greater than zero.
    pub fn new(mailbox_capacity: usize) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(mailbox_capacity);
        let (order_actor, order_client) = crate::order_actor::new(mailbox_capacity);

        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));

        Self {
            order_client,
            product_client,
            handles: vec![order_handle, product_handle],
        }
    }

    /// Spawns the actors and seeds the catalog from `config`.
    pub async fn start(config: &CafeConfig) -> Result<Self, SystemError> {
        let system = Self::new(config.mailbox_capacity);
        system.seed(&config.catalog).await?;
        info!(products = config.catalog.len(), "Cafe system started");
        Ok(system)
    }

    /// Adds `catalog` to the Product actor in order. On an empty actor the
    /// products get ids 1, 2, 3... in the order given.
    pub async fn seed(&self, catalog: &[ProductCreate]) -> Result<(), SystemError> {
        for product in catalog {
            self.product_client.create_product(product.clone()).await?;
        }
        Ok(())
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the mailboxes; each actor finishes the
    /// requests already queued and then exits. Returns an error if an actor
    /// task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorPanicked(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
