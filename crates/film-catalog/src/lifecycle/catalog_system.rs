use crate::clients::{ActorClient, MovieClient};
use crate::model::{Actor, Catalog, Movie};
use record_store::{RecordStore, StoreConfig, StoreError};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running catalog: one store task and the clients that talk to it.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::start(&StoreConfig::default()).await?;
///
/// let movie = system.movies.add(&fields).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for actor records
    pub actors: ActorClient,

    /// Client for movie records
    pub movies: MovieClient,

    handle: JoinHandle<()>,
}

impl CatalogSystem {
    /// Opens the store described by `config` and spawns its task.
    pub async fn start(config: &StoreConfig) -> Result<Self, StoreError> {
        let (store, handle) = RecordStore::<Catalog>::open(config).await?;
        let actors = ActorClient::new(handle.client::<Actor>());
        let movies = MovieClient::new(handle.client::<Movie>());
        let task = tokio::spawn(store.run());

        Ok(Self {
            actors,
            movies,
            handle: task,
        })
    }

    /// Drops the clients held here and waits for the store task to finish.
    ///
    /// The task only stops once every clone of the clients is gone, so callers must drop
    /// the copies they handed out (for instance to the HTTP router) first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        // Dropping the senders closes the channel; the store drains it and exits.
        drop(self.actors);
        drop(self.movies);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
