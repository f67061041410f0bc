//! Film catalog server.
//!
//! Reads its settings from the environment (a `.env` file is honoured), opens the record
//! store and serves the HTTP API until Ctrl-C. See [`film_catalog::config`] for the
//! variables.

use film_catalog::config::AppConfig;
use film_catalog::http::{router, AppState};
use film_catalog::lifecycle::{setup_tracing, CatalogSystem};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(database_url = %config.store.database_url, "Starting film catalog");

    let system = CatalogSystem::start(&config.store).await?;
    let app = router(AppState::new(&system));

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, "Listening");

    // The router owns client clones; they are released when serving stops.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;

    info!("Film catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
