use tracing::info;
use tracing_subscriber::EnvFilter;

use surfsup_server::config::ServerConfig;
use surfsup_server::store::WeatherStore;
use surfsup_server::web::{API_ROUTES, AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "surfsup_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Fail fast if the dataset is missing or has the wrong shape
    let store = WeatherStore::open(&config.store).await?;

    let app = create_router(AppState::new(store.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Hawaii climate API listening on http://{}", config.bind_addr);
    for route in API_ROUTES {
        info!("  GET {:<26} {}", route.path, route.description);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
