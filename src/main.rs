//! DriveGuard Dashboard Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from config.toml (see [`driveguard::config`]) with environment
//! variable overrides:
//! - `DRIVEGUARD_ARTIFACTS_DIR`: Artifact directory (default: ./data)
//! - `DRIVEGUARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `DRIVEGUARD_API_PORT`: Port to listen on (default: 8090)
//! - `DRIVEGUARD_LOG_LEVEL` / `DRIVEGUARD_LOG_FORMAT`: Logging overrides
//! - `RUST_LOG`: Tracing filter (default: driveguard=info,tower_http=debug)

use driveguard::api::{serve, AppState};
use driveguard::artifacts::ArtifactStore;
use driveguard::config::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "driveguard=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DriveGuard dashboard v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load_default();
    let paths = config.artifacts.paths();

    tracing::info!("Artifact directory: {}", config.artifacts.dir);

    // Load the four startup artifacts; any failure here is fatal
    let artifacts = Arc::new(ArtifactStore::load(&paths)?);

    tracing::info!(
        "Loaded {} precomputed driver rows, {} feature columns",
        artifacts.features().len(),
        artifacts.model().feature_count()
    );

    // Run server
    let state = AppState::new(artifacts, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("DriveGuard dashboard stopped");
    Ok(())
}
