//! Simple Drive API Server
//!
//! Main entry point for the blob storage service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drive_api::{AppState, StorageBackend, create_router};
use drive_core::blob::BlobService;
use drive_core::storage::StorageProvider;
use drive_db::{MetadataStore, connect, migrate};
use drive_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "simple_drive=debug,drive_api=debug,drive_core=info,drive_db=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate()?;

    // Connect to database and bring the schema up to date
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");
    migrate(&db).await.context("Failed to run migrations")?;

    // Build the storage backend selected in configuration
    let provider = StorageProvider::from_settings(&config.storage)?;
    info!(provider = ?provider, "Storage provider configured");
    let backend = StorageBackend::from_provider(&provider, &db)
        .await
        .context("Failed to initialize storage backend")?;

    // Create application state
    let storage_type = backend.name();
    let blobs = BlobService::new(
        Arc::new(backend),
        Arc::new(MetadataStore::new(db)),
        storage_type,
    );
    let state = AppState::new(
        blobs,
        config.auth.bearer_token.as_str(),
        config.server.max_body_bytes,
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(storage = storage_type, "Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
