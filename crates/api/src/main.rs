use anyhow::Result;
use persistence::repositories::SessionRepository;
use tracing::{info, warn};

use potia_api::{
    app::{create_app, AppState},
    config::Config,
    middleware::{init_metrics, logging::init_logging},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging and metrics
    init_logging(&config.logging)?;
    init_metrics()?;

    info!("Starting Potia API v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database.pool_config()).await?;

    // Run migrations
    info!("Running database migrations...");
    persistence::db::run_migrations(&pool).await?;
    info!("Migrations completed");

    match SessionRepository::new(pool.clone())
        .delete_expired(chrono::Utc::now())
        .await
    {
        Ok(removed) => info!(removed, "Expired sessions purged"),
        Err(e) => warn!(error = %e, "Failed to purge expired sessions"),
    }

    let addr = config.socket_addr()?;

    // Build application
    let state = AppState::from_config(config, pool)?;
    let app = create_app(state);

    // Start server
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
