use anyhow::Result;
use tracing::info;

use shiftlog_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging and metrics
    middleware::logging::init_logging(&config.logging);
    middleware::metrics::init_metrics();

    info!("Starting ShiftLog API v{}", env!("CARGO_PKG_VERSION"));

    // Create the in-memory store set
    let stores = persistence::Stores::new();

    // Build application
    let addr = config.socket_addr();
    let app = app::create_app(config, stores);

    // Start server
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
