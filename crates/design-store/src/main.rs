//! Axiom Design Store Service
//!
//! REST API for storing and retrieving canvas designs

use anyhow::{Context, Result};
use design_store::{create_router, AppState, Config, InMemoryStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "design_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Axiom Design Store Service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.check_public_dir();

    // Create application state with the in-memory backend
    let state = AppState::new(InMemoryStore::new());

    // Create router
    let app = create_router(state, &config.public_dir);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(&config.address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.address()))?;

    info!("Axiom server is running on http://{}", config.address());
    info!("API endpoints:");
    info!("  GET /api/health - Health check");
    info!("  GET /api/designs - List designs");
    info!("  POST /api/designs - Store a design");
    info!("  GET /api/designs/{{id}} - Fetch a design");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
