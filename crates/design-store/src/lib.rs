//! Axiom Design Store Service
//!
//! REST API that stores canvas designs submitted by the editor. Storage is
//! in process memory behind the [`storage::DesignStore`] trait; everything
//! vanishes on restart.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Health check with timestamp
//! - `GET /api/designs` - List all stored designs in creation order
//! - `POST /api/designs` - Store a design (`{name?, components?}`)
//! - `GET /api/designs/:id` - Fetch a single design by id
//! - `GET /*` - Static frontend shell from the public directory

pub mod config;
pub mod handlers;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use handlers::AppState;
pub use storage::{DesignStore, InMemoryStore};

/// Create the application router
///
/// `public_dir` holds the static frontend; any path the API does not claim
/// falls through to it, with `index.html` as the final fallback.
pub fn create_router(state: AppState, public_dir: &Path) -> Router {
    let shared_state = Arc::new(state);

    let frontend =
        ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(handlers::health_handler))
        .route("/api/designs", get(handlers::list_designs_handler))
        .route("/api/designs", post(handlers::create_design_handler))
        .route("/api/designs/{id}", get(handlers::get_design_handler))
        .fallback_service(frontend)
        .with_state(shared_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
