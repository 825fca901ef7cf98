//! API request handlers for the design store

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use axiom_common::{ComponentPlacement, Design};

use crate::storage::DesignStore;

/// Shared application state
pub struct AppState {
    pub store: Mutex<Box<dyn DesignStore>>,
}

impl AppState {
    /// Wrap a storage backend for sharing across handlers
    pub fn new(store: impl DesignStore + 'static) -> Self {
        Self {
            store: Mutex::new(Box::new(store)),
        }
    }
}

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

/// Request to store a design
///
/// Both fields are optional; missing values are defaulted, never rejected.
/// Unknown extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateDesignRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub components: Option<Vec<ComponentPlacement>>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// List all stored designs
pub async fn list_designs_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Design>>, ApiError> {
    let mut store = state.store.lock().await;
    let designs = store.list().await?;

    Ok(Json(designs))
}

/// Store a new design
pub async fn create_design_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateDesignRequest>,
) -> Result<(StatusCode, Json<Design>), ApiError> {
    let mut store = state.store.lock().await;

    // Default name counts from the store size at submission time
    let name = match payload.name {
        Some(name) => name,
        None => format!("Design {}", store.count().await? + 1),
    };
    let components = payload.components.unwrap_or_default();

    info!("Storing design: {}", name);

    let design = store.create(Design::new(name, components)).await?;

    Ok((StatusCode::CREATED, Json(design)))
}

/// Fetch a single design by id
pub async fn get_design_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Design>, ApiError> {
    info!("Getting design: {}", id);

    let mut store = state.store.lock().await;
    let design = store.get_by_id(&id).await?;

    match design {
        Some(d) => Ok(Json(d)),
        None => Err(ApiError {
            status: StatusCode::NOT_FOUND,
            message: "Design not found".to_string(),
        }),
    }
}
