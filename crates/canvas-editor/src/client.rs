//! HTTP client for the design store API

use axiom_common::{ComponentPlacement, Design};
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Errors surfaced by [`StoreClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("design store unavailable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("design not found: {0}")]
    NotFound(String),

    #[error("unexpected response {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct SaveDesignRequest<'a> {
    name: &'a str,
    components: &'a [ComponentPlacement],
}

/// Client for the design store REST API
pub struct StoreClient {
    base_url: String,
    http: reqwest::Client,
}

impl StoreClient {
    /// Create a client for a store at `base_url` (e.g. `http://localhost:3001`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Save the current canvas contents as a named design
    pub async fn save_design(
        &self,
        name: &str,
        components: &[ComponentPlacement],
    ) -> Result<Design, ClientError> {
        info!("Saving design: {}", name);

        let response = self
            .http
            .post(format!("{}/api/designs", self.base_url))
            .json(&SaveDesignRequest { name, components })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// All designs stored so far, in creation order
    pub async fn list_designs(&self) -> Result<Vec<Design>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/designs", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch a single design by id
    pub async fn get_design(&self, id: &str) -> Result<Design, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/designs/{}", self.base_url, id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Check the store is reachable and healthy
    pub async fn health(&self) -> Result<(), ClientError> {
        let response = self
            .http
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    ClientError::Api { status, message }
}
