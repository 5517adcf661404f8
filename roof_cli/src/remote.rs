//! Client for a remote SmartRoof calculation server.
//!
//! The server exposes the same estimate and chat operations the local
//! engine provides; this client is used when `SMARTROOF_SERVER` points at
//! one, so storefront deployments can centralize pricing.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CLIENT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("server returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("malformed server response: {0}")]
    Malformed(String),
}

/// Request body for the server's `/calculate_roof` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateRequest {
    pub length: f64,
    pub width: f64,
    pub roof_type: String,
    pub material_type: String,
}

/// Estimate fields as the server reports them.
///
/// The server prices units itself, so unlike the local engine there is no
/// cost block in its calculation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerCalculation {
    pub area: f64,
    pub adjusted_area: f64,
    pub final_area: f64,
    pub units_needed: u32,
    pub material_type: String,
    pub coverage_per_unit: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendedProduct {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalculateResponse {
    pub calculation: ServerCalculation,
    #[serde(default)]
    pub recommended_products: Vec<RecommendedProduct>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Blocking client for a SmartRoof server.
pub struct RemoteCalculator {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteCalculator {
    /// Create a client for a server at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("SmartRoof/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_SECS))
            .build()
            .map_err(|e| RemoteError::Client(e.to_string()))?;

        Ok(RemoteCalculator {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Run a roof estimate on the server.
    pub fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse, RemoteError> {
        let url = format!("{}/calculate_roof", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| RemoteError::Request {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .map_err(|e| RemoteError::Malformed(e.to_string()))
    }

    /// Send one chat message and return the server's reply text.
    pub fn chat(&self, message: &str) -> Result<String, RemoteError> {
        let url = format!("{}/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .map_err(|e| RemoteError::Request {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body: ChatResponse = response
            .json()
            .map_err(|e| RemoteError::Malformed(e.to_string()))?;
        Ok(body.response)
    }
}
