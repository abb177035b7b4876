//! HTTP client for the regulatory analysis service.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};
use tradereg_core::{AnalysisInput, AnalysisResult};

/// Public deployment of the analysis service.
pub const DEFAULT_BASE_URL: &str = "https://bfinax-be.onrender.com/api";

/// Reported when the service fails without saying why.
pub const FALLBACK_ERROR: &str = "Failed to analyze regulation";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Json(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the `/regulations/analyze` endpoint.
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Create a client for the given API base URL.
    ///
    /// `base_url` should be like `https://host/api`; a trailing slash is dropped.
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit an analysis request and return the service's result.
    ///
    /// A non-2xx answer becomes [`ApiError::Server`] carrying the body's
    /// `error` field, or [`FALLBACK_ERROR`] when the body has none.
    pub async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, ApiError> {
        let url = format!("{}/regulations/analyze", self.base_url);

        info!(url = %url, country = %input.country, "requesting regulatory analysis");
        let resp = self.client.post(&url).json(input).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = error_message(&body);
            warn!(status = status.as_u16(), error = %message, "analysis rejected");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        let result: AnalysisResult = serde_json::from_str(&body)?;
        info!(id = %result.id, citations = result.citations.len(), "analysis received");
        Ok(result)
    }
}

/// Pull the `error` field out of a failure body, falling back to a fixed message.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}
