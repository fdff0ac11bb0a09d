//! OpenSky Network REST client.
//!
//! DESIGN
//! ======
//! The sync service depends on [`StatesSource`], not on reqwest directly, so
//! tests can substitute canned bodies. The client returns the raw JSON body;
//! decoding into records lives in the shared `flights` crate.

use std::time::Duration;

use serde_json::Value;

use crate::config::SyncConfig;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request failed before a response arrived.
    #[error("OpenSky request failed: {0}")]
    Request(String),

    /// OpenSky answered with a non-success status.
    #[error("OpenSky response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("OpenSky response parse failed: {0}")]
    Body(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl FetchError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_OPENSKY_REQUEST",
            Self::Status { .. } => "E_OPENSKY_STATUS",
            Self::Body(_) => "E_OPENSKY_BODY",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether the next scheduled sync may reasonably succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Anything that can produce a `states/all` response body.
#[async_trait::async_trait]
pub trait StatesSource: Send + Sync {
    /// Fetch the current state vectors as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the upstream is unreachable, answers
    /// with an error status, or sends a body that is not JSON.
    async fn fetch_states(&self) -> Result<Value, FetchError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct OpenSkyClient {
    http: reqwest::Client,
    api_url: String,
}

impl OpenSkyClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::HttpClientBuild`] if reqwest cannot build the client.
    pub fn new(config: &SyncConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .user_agent(concat!("skydeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_url: config.api_url.clone() })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait::async_trait]
impl StatesSource for OpenSkyClient {
    async fn fetch_states(&self) -> Result<Value, FetchError> {
        let resp = self
            .http
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status { status: status.as_u16(), body: truncate_body(&body) });
        }

        resp.json::<Value>().await.map_err(|e| FetchError::Body(e.to_string()))
    }

    fn describe(&self) -> String {
        self.api_url.clone()
    }
}

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Keep error bodies short enough for a single log line.
fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_owned();
    }
    let mut out: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    out.push('…');
    out
}

#[cfg(test)]
#[path = "opensky_test.rs"]
mod tests;
