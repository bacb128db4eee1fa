//! Status endpoint client
//!
//! One idempotent request: `GET {base}/health`, expecting a JSON body with
//! a `status` field. The word is passed through verbatim. Every failure
//! mode (transport error, non-success response, malformed or absent body)
//! collapses to `Unhealthy`; the poll loop never propagates an error
//! upward.

use std::time::Duration;

use glint_core::{HealthConfig, HealthStatus};
use serde::Deserialize;
use thiserror::Error;

/// Expected response body from the status endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct StatusBody {
    pub(crate) status: String,
}

/// Why a single poll failed
#[derive(Debug, Error)]
pub enum StatusError {
    /// Network error or non-success HTTP status
    #[error("status request failed: {0}")]
    Transport(String),

    /// Response arrived but the body wasn't the expected JSON
    #[error("malformed status body: {0}")]
    Malformed(String),
}

/// Synchronous client for the fixed status endpoint
#[derive(Debug, Clone)]
pub struct StatusClient {
    base_url: String,
    timeout: Duration,
}

impl StatusClient {
    /// Build a client from the resolved config
    pub fn from_config(config: &HealthConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        }
    }

    /// Issue one status request
    pub fn fetch(&self) -> Result<HealthStatus, StatusError> {
        let url = format!("{}/health", self.base_url);
        let resp = ureq::get(&url)
            .timeout(self.timeout)
            .call()
            .map_err(|e| StatusError::Transport(e.to_string()))?;

        let body: StatusBody = resp
            .into_json()
            .map_err(|e| StatusError::Malformed(e.to_string()))?;

        Ok(HealthStatus::from_word(&body.status))
    }

    /// One poll outcome: any failure maps to `Unhealthy`
    pub fn poll(&self) -> HealthStatus {
        match self.fetch() {
            Ok(status) => status,
            Err(err) => {
                tracing::warn!(error = %err, "health poll failed");
                HealthStatus::Unhealthy
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_strips_trailing_slash() {
        let mut config = HealthConfig::default();
        config.base_url = "http://localhost:8000/".to_string();
        let client = StatusClient::from_config(&config);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn status_body_parses_and_passes_through() {
        let body: StatusBody = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert_eq!(HealthStatus::from_word(&body.status), HealthStatus::Healthy);

        // Extra fields are ignored; the word itself is not validated.
        let body: StatusBody =
            serde_json::from_str(r#"{"status":"on-fire","uptime":12}"#).unwrap();
        assert_eq!(
            HealthStatus::from_word(&body.status),
            HealthStatus::Other("on-fire".to_string())
        );
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(serde_json::from_str::<StatusBody>(r#"{"state":"up"}"#).is_err());
    }

    #[test]
    fn unreachable_endpoint_polls_unhealthy() {
        let mut config = HealthConfig::default();
        // Reserved TEST-NET address, nothing listens here.
        config.base_url = "http://192.0.2.1:9".to_string();
        config.request_timeout = Duration::from_millis(200);
        let client = StatusClient::from_config(&config);
        assert_eq!(client.poll(), HealthStatus::Unhealthy);
    }
}
