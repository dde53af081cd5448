//! Legacy positional wire contract.
//!
//! Request body: `{"data": [ ...fields in declaration order... ]}`.
//! Success body: `{"data": ["<recommendation text>"]}` — the text is the
//! first element. Error body: `{"error": "..."}` with a non-2xx status.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::config::ClientConfig;
use crate::error::RecommendationError;
use crate::payload::OrientationPayload;

use super::RecommendationBackend;

#[derive(Debug, Deserialize)]
struct PositionalResponse {
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

/// Backend speaking the legacy positional-array contract.
pub struct PositionalBackend {
    endpoint: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

impl PositionalBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, RecommendationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RecommendationError::Transport {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

#[async_trait]
impl RecommendationBackend for PositionalBackend {
    fn name(&self) -> &'static str {
        "positional"
    }

    async fn request(
        &self,
        payload: &OrientationPayload,
    ) -> Result<String, RecommendationError> {
        let body = json!({ "data": payload.positional_values() });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| RecommendationError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            return Err(RecommendationError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecommendationError::Transport {
                reason: e.to_string(),
            })?;

        let parsed: PositionalResponse =
            serde_json::from_str(&body).map_err(|e| RecommendationError::Format {
                reason: format!("invalid JSON in success response: {e}"),
            })?;

        parsed
            .data
            .first()
            .and_then(|v| v.as_str())
            .filter(|text| !text.trim().is_empty())
            .map(String::from)
            .ok_or_else(|| RecommendationError::Format {
                reason: "data array carried no recommendation text".to_string(),
            })
    }
}
