//! Structured wire contract — JSON object keyed by field name.
//!
//! Success body: `{"success": bool, "recommendation" | "message": "..."}`.
//! Text extraction prefers `recommendation`, then `message`. A non-2xx
//! body is mined for a JSON `error` field before falling back to the raw
//! text.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::RecommendationError;
use crate::payload::OrientationPayload;

use super::RecommendationBackend;

#[derive(Debug, Deserialize)]
struct StructuredResponse {
    success: bool,
    #[serde(default)]
    recommendation: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Backend speaking the structured (primary) contract.
pub struct StructuredBackend {
    endpoint: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

impl StructuredBackend {
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
impl RecommendationBackend for StructuredBackend {
    fn name(&self) -> &'static str {
        "structured"
    }

    async fn request(
        &self,
        payload: &OrientationPayload,
    ) -> Result<String, RecommendationError> {
        let mut request = self.client.post(&self.endpoint).json(payload);
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
            return Err(RecommendationError::Service {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecommendationError::Transport {
                reason: e.to_string(),
            })?;

        let parsed: StructuredResponse =
            serde_json::from_str(&body).map_err(|e| RecommendationError::Format {
                reason: format!("invalid JSON in success response: {e}"),
            })?;

        if !parsed.success {
            return Err(RecommendationError::Service {
                status: status.as_u16(),
                message: parsed.error.unwrap_or_else(|| "Erreur inconnue".to_string()),
            });
        }

        parsed
            .recommendation
            .or(parsed.message)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| RecommendationError::Format {
                reason: "success response carried no recommendation text".to_string(),
            })
    }
}

/// Pull a structured message out of an error body: JSON `error` field
/// first, then the raw text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_error_prefers_json_error_field() {
        let body = r#"{"error": "quota exceeded", "detail": "..."}"#;
        assert_eq!(extract_error_message(body), "quota exceeded");
    }

    #[test]
    fn extract_error_falls_back_to_raw_text() {
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
        // JSON without an error field also falls through to raw text
        let body = r#"{"status": "down"}"#;
        assert_eq!(extract_error_message(body), body);
    }

    #[test]
    fn response_extraction_priority() {
        let both: StructuredResponse = serde_json::from_str(
            r#"{"success": true, "recommendation": "la reco", "message": "le message"}"#,
        )
        .unwrap();
        assert_eq!(both.recommendation.as_deref(), Some("la reco"));

        let message_only: StructuredResponse =
            serde_json::from_str(r#"{"success": true, "message": "le message"}"#).unwrap();
        assert_eq!(
            message_only.recommendation.or(message_only.message).as_deref(),
            Some("le message")
        );
    }
}
