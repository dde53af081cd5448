//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

/// Which recommendation backend the client talks to.
///
/// The two remote kinds are structurally different wire contracts for the
/// same semantic operation; the choice is always explicit configuration,
/// never inferred from a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// JSON object keyed by the external field names (primary contract).
    Structured,
    /// Legacy `{"data": [...]}` positional-array contract.
    Positional,
    /// Offline rule engine — no network at all.
    Rules,
}

/// Client configuration for the recommendation service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Recommendation endpoint URL.
    pub endpoint: String,
    /// Optional bearer token sent as `Authorization: Bearer <key>`.
    pub api_key: Option<SecretString>,
    /// Which wire contract / backend to use.
    pub backend: BackendKind,
    /// Request timeout. A timed-out call is classified as a transport
    /// failure and follows the fallback policy.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/api/auth/orientation".to_string(),
            api_key: None,
            backend: BackendKind::Structured,
            timeout: Duration::from_secs(30),
        }
    }
}
