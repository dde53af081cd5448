//! Recommendation service integration.
//!
//! Three interchangeable backends sit behind one seam:
//! - **Structured** — JSON object keyed by the external field names
//! - **Positional** — legacy `{"data": [...]}` array contract
//! - **Rules** — offline rule engine, no network
//!
//! `RecommendationClient` wraps whichever backend is configured and
//! applies the absorb-everything policy: a failed request still yields a
//! usable encouragement text, and the failure classification goes to the
//! log instead of the user.

pub mod positional;
pub mod rules;
pub mod structured;

pub use positional::PositionalBackend;
pub use rules::RuleBackend;
pub use structured::StructuredBackend;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{BackendKind, ClientConfig};
use crate::error::RecommendationError;
use crate::payload::OrientationPayload;

/// Static encouragement shown when no real recommendation could be
/// produced. Mirrors the text served by the original service when its
/// generation backend was down.
pub const FALLBACK_RECOMMENDATION: &str = "🎯 **Recommandation YVA**

Merci d'avoir rempli le questionnaire d'orientation !

**📚 Prochaines étapes recommandées :**
- Explorez nos mini-formations sur le dashboard YVA
- Renforcez vos compétences dans vos matières préférées
- Découvrez les opportunités professionnelles au Togo

**💡 Conseil :**
Votre profil montre un potentiel intéressant. Continuez à développer vos compétences avec YVA !

*Note : Service temporairement en mode simplifié. La recommandation complète sera bientôt disponible.*";

/// One way of obtaining a recommendation for a payload.
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    /// Request a recommendation. Errors are classified, never raw.
    async fn request(&self, payload: &OrientationPayload)
        -> Result<String, RecommendationError>;
}

/// Outcome of a submit attempt, per request.
///
/// Always carries displayable text; `degraded` records the absorbed
/// failure when the text is the fallback template.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub text: String,
    pub degraded: Option<RecommendationError>,
}

/// Create a backend from configuration. The contract is always chosen
/// here, never inferred from a response.
pub fn create_backend(
    config: &ClientConfig,
) -> crate::error::Result<Arc<dyn RecommendationBackend>> {
    match config.backend {
        BackendKind::Structured => Ok(Arc::new(StructuredBackend::new(config)?)),
        BackendKind::Positional => Ok(Arc::new(PositionalBackend::new(config)?)),
        BackendKind::Rules => Ok(Arc::new(RuleBackend::new())),
    }
}

/// Fallback-applying wrapper around a backend.
pub struct RecommendationClient {
    backend: Arc<dyn RecommendationBackend>,
}

impl RecommendationClient {
    pub fn new(backend: Arc<dyn RecommendationBackend>) -> Self {
        Self { backend }
    }

    /// Build a client straight from configuration.
    pub fn from_config(config: &ClientConfig) -> crate::error::Result<Self> {
        Ok(Self::new(create_backend(config)?))
    }

    /// Request a recommendation, absorbing any failure into the static
    /// fallback text. A submission can therefore never dead-end: the
    /// result always holds non-empty text.
    pub async fn request(&self, payload: &OrientationPayload) -> Recommendation {
        match self.backend.request(payload).await {
            Ok(text) => {
                tracing::info!(backend = self.backend.name(), "recommendation received");
                Recommendation {
                    text,
                    degraded: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    kind = err.kind(),
                    error = %err,
                    "recommendation request failed; serving fallback text"
                );
                Recommendation {
                    text: FALLBACK_RECOMMENDATION.to_string(),
                    degraded: Some(err),
                }
            }
        }
    }
}
