//! Error types for Orienta.

/// Top-level error type for the orientation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Recommendation error: {0}")]
    Recommendation(#[from] RecommendationError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Failure classification for a recommendation request.
///
/// Every variant is absorbed by the client's fallback policy before it
/// reaches the user; the classification survives for diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendationError {
    /// The call itself failed — no response was received.
    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    /// A response arrived but the service reported failure.
    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// A success response arrived but could not be parsed.
    #[error("Unparseable response: {reason}")]
    Format { reason: String },
}

impl RecommendationError {
    /// Short classification label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Service { .. } => "service",
            Self::Format { .. } => "format",
        }
    }
}

/// Result type alias for the pipeline.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_error_kinds() {
        let transport = RecommendationError::Transport {
            reason: "connection refused".into(),
        };
        let service = RecommendationError::Service {
            status: 502,
            message: "bad gateway".into(),
        };
        let format = RecommendationError::Format {
            reason: "not JSON".into(),
        };
        assert_eq!(transport.kind(), "transport");
        assert_eq!(service.kind(), "service");
        assert_eq!(format.kind(), "format");
    }

    #[test]
    fn error_display_includes_detail() {
        let err = RecommendationError::Service {
            status: 500,
            message: "boom".into(),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("boom"));
    }
}
