//! Session context — explicit per-flow identity, no ambient globals.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Context handed to a flow controller at construction.
///
/// Used for log correlation only; the core logic never reads state
/// outside of it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    /// Unique ID for this flow instance.
    pub session_id: Uuid,
    /// User the questionnaire belongs to.
    pub user_id: String,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id: "default".to_string(),
            created_at: Utc::now(),
        }
    }
}

impl SessionContext {
    /// Create a context for a known user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}
