//! Submit flow state machine.
//!
//! Sequences validate → transform → call → render, and owns the reset
//! semantics. Validation runs synchronously inside `submit`, so the
//! transient `Validating` step never outlives the call; the states a
//! caller can observe are the ones below.
//!
//! At most one request is in flight per controller: a submit while
//! `Submitting` is dropped, not queued. A reset during `Submitting`
//! bumps the submission sequence token, so the stale completion is
//! discarded when it finally arrives.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::client::RecommendationClient;
use crate::context::SessionContext;
use crate::error::RecommendationError;
use crate::form::{validate, FormModel, MultiField, ScalarField, Violation};
use crate::payload::transform;
use crate::render::{render, Block};

/// Displayable result of a completed submission.
#[derive(Debug, Clone)]
pub struct Display {
    /// Raw recommendation text.
    pub text: String,
    /// Rendered block structure.
    pub blocks: Vec<Block>,
    /// Absorbed failure classification, when the text is the fallback.
    pub degraded: Option<RecommendationError>,
}

/// Observable flow states.
#[derive(Debug, Clone)]
pub enum FlowState {
    /// Collecting answers.
    Editing,
    /// A request is in flight.
    Submitting,
    /// Validation rejected the model; the ordered violation list is
    /// surfaced verbatim.
    ValidationFailed(Vec<Violation>),
    /// A recommendation is on screen.
    Displaying(Display),
}

impl FlowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Drives one questionnaire through validation, submission, and display.
pub struct FlowController {
    ctx: SessionContext,
    client: RecommendationClient,
    model: RwLock<FormModel>,
    state: RwLock<FlowState>,
    /// Submission sequence token; bumped per submit and per reset so
    /// stale completions can be recognized and dropped.
    seq: AtomicU64,
}

impl FlowController {
    pub fn new(ctx: SessionContext, client: RecommendationClient) -> Self {
        Self {
            ctx,
            client,
            model: RwLock::new(FormModel::default()),
            state: RwLock::new(FlowState::Editing),
            seq: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> FlowState {
        self.state.read().await.clone()
    }

    /// Snapshot of the current answers.
    pub async fn model(&self) -> FormModel {
        self.model.read().await.clone()
    }

    /// Update a scalar answer. Clears a validation-failure display, per
    /// the edit-to-resume rule.
    pub async fn edit(&self, field: ScalarField, value: impl Into<String>) {
        self.model.write().await.set(field, value);
        self.clear_validation_failure().await;
    }

    /// Toggle a multi-select answer. Clears a validation-failure display.
    pub async fn toggle(&self, field: MultiField, value: &str, included: bool) {
        self.model.write().await.toggle(field, value, included);
        self.clear_validation_failure().await;
    }

    /// Explicitly leave `ValidationFailed` without editing anything.
    pub async fn retry(&self) {
        self.clear_validation_failure().await;
    }

    async fn clear_validation_failure(&self) {
        let mut state = self.state.write().await;
        if matches!(*state, FlowState::ValidationFailed(_)) {
            *state = FlowState::Editing;
        }
    }

    /// Submit the current answers.
    ///
    /// Runs the validator; on violations, parks in `ValidationFailed`
    /// without touching the network. On a clean model, transforms,
    /// calls the client (which never surfaces a raw failure), renders,
    /// and lands in `Displaying`. Returns the resulting state snapshot.
    pub async fn submit(&self) -> FlowState {
        let (model, token) = {
            let mut state = self.state.write().await;
            if state.is_submitting() {
                tracing::debug!(
                    session = %self.ctx.session_id,
                    "submit ignored: a request is already in flight"
                );
                return state.clone();
            }

            let model = self.model.read().await.clone();
            let violations = validate(&model);
            if !violations.is_empty() {
                tracing::info!(
                    session = %self.ctx.session_id,
                    user = %self.ctx.user_id,
                    count = violations.len(),
                    "submission rejected by validation"
                );
                *state = FlowState::ValidationFailed(violations);
                return state.clone();
            }

            *state = FlowState::Submitting;
            (model, self.seq.fetch_add(1, Ordering::SeqCst) + 1)
        };

        let payload = transform(&model);
        let recommendation = self.client.request(&payload).await;

        let mut state = self.state.write().await;
        if self.seq.load(Ordering::SeqCst) != token {
            tracing::debug!(
                session = %self.ctx.session_id,
                "stale completion discarded after reset"
            );
            return state.clone();
        }

        let blocks = render(&recommendation.text);
        tracing::info!(
            session = %self.ctx.session_id,
            user = %self.ctx.user_id,
            degraded = recommendation.degraded.is_some(),
            blocks = blocks.len(),
            "recommendation ready"
        );
        *state = FlowState::Displaying(Display {
            text: recommendation.text,
            blocks,
            degraded: recommendation.degraded,
        });
        state.clone()
    }

    /// Discard answers and any displayed result, and invalidate an
    /// in-flight submission.
    pub async fn reset(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        self.model.write().await.reset();
        *state = FlowState::Editing;
        tracing::debug!(session = %self.ctx.session_id, "flow reset");
    }
}
