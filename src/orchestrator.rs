// Request orchestrator: submission state machine and outcome normalization

use thiserror::Error;

use crate::config::PlannerConfig;
use crate::model::{DayPlan, PlanRequest, PlanResponseBody, PlanResult};
use crate::source::{PlanSource, ResponseMode};

// Shown when the live path fails; the underlying detail is appended after it.
pub const LIVE_ERROR_PREFIX: &str =
    "An error occurred while generating the plan. Please try again.";
pub const SERVER_FAILURE_MESSAGE: &str = "Failed to get response from the server.";
pub const NO_TEXT_PLACEHOLDER: &str = "No text response.";

// Every failure terminates at the orchestrator boundary as one of these.
// Display stays bare: the live-path wrap is applied per mode at settlement,
// mirroring the error-channel split (mock failures surface literally, live
// failures get the generic user-facing prefix).
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Please provide both number of days and a destination.")]
    Validation,

    #[error("{0}")]
    Simulated(String),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

// One submission session. Input fields and mode are owned by the shell;
// the derived presentation values are read-only outside this module.
pub struct PlanSession {
    pub days: String,
    pub destination: String,
    pub mode: ResponseMode,
    config: PlannerConfig,
    in_flight: bool,
    raw_text: String,
    error: String,
    itinerary: Option<Vec<DayPlan>>,
}

impl PlanSession {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            days: String::new(),
            destination: String::new(),
            mode: ResponseMode::default(),
            config,
            in_flight: false,
            raw_text: String::new(),
            error: String::new(),
            itinerary: None,
        }
    }

    // Presentation values exposed to the shell (spec: raw text is always
    // display-ready, error is empty when none).
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn itinerary(&self) -> Option<&[DayPlan]> {
        self.itinerary.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    fn request(&self) -> PlanRequest {
        PlanRequest::new(self.days.clone(), self.destination.clone())
    }

    // Submit against the source selected by the configured mode.
    pub async fn submit(&mut self) -> PlanResult {
        if self.request().is_blank() {
            return self.fail_validation();
        }
        let source = self.mode.source(&self.config);
        self.submit_with(source.as_ref()).await
    }

    // Lower-level entry point with an injected source; tests substitute the
    // live path through this.
    pub async fn submit_with(&mut self, source: &dyn PlanSource) -> PlanResult {
        let request = self.request();
        if request.is_blank() {
            return self.fail_validation();
        }
        if self.in_flight {
            tracing::warn!("submission refused: another one is in flight");
            return self.snapshot(false);
        }

        // Settled -> Idle -> InFlight: prior presentation values are cleared
        // before dispatch, then the gate closes.
        self.raw_text.clear();
        self.error.clear();
        self.itinerary = None;
        self.in_flight = true;
        tracing::debug!(
            days = %request.days,
            destination = %request.destination,
            mode = ?self.mode,
            "dispatching plan request"
        );

        let outcome = self.dispatch(source, &request).await;
        // The gate reopens on every exit path, including errors.
        self.in_flight = false;

        match outcome {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%err, "plan request failed");
                self.error = if self.mode.is_live() {
                    format!("{LIVE_ERROR_PREFIX} {err}")
                } else {
                    err.to_string()
                };
                self.snapshot(false)
            }
        }
    }

    async fn dispatch(
        &mut self,
        source: &dyn PlanSource,
        request: &PlanRequest,
    ) -> Result<PlanResult, PlanError> {
        let response = source.fetch(request).await?;
        if !response.ok {
            return Err(PlanError::Transport(SERVER_FAILURE_MESSAGE.to_string()));
        }

        let body: PlanResponseBody = serde_json::from_value(response.body)?;

        // First presentation value: the literal text, the serialized plan, or
        // a fixed placeholder, in that order.
        self.raw_text = match (&body.raw_text, &body.plan) {
            (Some(text), _) if !text.is_empty() => text.clone(),
            (_, Some(plan)) => serde_json::to_string_pretty(plan)?,
            _ => NO_TEXT_PLACEHOLDER.to_string(),
        };

        // Second presentation value: the structured itinerary. A success
        // without one may still carry a server warning, which accumulates
        // instead of replacing whatever error text is already present.
        match body.plan.and_then(|plan| plan.itinerary) {
            Some(itinerary) => self.itinerary = Some(itinerary),
            None => {
                self.itinerary = None;
                if let Some(warning) = body.error {
                    self.append_warning(&warning);
                }
            }
        }

        Ok(self.snapshot(true))
    }

    // Validation never enters the in-flight state and leaves prior results
    // untouched; only the error text is replaced.
    fn fail_validation(&mut self) -> PlanResult {
        let err = PlanError::Validation;
        tracing::warn!(%err, "submission rejected before dispatch");
        self.error = err.to_string();
        self.snapshot(false)
    }

    fn append_warning(&mut self, warning: &str) {
        if !self.error.is_empty() {
            self.error.push(' ');
        }
        self.error.push_str(warning);
    }

    fn snapshot(&self, success: bool) -> PlanResult {
        PlanResult {
            success,
            raw_text: self.raw_text.clone(),
            itinerary: self.itinerary.clone(),
            error: (!self.error.is_empty()).then(|| self.error.clone()),
        }
    }
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
