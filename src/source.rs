// Response sources: the live planning endpoint and the three simulated modes

use async_trait::async_trait;

use crate::config::PlannerConfig;
use crate::model::{PlanRequest, SourceResponse};
use crate::orchestrator::PlanError;

// Static successful response used by MockOk; supplied as a document, not
// generated logic.
pub const FIXTURE_200: &str = include_str!("../fixtures/mock_200.json");

pub const CLIENT_ERROR_MESSAGE: &str = "Days and country are required.";
pub const SERVER_ERROR_MESSAGE: &str = "Failed to generate travel plan";

// Which source a submission consults. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    Live,
    #[default]
    MockOk,
    MockClientError,
    MockServerError,
}

impl ResponseMode {
    pub fn is_live(&self) -> bool {
        matches!(self, ResponseMode::Live)
    }

    pub fn source(&self, config: &PlannerConfig) -> Box<dyn PlanSource> {
        match self {
            ResponseMode::Live => Box::new(LiveSource::new(config)),
            ResponseMode::MockOk => Box::new(FixtureSource),
            ResponseMode::MockClientError => {
                Box::new(FixedErrorSource::new(CLIENT_ERROR_MESSAGE))
            }
            ResponseMode::MockServerError => {
                Box::new(FixedErrorSource::new(SERVER_ERROR_MESSAGE))
            }
        }
    }
}

// One source per submission; the orchestrator normalizes whatever comes back
// the same way regardless of which implementation produced it.
#[async_trait]
pub trait PlanSource: Send + Sync {
    async fn fetch(&self, request: &PlanRequest) -> Result<SourceResponse, PlanError>;
}

// Real network call to the configured planning endpoint.
pub struct LiveSource {
    client: reqwest::Client,
    endpoint: String,
    timeout: std::time::Duration,
}

impl LiveSource {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
        }
    }
}

#[async_trait]
impl PlanSource for LiveSource {
    async fn fetch(&self, request: &PlanRequest) -> Result<SourceResponse, PlanError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|err| PlanError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            // Body is irrelevant on a non-success status; normalization turns
            // this into the uniform server-failure message.
            return Ok(SourceResponse {
                ok: false,
                body: serde_json::Value::Null,
            });
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| PlanError::Transport(err.to_string()))?;
        Ok(SourceResponse::ok(body))
    }
}

// Synchronous success carrying the embedded fixture document.
pub struct FixtureSource;

#[async_trait]
impl PlanSource for FixtureSource {
    async fn fetch(&self, _request: &PlanRequest) -> Result<SourceResponse, PlanError> {
        let body = serde_json::from_str(FIXTURE_200)?;
        Ok(SourceResponse::ok(body))
    }
}

// Immediate failure with a fixed literal message, for exercising the error
// channels without a backend.
pub struct FixedErrorSource {
    message: &'static str,
}

impl FixedErrorSource {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[async_trait]
impl PlanSource for FixedErrorSource {
    async fn fetch(&self, _request: &PlanRequest) -> Result<SourceResponse, PlanError> {
        Err(PlanError::Simulated(self.message.to_string()))
    }
}
