// Client configuration for the live planning endpoint

use std::time::Duration;

pub const ENDPOINT_ENV_VAR: &str = "TRIP_PLANNER_API_URL";

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3001/api/plan".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl PlannerConfig {
    // Endpoint override comes from the environment; everything else keeps
    // its default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENDPOINT_ENV_VAR) {
            if !url.is_empty() {
                config.endpoint = url;
            }
        }
        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_endpoint_and_timeout() {
        let config = PlannerConfig::default();
        assert!(!config.endpoint.is_empty());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
