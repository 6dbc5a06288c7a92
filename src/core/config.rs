// src/core/config.rs
//! Client configuration for the analysis service

use std::env;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the environment, falling back to the
    /// analysis service's default local address.
    pub fn from_env() -> Self {
        let base_url =
            env::var("RESUME_MATCHER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        info!("Analysis service URL: {}", base_url);

        Self::new(base_url)
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}
