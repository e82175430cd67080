//! # Configuration Module
//!
//! ## Purpose
//! Constructor-time configuration for the Wikidata client. There is no file
//! or environment loading: every setting is fixed when the client is built
//! and immutable afterwards.
//!
//! ## Settings
//! - API endpoint URL
//! - User-Agent header identifying the client to the API
//! - Minimum interval enforced between outbound requests
//! - Per-request timeout ceiling
//!
//! ## Usage
//! ```rust
//! use wikidata_search::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_user_agent("my-tool/2.0 (https://example.org/my-tool)")
//!     .with_min_request_interval_ms(1000);
//! ```

use crate::errors::{Result, WikidataError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Wikidata API endpoint
pub const DEFAULT_API_URL: &str = "https://www.wikidata.org/w/api.php";

/// Default User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "wikidata-search/0.1";

/// Client configuration, fixed at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL
    pub api_url: String,
    /// User-Agent header value identifying this client
    pub user_agent: String,
    /// Minimum delay between two outbound requests in milliseconds
    pub min_request_interval_ms: u64,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_request_interval_ms: 500,
            timeout_seconds: 30,
        }
    }
}

impl ClientConfig {
    /// Override the API endpoint (used by tests to point at a mock server)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the minimum inter-request interval
    pub fn with_min_request_interval_ms(mut self, interval_ms: u64) -> Self {
        self.min_request_interval_ms = interval_ms;
        self
    }

    /// Override the request timeout
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Minimum inter-request interval as a `Duration`
    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(WikidataError::Config {
                message: "api_url cannot be empty".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(WikidataError::Config {
                message: "user_agent cannot be empty".to_string(),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(WikidataError::Config {
                message: "timeout_seconds must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
