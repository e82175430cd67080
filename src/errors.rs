//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the Wikidata client, providing structured
//! error types for every failure mode of the request path.
//!
//! ## Error Categories
//! - Transport: connection/DNS/TLS failures while talking to the API
//! - Timeout: requests exceeding the configured per-request ceiling
//! - Protocol: non-success HTTP statuses and API-level error objects
//! - Parsing: response bodies that are not the expected JSON shape
//! - Configuration: invalid client construction parameters
//!
//! Logical absence (missing entity, missing label, empty search) is never an
//! error; those surface as `None` or empty collections from the client.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, WikidataError>;

/// Error types for Wikidata API operations
#[derive(Debug, Error)]
pub enum WikidataError {
    /// Network/transport failure reaching the API
    #[error("Network error: {details}")]
    Network { details: String },

    /// Request exceeded the configured timeout
    #[error("Request timed out: {details}")]
    Timeout { details: String },

    /// Non-success HTTP status from the API
    #[error("HTTP {status} from Wikidata API: {body}")]
    HttpStatus { status: u16, body: String },

    /// API-level error object in an otherwise successful response
    #[error("Wikidata API error '{code}': {info}")]
    Api { code: String, info: String },

    /// Response body could not be parsed as the expected JSON shape
    #[error("Failed to parse API response: {details}")]
    ResponseParsing { details: String },

    /// Client configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl WikidataError {
    /// Check if the error is recoverable (a later retry by the caller may succeed)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WikidataError::Network { .. } | WikidataError::Timeout { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            WikidataError::Network { .. } => "network",
            WikidataError::Timeout { .. } => "timeout",
            WikidataError::HttpStatus { .. } | WikidataError::Api { .. } => "protocol",
            WikidataError::ResponseParsing { .. } => "parsing",
            WikidataError::Config { .. } => "configuration",
        }
    }
}

// Conversion from transport errors, classifying timeouts and decode
// failures into their own variants
impl From<reqwest::Error> for WikidataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WikidataError::Timeout {
                details: err.to_string(),
            }
        } else if err.is_decode() {
            WikidataError::ResponseParsing {
                details: err.to_string(),
            }
        } else {
            WikidataError::Network {
                details: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for WikidataError {
    fn from(err: serde_json::Error) -> Self {
        WikidataError::ResponseParsing {
            details: err.to_string(),
        }
    }
}
