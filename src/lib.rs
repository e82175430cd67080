//! # Wikidata Search Client
//!
//! ## Overview
//! This library is a blocking client for the Wikidata web API: entity
//! search, entity and claim retrieval, label lookup and extraction of
//! external identifiers (VIAF, GND, ORCID and other cataloguing systems)
//! from an entity's claims.
//!
//! ## Architecture
//! The system is composed of a handful of small modules:
//! - `client`: the rate-limited request path and the API operations
//! - `config`: constructor-time client configuration
//! - `models`: typed response envelopes and records
//! - `identifiers`: the claims-to-identifier-mapping transform
//! - `rate_limit`: minimum-interval rate limiter
//! - `errors`: centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: search queries, entity/property identifiers, language codes
//! - **Output**: typed search records, entity records, claim and identifier
//!   mappings
//! - **Concurrency**: synchronous and blocking; each call may sleep up to
//!   one rate-limit interval and waits out the request round-trip
//!
//! ## Usage
//! ```rust,no_run
//! use wikidata_search::{ClientConfig, SearchOptions, WikidataClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WikidataClient::new(ClientConfig::default())?;
//!     let results = client.search("Albert Einstein", &SearchOptions::default())?;
//!     if let Some(hit) = results.first() {
//!         let ids = client.get_identifiers(&hit.id, true)?;
//!         for (key, value) in &ids {
//!             println!("{}: {:?}", key, value);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod identifiers;
pub mod models;
pub mod rate_limit;

// Re-exports for convenience
pub use client::{EntityType, SearchOptions, WikidataClient, MAX_ENTITIES_PER_REQUEST, MAX_SEARCH_LIMIT};
pub use config::ClientConfig;
pub use errors::{Result, WikidataError};
pub use identifiers::{extract_identifiers, identifier_property_label, IdentifierValue};
pub use models::{Claim, DataValue, Entity, LocalizedValue, SearchEntity, Sitelink, Snak};
