//! # Wikidata Client Module
//!
//! ## Purpose
//! Blocking HTTP client for the Wikidata API. Every public operation funnels
//! through a shared rate-limited request path that issues one GET against
//! the configured endpoint and parses the JSON body.
//!
//! ## Input/Output Specification
//! - **Input**: free-text queries, entity/property identifiers, language
//!   codes and property-group filters
//! - **Output**: typed search records, entity records, claim mappings and
//!   identifier mappings
//! - **Rate Limits**: a configured minimum interval is enforced between any
//!   two outbound requests
//!
//! ## Key Features
//! - Minimum-interval rate limiting with a per-instance timestamp
//! - Fixed per-request timeout and custom User-Agent
//! - Missing entities filtered out of batch retrieval
//! - External-identifier extraction with optional label-decorated keys
//!
//! No retry, no backoff, no caching: a failed request is a visible error.

use crate::config::ClientConfig;
use crate::errors::{Result, WikidataError};
use crate::identifiers::{extract_identifiers, IdentifierValue};
use crate::models::{Claim, ClaimsResponse, EntitiesResponse, Entity, SearchEntity, SearchResponse};
use crate::rate_limit::RateLimiter;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Hard cap on search results per request; larger caller limits are clamped
pub const MAX_SEARCH_LIMIT: usize = 50;

/// Hard cap on entity ids per retrieval request; excess ids are dropped
pub const MAX_ENTITIES_PER_REQUEST: usize = 50;

/// Entity kind filter for search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityType {
    /// Q-entities
    #[default]
    Item,
    /// P-entities
    Property,
}

impl EntityType {
    /// Wire value for the `type` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Item => "item",
            EntityType::Property => "property",
        }
    }
}

/// Options for [`WikidataClient::search`]
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Language for matching and for returned labels/descriptions
    pub language: String,
    /// Entity kind to search
    pub entity_type: EntityType,
    /// Maximum results; clamped to [`MAX_SEARCH_LIMIT`] before sending
    pub limit: usize,
    /// Pagination offset; forwarded as a continuation token when positive,
    /// omitted when zero
    pub continue_offset: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            entity_type: EntityType::Item,
            limit: 10,
            continue_offset: 0,
        }
    }
}

impl SearchOptions {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = entity_type;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_continue_offset(mut self, offset: usize) -> Self {
        self.continue_offset = offset;
        self
    }
}

/// Client for Wikidata API operations
///
/// The rate-limit timestamp lives behind a `Mutex`, so the minimum-interval
/// invariant also holds when a client is shared across threads; calls then
/// serialize on that lock while one of them sleeps.
pub struct WikidataClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
    rate_limiter: Mutex<RateLimiter>,
}

impl WikidataClient {
    /// Create a client from validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WikidataError::Config {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        let rate_limiter = Mutex::new(RateLimiter::new(config.min_request_interval()));

        Ok(Self {
            config,
            http,
            rate_limiter,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Rate-limited request path shared by every operation
    ///
    /// Blocks until the minimum interval has elapsed, issues one GET with
    /// the given parameters plus a forced `format=json`, and returns the
    /// parsed body. API-level error objects become [`WikidataError::Api`].
    fn request(&self, params: &[(&str, String)]) -> Result<Value> {
        {
            let mut limiter = self
                .rate_limiter
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            limiter.wait();
        }

        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        // Appended last so it overrides any caller-supplied response format
        query.push(("format", "json"));

        debug!(url = %self.config.api_url, "issuing API request");
        let response = self.http.get(&self.config.api_url).query(&query).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "API returned non-success status");
            return Err(WikidataError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json()?;

        // MediaWiki reports logical failures as 200 responses carrying a
        // top-level error object
        if let Some(error) = body.get("error") {
            let code = error
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            let info = error
                .get("info")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            warn!(%code, "API returned error object");
            return Err(WikidataError::Api { code, info });
        }

        Ok(body)
    }

    /// Search entities by label or alias
    ///
    /// Returns the matching summaries in API ranking order; an empty vec
    /// when nothing matches.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchEntity>> {
        let limit = options.limit.min(MAX_SEARCH_LIMIT);

        let mut params = vec![
            ("action", "wbsearchentities".to_string()),
            ("search", query.to_string()),
            ("language", options.language.clone()),
            ("uselang", options.language.clone()),
            ("type", options.entity_type.as_str().to_string()),
            ("limit", limit.to_string()),
        ];
        if options.continue_offset > 0 {
            params.push(("continue", options.continue_offset.to_string()));
        }

        let body = self.request(&params)?;
        let response: SearchResponse = serde_json::from_value(body)?;
        debug!(query, count = response.search.len(), "search completed");
        Ok(response.search)
    }

    /// Retrieve multiple entities (at most [`MAX_ENTITIES_PER_REQUEST`])
    ///
    /// Entities the API reports missing are absent from the returned map;
    /// callers check for key absence rather than handling an error. An
    /// empty id slice short-circuits without a network call.
    pub fn get_entities(
        &self,
        entity_ids: &[&str],
        props: Option<&[&str]>,
        languages: Option<&[&str]>,
    ) -> Result<HashMap<String, Entity>> {
        if entity_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<&str> = entity_ids
            .iter()
            .take(MAX_ENTITIES_PER_REQUEST)
            .copied()
            .collect();
        if ids.len() < entity_ids.len() {
            warn!(
                requested = entity_ids.len(),
                used = ids.len(),
                "entity id batch truncated"
            );
        }

        let mut params = vec![
            ("action", "wbgetentities".to_string()),
            ("ids", ids.join("|")),
        ];
        if let Some(props) = props {
            params.push(("props", props.join("|")));
        }
        if let Some(languages) = languages {
            params.push(("languages", languages.join("|")));
        }

        let body = self.request(&params)?;
        let response: EntitiesResponse = serde_json::from_value(body)?;

        Ok(response
            .entities
            .into_iter()
            .filter(|(_, entity)| !entity.is_missing())
            .collect())
    }

    /// Retrieve a single entity; `None` when the API reports it missing
    pub fn get_entity(
        &self,
        entity_id: &str,
        props: Option<&[&str]>,
        languages: Option<&[&str]>,
    ) -> Result<Option<Entity>> {
        let mut entities = self.get_entities(&[entity_id], props, languages)?;
        Ok(entities.remove(entity_id))
    }

    /// Retrieve claims for an entity, optionally filtered to one property
    pub fn get_claims(
        &self,
        entity_id: &str,
        property_id: Option<&str>,
    ) -> Result<HashMap<String, Vec<Claim>>> {
        let mut params = vec![
            ("action", "wbgetclaims".to_string()),
            ("entity", entity_id.to_string()),
        ];
        if let Some(property_id) = property_id {
            params.push(("property", property_id.to_string()));
        }

        let body = self.request(&params)?;
        let response: ClaimsResponse = serde_json::from_value(body)?;
        Ok(response.claims)
    }

    /// Extract all external identifiers recorded on an entity
    ///
    /// Empty mapping when the entity does not exist or carries no claims.
    /// With `include_labels`, keys become `"<Label> (<PropertyID>)"` for
    /// properties in the known identifier table.
    pub fn get_identifiers(
        &self,
        entity_id: &str,
        include_labels: bool,
    ) -> Result<BTreeMap<String, IdentifierValue>> {
        let entity = match self.get_entity(entity_id, Some(&["claims"]), None)? {
            Some(entity) => entity,
            None => return Ok(BTreeMap::new()),
        };
        Ok(extract_identifiers(&entity.claims, include_labels))
    }

    /// Label of an entity in the given language
    ///
    /// `None` when the entity is absent or has no label in that language.
    pub fn get_label(&self, entity_id: &str, language: &str) -> Result<Option<String>> {
        let entity = self.get_entity(entity_id, Some(&["labels"]), Some(&[language]))?;
        Ok(entity.and_then(|e| e.label(language).map(str::to_string)))
    }
}
