//! # Response Models Module
//!
//! ## Purpose
//! Typed representations of the Wikidata API response envelopes and their
//! contents: search results (`wbsearchentities`), entity records
//! (`wbgetentities`) and claim statements (`wbgetclaims`).
//!
//! Datavalue payloads stay as raw JSON (`serde_json::Value`) because their
//! shape varies by datatype (plain string for external ids, structured
//! objects for coordinates, quantities and entity references).

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Datatype tag marking a claim value as an identifier in an external system
pub const EXTERNAL_ID_DATATYPE: &str = "external-id";

/// Envelope of a `wbsearchentities` response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching entity summaries, in API ranking order
    #[serde(default)]
    pub search: Vec<SearchEntity>,
}

/// One entity summary from a search response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchEntity {
    /// Entity identifier (e.g. "Q937")
    pub id: String,
    /// Label in the search language, when available
    #[serde(default)]
    pub label: Option<String>,
    /// Short description, when available
    #[serde(default)]
    pub description: Option<String>,
    /// Alias strings that matched the query
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
    /// Canonical page URL
    #[serde(default)]
    pub url: Option<String>,
    /// Concept URI
    #[serde(default)]
    pub concepturi: Option<String>,
}

/// Envelope of a `wbgetentities` response
#[derive(Debug, Clone, Deserialize)]
pub struct EntitiesResponse {
    /// Entity records keyed by requested identifier
    #[serde(default)]
    pub entities: HashMap<String, Entity>,
}

/// A full entity record
///
/// Every sub-mapping is optional in the API response; filters on `props`
/// and `languages` prune them server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    /// Entity identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Entity kind ("item" or "property")
    #[serde(rename = "type", default)]
    pub entity_type: Option<String>,
    /// Labels keyed by language code
    #[serde(default)]
    pub labels: HashMap<String, LocalizedValue>,
    /// Descriptions keyed by language code
    #[serde(default)]
    pub descriptions: HashMap<String, LocalizedValue>,
    /// Aliases keyed by language code
    #[serde(default)]
    pub aliases: HashMap<String, Vec<LocalizedValue>>,
    /// Claims keyed by property identifier
    #[serde(default)]
    pub claims: HashMap<String, Vec<Claim>>,
    /// Sitelinks keyed by site identifier
    #[serde(default)]
    pub sitelinks: HashMap<String, Sitelink>,
    /// Present (as an empty string) when the API reports the entity missing
    #[serde(default)]
    pub missing: Option<String>,
}

impl Entity {
    /// Whether the API flagged this record as missing
    pub fn is_missing(&self) -> bool {
        self.missing.is_some()
    }

    /// Label in the given language, if recorded
    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels.get(language).map(|l| l.value.as_str())
    }
}

/// A language-tagged string (label, description or alias)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocalizedValue {
    pub language: String,
    pub value: String,
}

/// A sitelink to a Wikimedia project page
#[derive(Debug, Clone, Deserialize)]
pub struct Sitelink {
    pub site: String,
    pub title: String,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// Envelope of a `wbgetclaims` response
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimsResponse {
    /// Statement lists keyed by property identifier
    #[serde(default)]
    pub claims: HashMap<String, Vec<Claim>>,
}

/// One claim (statement) about an entity
#[derive(Debug, Clone, Deserialize)]
pub struct Claim {
    #[serde(default)]
    pub id: Option<String>,
    /// Primary value-bearing component of the statement
    pub mainsnak: Snak,
    #[serde(rename = "type", default)]
    pub claim_type: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
}

impl Claim {
    /// String datavalue of this claim when its datatype is external-id
    pub fn external_id_value(&self) -> Option<&str> {
        if self.mainsnak.datatype.as_deref() != Some(EXTERNAL_ID_DATATYPE) {
            return None;
        }
        self.mainsnak
            .datavalue
            .as_ref()
            .and_then(|dv| dv.value.as_str())
    }

    /// Whether the mainsnak carries the external-id datatype
    pub fn is_external_id(&self) -> bool {
        self.mainsnak.datatype.as_deref() == Some(EXTERNAL_ID_DATATYPE)
    }
}

/// Value-bearing component of a claim
#[derive(Debug, Clone, Deserialize)]
pub struct Snak {
    #[serde(default)]
    pub snaktype: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
    /// Datatype tag (e.g. "external-id", "wikibase-item", "quantity")
    #[serde(default)]
    pub datatype: Option<String>,
    /// Actual value payload; absent for "somevalue"/"novalue" snaks
    #[serde(default)]
    pub datavalue: Option<DataValue>,
}

/// Raw datavalue payload of a snak
#[derive(Debug, Clone, Deserialize)]
pub struct DataValue {
    /// Value content; a plain string for external ids, structured JSON for
    /// coordinate, quantity and entity-reference datatypes
    pub value: Value,
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_deserializes() {
        let body = json!({
            "searchinfo": { "search": "Albert Einstein" },
            "search": [{
                "id": "Q937",
                "title": "Q937",
                "url": "//www.wikidata.org/wiki/Q937",
                "label": "Albert Einstein",
                "description": "theoretical physicist",
                "match": { "type": "label", "language": "en", "text": "Albert Einstein" }
            }],
            "success": 1
        });
        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.search.len(), 1);
        let record = &response.search[0];
        assert_eq!(record.id, "Q937");
        assert_eq!(record.label.as_deref(), Some("Albert Einstein"));
        assert_eq!(record.description.as_deref(), Some("theoretical physicist"));
        assert!(record.aliases.is_none());
    }

    #[test]
    fn test_entity_record_deserializes() {
        let body = json!({
            "entities": {
                "Q42": {
                    "id": "Q42",
                    "type": "item",
                    "labels": { "en": { "language": "en", "value": "Douglas Adams" } },
                    "descriptions": { "en": { "language": "en", "value": "English author" } },
                    "aliases": { "en": [ { "language": "en", "value": "Douglas Noel Adams" } ] },
                    "claims": {
                        "P214": [{
                            "id": "Q42$foo",
                            "type": "statement",
                            "rank": "normal",
                            "mainsnak": {
                                "snaktype": "value",
                                "property": "P214",
                                "datatype": "external-id",
                                "datavalue": { "value": "113230702", "type": "string" }
                            }
                        }]
                    },
                    "sitelinks": {
                        "enwiki": { "site": "enwiki", "title": "Douglas Adams", "badges": [] }
                    }
                }
            },
            "success": 1
        });
        let response: EntitiesResponse = serde_json::from_value(body).unwrap();
        let entity = &response.entities["Q42"];
        assert!(!entity.is_missing());
        assert_eq!(entity.label("en"), Some("Douglas Adams"));
        assert_eq!(entity.label("de"), None);
        let claim = &entity.claims["P214"][0];
        assert!(claim.is_external_id());
        assert_eq!(claim.external_id_value(), Some("113230702"));
    }

    #[test]
    fn test_missing_entity_flag() {
        let body = json!({
            "entities": { "Q999999999999": { "id": "Q999999999999", "missing": "" } }
        });
        let response: EntitiesResponse = serde_json::from_value(body).unwrap();
        assert!(response.entities["Q999999999999"].is_missing());
    }

    #[test]
    fn test_novalue_snak_has_no_external_id() {
        let claim: Claim = serde_json::from_value(json!({
            "mainsnak": { "snaktype": "novalue", "property": "P214", "datatype": "external-id" }
        }))
        .unwrap();
        assert!(claim.is_external_id());
        assert_eq!(claim.external_id_value(), None);
    }
}
