//! # Identifier Extraction Module
//!
//! ## Purpose
//! Collapses an entity's claims into a mapping from external-identifier
//! property to identifier value, the one domain transform in this crate.
//!
//! ## Selection Rule
//! Per property, statements are scanned in API response order and the first
//! one carrying the `external-id` datatype decides the property's value;
//! later statements for that property are ignored (mirroring the API's
//! preferred-first ordering). Statements of other datatypes ahead of it are
//! skipped without ending the scan.
//!
//! ## Key Shape
//! Keys are bare property identifiers, or `"<Label> (<PropertyID>)"` when
//! label decoration is requested and the property appears in the known
//! identifier-property table.

use crate::models::Claim;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Identifier value(s) recorded under one key
///
/// Explicit one-or-many shape: a key collision promotes `One` to `Many`.
/// Serializes untagged, so JSON output is a plain string or an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IdentifierValue {
    One(String),
    Many(Vec<String>),
}

impl IdentifierValue {
    /// Append a value, promoting `One` to `Many` on the first collision
    pub fn push(&mut self, value: String) {
        match self {
            IdentifierValue::One(existing) => {
                *self = IdentifierValue::Many(vec![std::mem::take(existing), value]);
            }
            IdentifierValue::Many(values) => values.push(value),
        }
    }

    /// All recorded values in insertion order
    pub fn values(&self) -> Vec<&str> {
        match self {
            IdentifierValue::One(v) => vec![v.as_str()],
            IdentifierValue::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

/// Human-readable label for a known external-identifier property
///
/// Covers the common authority-file and catalogue properties. P1015 maps to
/// "NORAF ID" only; the BIBSYS register it used to be listed under was
/// merged into NORAF.
pub fn identifier_property_label(property_id: &str) -> Option<&'static str> {
    let label = match property_id {
        "P213" => "ISNI",
        "P214" => "VIAF ID",
        "P227" => "GND ID",
        "P244" => "Library of Congress ID",
        "P268" => "BnF ID",
        "P269" => "IdRef ID",
        "P345" => "IMDb ID",
        "P349" => "NDL ID",
        "P396" => "SBN author ID",
        "P402" => "OpenStreetMap relation ID",
        "P409" => "NLA ID",
        "P434" => "MusicBrainz artist ID",
        "P496" => "ORCID iD",
        "P646" => "Freebase ID",
        "P691" => "NKC ID",
        "P906" => "SELIBR ID",
        "P950" => "BNE ID",
        "P1006" => "NTA ID",
        "P1015" => "NORAF ID",
        "P1017" => "BAV ID",
        "P1273" => "CANTIC ID",
        "P1566" => "GeoNames ID",
        "P1728" => "AllMusic artist ID",
        "P1953" => "Discogs artist ID",
        "P2163" => "FAST ID",
        "P3430" => "SNAC Ark ID",
        _ => return None,
    };
    Some(label)
}

/// Extract external identifiers from an entity's claims
///
/// Returns an ordered mapping; empty when the claims map is empty or no
/// property carries an external-id statement with a non-empty value.
pub fn extract_identifiers(
    claims: &HashMap<String, Vec<Claim>>,
    include_labels: bool,
) -> BTreeMap<String, IdentifierValue> {
    let mut identifiers = BTreeMap::new();

    for (property_id, statements) in claims {
        for claim in statements {
            if !claim.is_external_id() {
                continue;
            }
            // Empty-string datavalues contribute nothing, but the statement
            // still terminates the scan for this property
            if let Some(value) = claim.external_id_value().filter(|v| !v.is_empty()) {
                let key = if include_labels {
                    match identifier_property_label(property_id) {
                        Some(label) => format!("{} ({})", label, property_id),
                        None => property_id.clone(),
                    }
                } else {
                    property_id.clone()
                };
                identifiers
                    .entry(key)
                    .and_modify(|existing: &mut IdentifierValue| {
                        existing.push(value.to_string())
                    })
                    .or_insert_with(|| IdentifierValue::One(value.to_string()));
            }
            // First external-id statement decides this property
            break;
        }
    }

    identifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims_from(value: serde_json::Value) -> HashMap<String, Vec<Claim>> {
        serde_json::from_value(value).unwrap()
    }

    fn external_id_claim(property: &str, value: &str) -> serde_json::Value {
        json!({
            "mainsnak": {
                "snaktype": "value",
                "property": property,
                "datatype": "external-id",
                "datavalue": { "value": value, "type": "string" }
            }
        })
    }

    #[test]
    fn test_empty_claims_yield_empty_mapping() {
        let claims = HashMap::new();
        assert!(extract_identifiers(&claims, false).is_empty());
        assert!(extract_identifiers(&claims, true).is_empty());
    }

    #[test]
    fn test_first_external_id_statement_wins() {
        let claims = claims_from(json!({
            "P214": [
                external_id_claim("P214", "first-value"),
                external_id_claim("P214", "second-value")
            ]
        }));
        let ids = extract_identifiers(&claims, false);
        assert_eq!(
            ids.get("P214"),
            Some(&IdentifierValue::One("first-value".to_string()))
        );
    }

    #[test]
    fn test_non_external_id_statements_are_skipped() {
        let claims = claims_from(json!({
            "P214": [
                {
                    "mainsnak": {
                        "snaktype": "value",
                        "property": "P214",
                        "datatype": "string",
                        "datavalue": { "value": "not-an-id", "type": "string" }
                    }
                },
                external_id_claim("P214", "the-id")
            ],
            "P31": [{
                "mainsnak": {
                    "snaktype": "value",
                    "property": "P31",
                    "datatype": "wikibase-item",
                    "datavalue": { "value": { "entity-type": "item", "id": "Q5" }, "type": "wikibase-entityid" }
                }
            }]
        }));
        let ids = extract_identifiers(&claims, false);
        assert_eq!(ids.len(), 1);
        assert_eq!(
            ids.get("P214"),
            Some(&IdentifierValue::One("the-id".to_string()))
        );
    }

    #[test]
    fn test_label_decorated_keys() {
        let claims = claims_from(json!({
            "P214": [external_id_claim("P214", "113230702")],
            "P9999999": [external_id_claim("P9999999", "opaque")]
        }));
        let ids = extract_identifiers(&claims, true);
        assert_eq!(
            ids.get("VIAF ID (P214)"),
            Some(&IdentifierValue::One("113230702".to_string()))
        );
        // Unknown properties keep the bare id even when labels are requested
        assert_eq!(
            ids.get("P9999999"),
            Some(&IdentifierValue::One("opaque".to_string()))
        );
    }

    #[test]
    fn test_empty_string_value_contributes_nothing() {
        let claims = claims_from(json!({
            "P214": [
                external_id_claim("P214", ""),
                external_id_claim("P214", "later-value")
            ]
        }));
        // The empty first statement still ends the scan for the property
        assert!(extract_identifiers(&claims, false).is_empty());
    }

    #[test]
    fn test_novalue_snak_contributes_nothing() {
        let claims = claims_from(json!({
            "P214": [{
                "mainsnak": { "snaktype": "novalue", "property": "P214", "datatype": "external-id" }
            }]
        }));
        assert!(extract_identifiers(&claims, false).is_empty());
    }

    #[test]
    fn test_collision_promotes_to_many() {
        let mut value = IdentifierValue::One("a".to_string());
        value.push("b".to_string());
        assert_eq!(
            value,
            IdentifierValue::Many(vec!["a".to_string(), "b".to_string()])
        );
        value.push("c".to_string());
        assert_eq!(value.values(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_untagged_serialization_shape() {
        let one = IdentifierValue::One("x".to_string());
        assert_eq!(serde_json::to_value(&one).unwrap(), json!("x"));
        let many = IdentifierValue::Many(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(serde_json::to_value(&many).unwrap(), json!(["x", "y"]));
    }

    #[test]
    fn test_table_has_no_duplicate_p1015() {
        assert_eq!(identifier_property_label("P1015"), Some("NORAF ID"));
        assert_eq!(identifier_property_label("P1566"), Some("GeoNames ID"));
        assert_eq!(identifier_property_label("P0"), None);
    }
}
