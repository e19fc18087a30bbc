//! # SBDB payload parsing
//!
//! The JPL Small-Body Database answers a `sstr=` query with one of two JSON shapes:
//!
//! ```text
//! { "code": 300, "list": [ { "pdes": "...", "name": "..." }, ... ] }        several matches
//! { "object": { "fullname": "...", "shortname": "..." },
//!   "orbit":  { "elements": [ { "name": "a", "value": "1.458" }, ... ] } }   one match
//! ```
//!
//! [`SbdbPayload`] turns that untyped document into a strict variant as soon as it is received;
//! nothing past this module handles raw JSON. Element values are published as strings by the
//! API but plain numbers are accepted as well; any other value only drops that element. The
//! `code` field is accepted both as a number and as a numeric string.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{orbit_errors::OrbitError, orbital_elements::OrbitalElements};

/// SBDB status code for "more than one object matches the query"
pub const MULTIPLE_MATCHES_CODE: i64 = 300;

/// Maximum number of candidate designations kept from an ambiguous answer
pub const MAX_CANDIDATES: usize = 3;

/// Numeric value of a JSON number or numeric string.
fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(x) => x.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct RawCandidate {
    pdes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    fullname: Option<String>,
    shortname: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    name: String,
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Deserialize)]
struct RawOrbit {
    elements: Option<Vec<RawElement>>,
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    #[serde(default)]
    code: Value,
    list: Option<Vec<RawCandidate>>,
    object: Option<RawObject>,
    orbit: Option<RawOrbit>,
}

/// A single object returned by the SBDB, before validation of its elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBody {
    pub fullname: Option<String>,
    pub shortname: Option<String>,
    /// Element name → numeric value, for every element whose value parsed as a number
    pub elements: HashMap<String, f64>,
}

impl ResolvedBody {
    /// Display name: `fullname`, then `shortname`, then the query that produced this body.
    pub fn display_name(&self, query: &str) -> String {
        [self.fullname.as_deref(), self.shortname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(query)
            .to_string()
    }

    fn element(&self, name: &str) -> Result<f64, OrbitError> {
        self.elements
            .get(name)
            .copied()
            .ok_or_else(|| OrbitError::IncompleteOrbitalData(name.to_string()))
    }

    /// Build validated elements from the `a`, `e` and `per` entries.
    ///
    /// Presence is checked by key, so `e = 0` is a valid eccentricity.
    ///
    /// Arguments
    /// ---------
    /// * `query` – Normalized query, used as the name when the object carries none.
    ///
    /// Return
    /// ------
    /// * The [`OrbitalElements`], [`OrbitError::IncompleteOrbitalData`] when a required
    ///   element is missing, or the validation error of [`OrbitalElements::new`].
    pub fn to_orbital_elements(&self, query: &str) -> Result<OrbitalElements, OrbitError> {
        let a = self.element("a")?;
        let e = self.element("e")?;
        let per = self.element("per")?;
        OrbitalElements::new(self.display_name(query), a, e, per)
    }
}

/// Strictly typed view of one SBDB answer.
#[derive(Debug, Clone, PartialEq)]
pub enum SbdbPayload {
    /// Several objects match; first [`MAX_CANDIDATES`] primary designations, in API order
    Ambiguous(Vec<String>),
    /// Exactly one object, with its orbital elements
    Resolved(ResolvedBody),
    /// Valid JSON that matches neither shape
    Malformed(String),
}

impl SbdbPayload {
    /// Classify a JSON document received from a lookup transport.
    pub fn from_value(value: Value) -> Self {
        let raw: RawPayload = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(err) => return SbdbPayload::Malformed(err.to_string()),
        };

        let multiple =
            number_of(&raw.code).is_some_and(|code| code == MULTIPLE_MATCHES_CODE as f64);

        if multiple {
            if let Some(list) = raw.list {
                let candidates: Vec<String> = list
                    .into_iter()
                    .filter_map(|c| c.pdes)
                    .take(MAX_CANDIDATES)
                    .collect();
                return if candidates.is_empty() {
                    SbdbPayload::Malformed("empty candidate list".into())
                } else {
                    SbdbPayload::Ambiguous(candidates)
                };
            }
        }

        match (raw.object, raw.orbit.and_then(|orbit| orbit.elements)) {
            (Some(object), Some(elements)) => SbdbPayload::Resolved(ResolvedBody {
                fullname: object.fullname,
                shortname: object.shortname,
                elements: elements
                    .into_iter()
                    .filter_map(|el| Some((el.name, number_of(&el.value)?)))
                    .collect(),
            }),
            _ => SbdbPayload::Malformed("neither a candidate list nor an orbit".into()),
        }
    }

    /// Parse a raw response body.
    pub fn from_json(body: &str) -> Result<Self, OrbitError> {
        Ok(Self::from_value(serde_json::from_str(body)?))
    }
}

#[cfg(test)]
mod sbdb_response_test {
    use super::*;
    use serde_json::json;

    fn eros_payload() -> Value {
        json!({
            "object": { "fullname": "433 Eros (A898 PA)", "shortname": "433 Eros" },
            "orbit": {
                "elements": [
                    { "name": "e", "value": "0.2228", "sigma": "1.4e-09" },
                    { "name": "a", "value": "1.458" },
                    { "name": "q", "value": "1.133" },
                    { "name": "per", "value": "643.1" },
                    { "name": "tp", "value": null }
                ]
            }
        })
    }

    #[test]
    fn test_ambiguous_capped_and_ordered() {
        let payload = SbdbPayload::from_value(json!({
            "code": 300,
            "list": [{ "pdes": "X" }, { "pdes": "Y" }, { "pdes": "Z" }, { "pdes": "W" }]
        }));
        assert_eq!(
            payload,
            SbdbPayload::Ambiguous(vec!["X".into(), "Y".into(), "Z".into()])
        );
    }

    #[test]
    fn test_ambiguous_code_as_string() {
        let payload = SbdbPayload::from_value(json!({
            "code": "300",
            "message": "specified search matched multiple records",
            "list": [{ "pdes": "2000 AA", "name": "(2000 AA)" }]
        }));
        assert_eq!(payload, SbdbPayload::Ambiguous(vec!["2000 AA".into()]));
    }

    #[test]
    fn test_resolved() {
        let SbdbPayload::Resolved(body) = SbdbPayload::from_value(eros_payload()) else {
            panic!("expected a resolved body");
        };
        assert_eq!(body.elements.get("a"), Some(&1.458));
        assert_eq!(body.elements.get("e"), Some(&0.2228));
        assert!(!body.elements.contains_key("tp"));

        let elements = body.to_orbital_elements("eros").unwrap();
        assert_eq!(elements.name(), "433 Eros (A898 PA)");
        assert_eq!(elements.period_days(), 643.1);
    }

    #[test]
    fn test_numeric_values_and_zero_eccentricity() {
        let payload = SbdbPayload::from_value(json!({
            "object": {},
            "orbit": { "elements": [
                { "name": "a", "value": 2.0 },
                { "name": "e", "value": 0 },
                { "name": "per", "value": "1033.5" }
            ]}
        }));
        let SbdbPayload::Resolved(body) = payload else {
            panic!("expected a resolved body");
        };
        let elements = body.to_orbital_elements("circular one").unwrap();
        assert_eq!(elements.eccentricity(), 0.0);
        assert_eq!(elements.name(), "circular one");
    }

    #[test]
    fn test_unexpected_value_only_drops_its_element() {
        let payload = SbdbPayload::from_value(json!({
            "object": { "fullname": "101955 Bennu (1999 RQ36)" },
            "orbit": { "elements": [
                { "name": "a", "value": "1.126" },
                { "name": "e", "value": "0.2037" },
                { "name": "per", "value": "436.6" },
                { "name": "i", "value": true },
                { "name": "om", "value": { "deg": 2.06 } },
                { "name": "w" }
            ]}
        }));
        let SbdbPayload::Resolved(body) = payload else {
            panic!("expected a resolved body");
        };
        assert_eq!(body.elements.len(), 3);

        let elements = body.to_orbital_elements("bennu").unwrap();
        assert_eq!(elements.semi_major_axis(), 1.126);
        assert_eq!(elements.eccentricity(), 0.2037);
        assert_eq!(elements.period_days(), 436.6);
    }

    #[test]
    fn test_name_fallbacks() {
        let body = ResolvedBody {
            fullname: Some("  ".into()),
            shortname: Some("Bennu".into()),
            elements: HashMap::new(),
        };
        assert_eq!(body.display_name("q"), "Bennu");

        let body = ResolvedBody {
            fullname: None,
            shortname: None,
            elements: HashMap::new(),
        };
        assert_eq!(body.display_name("q"), "q");
    }

    #[test]
    fn test_missing_element() {
        let payload = SbdbPayload::from_value(json!({
            "object": { "fullname": "x" },
            "orbit": { "elements": [
                { "name": "a", "value": "1.0" },
                { "name": "e", "value": "0.1" }
            ]}
        }));
        let SbdbPayload::Resolved(body) = payload else {
            panic!("expected a resolved body");
        };
        assert_eq!(
            body.to_orbital_elements("x"),
            Err(OrbitError::IncompleteOrbitalData("per".into()))
        );
    }

    #[test]
    fn test_open_orbit_is_rejected() {
        let payload = SbdbPayload::from_value(json!({
            "object": { "fullname": "'Oumuamua" },
            "orbit": { "elements": [
                { "name": "a", "value": "-1.27" },
                { "name": "e", "value": "1.20" },
                { "name": "per", "value": "100" }
            ]}
        }));
        let SbdbPayload::Resolved(body) = payload else {
            panic!("expected a resolved body");
        };
        assert!(body.to_orbital_elements("oumuamua").is_err());
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            SbdbPayload::from_value(json!({ "code": "200", "message": "not found" })),
            SbdbPayload::Malformed(_)
        ));
        assert!(matches!(
            SbdbPayload::from_value(json!([1, 2, 3])),
            SbdbPayload::Malformed(_)
        ));
        assert!(matches!(
            SbdbPayload::from_value(json!({ "code": 300, "list": [] })),
            SbdbPayload::Malformed(_)
        ));
        assert!(SbdbPayload::from_json("<html>").is_err());
    }
}
