//! # Orbit resolution
//!
//! [`OrbitResolver::resolve`] turns a free-text query into a [`SearchOutcome`], trying the
//! sources in a fixed order and stopping at the first one that answers:
//!
//! 1. the offline [`body_catalog`](crate::body_catalog), with no I/O,
//! 2. the primary [`LookupTransport`] (local proxy),
//! 3. the fallback [`LookupTransport`] (public relay), only once the primary call has fully
//!    failed.
//!
//! Transport failures never propagate as errors: a failing primary is expected (the proxy may
//! not be running) and a failing fallback becomes [`SearchOutcome::TransportError`]. The only
//! error returned is [`OrbitError::EmptyQuery`], raised before any lookup.

use std::fmt;

use itertools::Itertools;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    body_catalog::{self, normalize_query, SUGGESTIONS},
    orbit_errors::OrbitError,
    orbital_elements::OrbitalElements,
    sbdb::{response::SbdbPayload, transport::LookupTransport},
};

/// Result of one search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A single body with valid elements
    Found(OrbitalElements),
    /// Several bodies match; up to three candidate designations, in source order
    Ambiguous(Vec<String>),
    /// The source answered but no usable body came out of it
    NotFound,
    /// No source could be reached
    TransportError,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// User-facing status line for this outcome.
    ///
    /// `NotFound` and `TransportError` share the same message, which lists the catalog names
    /// that are guaranteed to work offline.
    pub fn status_message(&self, query: &str) -> String {
        match self {
            SearchOutcome::Found(_) => "Found! Loading orbit...".to_string(),
            SearchOutcome::Ambiguous(candidates) => {
                format!("Multiple matches. Try: {}", candidates.iter().join(", "))
            }
            SearchOutcome::NotFound | SearchOutcome::TransportError => format!(
                "\"{query}\" not found in NASA database. Try: {}",
                SUGGESTIONS.iter().join(", ")
            ),
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(elements) => write!(f, "found {}", elements.name()),
            SearchOutcome::Ambiguous(candidates) => {
                write!(f, "ambiguous ({})", candidates.iter().join(", "))
            }
            SearchOutcome::NotFound => write!(f, "not found"),
            SearchOutcome::TransportError => write!(f, "transport error"),
        }
    }
}

/// Interpret an SBDB answer for `query`.
///
/// Invalid or incomplete element sets, including open orbits (`e ≥ 1`), are reported as
/// [`SearchOutcome::NotFound`].
pub fn interpret_payload(payload: SbdbPayload, query: &str) -> SearchOutcome {
    match payload {
        SbdbPayload::Ambiguous(candidates) => SearchOutcome::Ambiguous(candidates),
        SbdbPayload::Resolved(body) => match body.to_orbital_elements(query) {
            Ok(elements) => SearchOutcome::Found(elements),
            Err(err) => {
                warn!(query, %err, "rejected SBDB orbital elements");
                SearchOutcome::NotFound
            }
        },
        SbdbPayload::Malformed(reason) => {
            debug!(query, %reason, "unusable SBDB payload");
            SearchOutcome::NotFound
        }
    }
}

/// Catalog-then-remote lookup chain.
#[derive(Debug, Clone)]
pub struct OrbitResolver<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> OrbitResolver<P, F>
where
    P: LookupTransport,
    F: LookupTransport,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    /// Resolve a free-text query into orbital elements.
    ///
    /// Arguments
    /// ---------
    /// * `query` – Name, number or designation; trimmed and lower-cased before use.
    ///
    /// Return
    /// ------
    /// * Exactly one [`SearchOutcome`], or [`OrbitError::EmptyQuery`] for a blank query.
    pub async fn resolve(&self, query: &str) -> Result<SearchOutcome, OrbitError> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Err(OrbitError::EmptyQuery);
        }

        if let Some(elements) = body_catalog::lookup(&query) {
            debug!(query = %query, name = elements.name(), "catalog hit");
            return Ok(SearchOutcome::Found(elements));
        }

        let Some(value) = self.fetch_remote(&query).await else {
            return Ok(SearchOutcome::TransportError);
        };

        Ok(interpret_payload(SbdbPayload::from_value(value), &query))
    }

    /// Primary transport, then fallback transport, strictly one after the other.
    async fn fetch_remote(&self, query: &str) -> Option<Value> {
        match self.primary.fetch(query).await {
            Ok(value) => return Some(value),
            Err(err) => info!(
                query,
                %err,
                "{} not available, trying {}",
                self.primary.label(),
                self.fallback.label()
            ),
        }

        match self.fallback.fetch(query).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(query, %err, "{} lookup failed", self.fallback.label());
                None
            }
        }
    }
}
