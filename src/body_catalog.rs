//! # Offline body catalog
//!
//! A small, process-wide table of well-known minor bodies, so that the most common searches
//! resolve without any network access.
//!
//! Every entry is reachable by its lower-cased name (`"ceres"`) and by its catalog number
//! (`"1"`); both keys map to the same [`OrbitalElements`]. Matching is exact after
//! [`normalize_query`]: no prefix or fuzzy matching is attempted.
//!
//! ## Example
//!
//! ```rust
//! use neo_orbit::body_catalog::lookup;
//!
//! let by_name = lookup("  Ceres ").unwrap();
//! let by_number = lookup("1").unwrap();
//! assert_eq!(by_name, by_number);
//! assert_eq!(by_name.name(), "1 Ceres");
//! ```

use std::{collections::HashMap, sync::LazyLock};

use crate::{
    constants::{AstronomicalUnit, Day},
    orbital_elements::OrbitalElements,
};

/// One seed body: catalog number, name and planar elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub number: u32,
    pub name: &'static str,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub period_days: Day,
}

impl CatalogEntry {
    const fn new(
        number: u32,
        name: &'static str,
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        period_days: Day,
    ) -> Self {
        CatalogEntry {
            number,
            name,
            semi_major_axis,
            eccentricity,
            period_days,
        }
    }

    /// Display name, number first (`"433 Eros"`).
    pub fn display_name(&self) -> String {
        format!("{} {}", self.number, self.name)
    }
}

/// Seed set, ordered by catalog number.
pub const CATALOG: [CatalogEntry; 11] = [
    CatalogEntry::new(1, "Ceres", 2.767, 0.076, 1682.0),
    CatalogEntry::new(2, "Pallas", 2.773, 0.231, 1686.0),
    CatalogEntry::new(3, "Juno", 2.669, 0.257, 1593.0),
    CatalogEntry::new(4, "Vesta", 2.362, 0.089, 1325.0),
    CatalogEntry::new(10, "Hygiea", 3.139, 0.117, 2034.0),
    CatalogEntry::new(16, "Psyche", 2.921, 0.134, 1828.0),
    CatalogEntry::new(433, "Eros", 1.458, 0.223, 643.0),
    CatalogEntry::new(25143, "Itokawa", 1.324, 0.280, 556.0),
    CatalogEntry::new(99942, "Apophis", 0.922, 0.191, 324.0),
    CatalogEntry::new(101955, "Bennu", 1.126, 0.204, 437.0),
    CatalogEntry::new(162173, "Ryugu", 1.190, 0.190, 474.0),
];

/// Names proposed to the user after a failed search.
pub const SUGGESTIONS: [&str; 8] = [
    "Ceres", "Vesta", "Pallas", "Eros", "Bennu", "Apophis", "Ryugu", "Itokawa",
];

static INDEX: LazyLock<HashMap<String, OrbitalElements>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .filter_map(|entry| {
            OrbitalElements::new(
                entry.display_name(),
                entry.semi_major_axis,
                entry.eccentricity,
                entry.period_days,
            )
            .ok()
            .map(|elements| (entry, elements))
        })
        .flat_map(|(entry, elements)| {
            [
                (entry.name.to_lowercase(), elements.clone()),
                (entry.number.to_string(), elements),
            ]
        })
        .collect()
});

/// Trim and lower-case a free-text query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Look a body up by name or catalog number.
///
/// Arguments
/// ---------
/// * `query` – Free text; it is normalized with [`normalize_query`] before matching.
///
/// Return
/// ------
/// * A copy of the catalog elements, or `None` when the key is unknown.
pub fn lookup(query: &str) -> Option<OrbitalElements> {
    INDEX.get(&normalize_query(query)).cloned()
}

/// Default body displayed when a session starts (433 Eros).
pub fn default_body() -> OrbitalElements {
    lookup("eros").expect("the seed catalog holds 433 Eros")
}
