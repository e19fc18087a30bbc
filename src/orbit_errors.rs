use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("Please enter an asteroid name or number")]
    EmptyQuery,

    #[error("Orbital elements need a non-empty name")]
    EmptyName,

    #[error("Invalid eccentricity: {0} (closed orbits need 0 <= e < 1)")]
    InvalidEccentricity(f64),

    #[error("Invalid semi-major axis: {0} AU (must be positive)")]
    InvalidSemiMajorAxis(f64),

    #[error("Invalid orbital period: {0} days (must be positive)")]
    InvalidPeriod(f64),

    #[error("Incomplete orbital data, missing element: {0}")]
    IncompleteOrbitalData(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unable to build the HTTP client: {0}")]
    HttpClient(String),

    #[error("Lookup transport failure: {0}")]
    Transport(String),

    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Malformed SBDB payload: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PartialEq for OrbitError {
    fn eq(&self, other: &Self) -> bool {
        use OrbitError::*;
        match (self, other) {
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (InvalidSemiMajorAxis(a), InvalidSemiMajorAxis(b)) => a == b,
            (InvalidPeriod(a), InvalidPeriod(b)) => a == b,
            (IncompleteOrbitalData(a), IncompleteOrbitalData(b)) => a == b,
            (InvalidUrl(a), InvalidUrl(b)) => a == b,
            (HttpClient(a), HttpClient(b)) => a == b,
            (Transport(a), Transport(b)) => a == b,

            // not comparable: same variant is enough
            (ReqwestError(_), ReqwestError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            (EmptyQuery, EmptyQuery) => true,
            (EmptyName, EmptyName) => true,

            _ => false,
        }
    }
}
