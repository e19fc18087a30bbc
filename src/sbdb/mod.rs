//! # JPL Small-Body Database access
//!
//! Remote half of the orbit lookup:
//!
//! - [`transport`] – the [`LookupTransport`](transport::LookupTransport) seam and the two HTTP
//!   transports (local proxy, public relay),
//! - [`response`] – strict parsing of the SBDB JSON answer into
//!   [`SbdbPayload`](response::SbdbPayload).
//!
//! Defaults for the endpoints live in [`LookupConfig`](crate::env_state::LookupConfig).

pub mod response;
pub mod transport;

/// Public SBDB query endpoint
pub const SBDB_API_URL: &str = "https://ssd-api.jpl.nasa.gov/sbdb.api";

/// Public pass-through relay returning the raw body of the wrapped URL
pub const PUBLIC_RELAY_URL: &str = "https://api.allorigins.win/raw";

/// Default base URL of the local forwarding service
pub const LOCAL_PROXY_URL: &str = "http://localhost:3001";
