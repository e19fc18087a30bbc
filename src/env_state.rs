//! # Lookup environment state
//!
//! This module defines [`crate::env_state::LookupEnv`], the **shared environment object** used
//! to reach remote orbit data. It provides:
//!
//! - A persistent **HTTP client** ([`reqwest::Client`]) with a global request timeout.
//! - The **endpoint configuration** ([`LookupConfig`]) of the local proxy, the public relay
//!   and the upstream SBDB API.
//! - Factories for the two lookup transports and for a ready-to-use
//!   [`OrbitResolver`](crate::resolver::OrbitResolver).
//!
//! The client is reference counted internally, so the environment is **cheaply cloneable** and
//! every transport built from it shares one connection pool.
//!
//! ## Structure
//!
//! ```text
//! LookupEnv
//! ├── http_client (reqwest::Client)
//! └── config      (LookupConfig)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neo_orbit::env_state::{LookupConfig, LookupEnv};
//!
//! # async fn run() -> Result<(), neo_orbit::orbit_errors::OrbitError> {
//! let env = LookupEnv::new(LookupConfig::default())?;
//! let resolver = env.resolver()?;
//! let outcome = resolver.resolve("apophis").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration file
//!
//! [`LookupConfig`] is serde-deserializable; every field is optional and falls back to its
//! default:
//!
//! ```json
//! { "local_proxy_url": "http://localhost:3001", "timeout_secs": 5 }
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    orbit_errors::OrbitError,
    resolver::OrbitResolver,
    sbdb::{
        transport::{LocalProxyTransport, PublicRelayTransport},
        LOCAL_PROXY_URL, PUBLIC_RELAY_URL, SBDB_API_URL,
    },
};

/// Endpoints and limits of the remote lookup chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the local forwarding service (primary transport)
    pub local_proxy_url: String,
    /// Public relay wrapping the upstream URL (fallback transport)
    pub relay_url: String,
    /// Upstream SBDB query endpoint, as seen by the relay
    pub upstream_url: String,
    /// Global timeout of one HTTP call, in seconds
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            local_proxy_url: LOCAL_PROXY_URL.to_string(),
            relay_url: PUBLIC_RELAY_URL.to_string(),
            upstream_url: SBDB_API_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl LookupConfig {
    /// Read a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, OrbitError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Shared HTTP client and endpoint configuration.
#[derive(Debug, Clone)]
pub struct LookupEnv {
    pub http_client: Client,
    pub config: LookupConfig,
}

impl LookupEnv {
    /// Create a new environment.
    ///
    /// Arguments
    /// ---------
    /// * `config` – Endpoints and timeout.
    ///
    /// Return
    /// ------
    /// * The environment, or [`OrbitError::HttpClient`] if the TLS backend cannot be set up.
    pub fn new(config: LookupConfig) -> Result<Self, OrbitError> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| OrbitError::HttpClient(err.to_string()))?;

        Ok(LookupEnv {
            http_client,
            config,
        })
    }

    pub fn local_proxy_transport(&self) -> Result<LocalProxyTransport, OrbitError> {
        LocalProxyTransport::new(self.http_client.clone(), &self.config.local_proxy_url)
    }

    pub fn public_relay_transport(&self) -> Result<PublicRelayTransport, OrbitError> {
        PublicRelayTransport::new(
            self.http_client.clone(),
            &self.config.relay_url,
            &self.config.upstream_url,
        )
    }

    /// Resolver chaining the local proxy and the public relay, in that order.
    pub fn resolver(
        &self,
    ) -> Result<OrbitResolver<LocalProxyTransport, PublicRelayTransport>, OrbitError> {
        Ok(OrbitResolver::new(
            self.local_proxy_transport()?,
            self.public_relay_transport()?,
        ))
    }
}
