//! # Lookup transports
//!
//! A [`LookupTransport`] performs exactly one HTTP call for one query and hands back the JSON
//! document it received. Two reqwest-backed implementations reach the same SBDB endpoint:
//!
//! - [`LocalProxyTransport`]: `GET {base}/api/asteroid/{query}` on a local forwarding service,
//! - [`PublicRelayTransport`]: `GET {relay}?url={upstream}?sstr={query}` through a public
//!   pass-through relay.
//!
//! Connection errors, timeouts, non-2xx statuses and non-JSON bodies all surface as an
//! [`OrbitError`]; deciding what to do with them is the resolver's job.

use std::future::Future;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::orbit_errors::OrbitError;

/// One remote source able to answer an SBDB `sstr` query.
pub trait LookupTransport {
    /// Short label used in logs
    fn label(&self) -> &str;

    /// Perform the call and return the decoded JSON body.
    fn fetch(&self, query: &str) -> impl Future<Output = Result<Value, OrbitError>> + Send;
}

pub(crate) fn parse_url(url: &str) -> Result<Url, OrbitError> {
    Url::parse(url).map_err(|err| OrbitError::InvalidUrl(format!("{url}: {err}")))
}

async fn get_json(client: &Client, url: Url) -> Result<Value, OrbitError> {
    debug!(%url, "SBDB lookup request");
    let value = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(value)
}

/// Local forwarding service exposing `/api/asteroid/{query}`.
#[derive(Debug, Clone)]
pub struct LocalProxyTransport {
    client: Client,
    base_url: Url,
}

impl LocalProxyTransport {
    pub fn new(client: Client, base_url: &str) -> Result<Self, OrbitError> {
        let base_url = parse_url(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(OrbitError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// URL of the request for `query`, with the query percent-encoded as one path segment.
    pub fn request_url(&self, query: &str) -> Result<Url, OrbitError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| OrbitError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "asteroid", query]);
        Ok(url)
    }
}

impl LookupTransport for LocalProxyTransport {
    fn label(&self) -> &str {
        "local proxy"
    }

    async fn fetch(&self, query: &str) -> Result<Value, OrbitError> {
        let url = self.request_url(query)?;
        get_json(&self.client, url).await
    }
}

/// Public relay fetching the SBDB URL passed in its `url` parameter.
#[derive(Debug, Clone)]
pub struct PublicRelayTransport {
    client: Client,
    relay_url: Url,
    upstream_url: Url,
}

impl PublicRelayTransport {
    pub fn new(client: Client, relay_url: &str, upstream_url: &str) -> Result<Self, OrbitError> {
        Ok(Self {
            client,
            relay_url: parse_url(relay_url)?,
            upstream_url: parse_url(upstream_url)?,
        })
    }

    /// Upstream SBDB URL for `query`.
    pub fn upstream_request_url(&self, query: &str) -> Url {
        let mut url = self.upstream_url.clone();
        url.query_pairs_mut().append_pair("sstr", query);
        url
    }

    /// Relay URL wrapping [`upstream_request_url`](Self::upstream_request_url).
    pub fn request_url(&self, query: &str) -> Url {
        let upstream = self.upstream_request_url(query);
        let mut url = self.relay_url.clone();
        url.query_pairs_mut().append_pair("url", upstream.as_str());
        url
    }
}

impl LookupTransport for PublicRelayTransport {
    fn label(&self) -> &str {
        "public relay"
    }

    async fn fetch(&self, query: &str) -> Result<Value, OrbitError> {
        get_json(&self.client, self.request_url(query)).await
    }
}

#[cfg(test)]
mod transport_test {
    use super::*;

    #[test]
    fn test_local_proxy_url() {
        let transport = LocalProxyTransport::new(Client::new(), "http://localhost:3001").unwrap();
        assert_eq!(
            transport.request_url("eros").unwrap().as_str(),
            "http://localhost:3001/api/asteroid/eros"
        );
        assert_eq!(
            transport.request_url("2000 aa/b").unwrap().as_str(),
            "http://localhost:3001/api/asteroid/2000%20aa%2Fb"
        );

        let nested = LocalProxyTransport::new(Client::new(), "http://host/prefix/").unwrap();
        assert_eq!(
            nested.request_url("x").unwrap().as_str(),
            "http://host/prefix/api/asteroid/x"
        );
    }

    #[test]
    fn test_relay_url_wraps_upstream() {
        let transport = PublicRelayTransport::new(
            Client::new(),
            "https://api.allorigins.win/raw",
            "https://ssd-api.jpl.nasa.gov/sbdb.api",
        )
        .unwrap();

        let upstream = transport.upstream_request_url("433");
        assert_eq!(upstream.as_str(), "https://ssd-api.jpl.nasa.gov/sbdb.api?sstr=433");

        let relay = transport.request_url("433");
        let wrapped: Vec<(String, String)> = relay
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(relay.path(), "/raw");
        assert_eq!(wrapped, vec![("url".to_string(), upstream.to_string())]);
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            LocalProxyTransport::new(Client::new(), "not a url"),
            Err(OrbitError::InvalidUrl(_))
        ));
        assert!(matches!(
            LocalProxyTransport::new(Client::new(), "mailto:someone@example.com"),
            Err(OrbitError::InvalidUrl(_))
        ));
        assert!(PublicRelayTransport::new(Client::new(), "https://relay", "::").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_proxy_is_an_error() {
        // port 9 (discard) is not expected to run an HTTP server
        let transport = LocalProxyTransport::new(Client::new(), "http://127.0.0.1:9").unwrap();
        assert!(transport.fetch("eros").await.is_err());
    }
}
