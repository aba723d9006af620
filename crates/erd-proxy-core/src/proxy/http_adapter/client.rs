use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::ProxyError;
use crate::types::NetworkConfig;

use super::super::Provider;
use super::connection::{parse_base_url, resource_url};
use super::payload::ConfigWrapper;
use super::protocol::decode_response;

const NETWORK_CONFIG_RESOURCE: &str = "network/config";

/// Blocking client for an Elrond proxy over HTTP(S).
///
/// Holds no per-call state: the same instance can serve concurrent callers,
/// which then share the underlying connection pool. Every call performs a
/// full round trip; nothing is cached and nothing is retried.
pub struct ProxyProvider {
    client: Client,
    base_url: String,
}

impl ProxyProvider {
    /// Create a provider for `url` with a default blocking HTTP client.
    ///
    /// `url` must be an `http://` or `https://` URL; a trailing `/` is
    /// ignored.
    pub fn new(url: &str) -> Result<Self, ProxyError> {
        let client = Client::builder().build().map_err(ProxyError::Transport)?;
        Self::with_client(url, client)
    }

    /// Create a provider that issues its requests through `client`.
    pub fn with_client(url: &str, client: Client) -> Result<Self, ProxyError> {
        let base_url = parse_base_url(url)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn do_get<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ProxyError> {
        let url = resource_url(&self.base_url, resource);
        debug!(proxy.url = %url, "proxy request");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ProxyError::Transport)?;
        let status = response.status();

        let body = response.text().map_err(ProxyError::Transport)?;
        debug!(proxy.url = %url, %status, body_len = body.len(), "proxy response");
        trace!(proxy.url = %url, body = %body, "proxy response body");

        decode_response(status, &body)
    }
}

impl Provider for ProxyProvider {
    fn get_network_config(&self) -> Result<NetworkConfig, ProxyError> {
        let wrapper: ConfigWrapper = self.do_get(NETWORK_CONFIG_RESOURCE)?;
        wrapper.into_network_config()
    }
}
