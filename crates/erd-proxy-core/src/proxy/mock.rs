use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::ProxyError;
use crate::types::NetworkConfig;

use super::Provider;

/// A mock proxy backend for testing. Returns a canned network config, or a
/// canned failure, populated via the builder pattern.
pub struct MockProvider {
    config: NetworkConfig,
    failure: Option<(String, String)>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn builder() -> MockProviderBuilder {
        MockProviderBuilder {
            config: NetworkConfig {
                chain_id: "local-testnet".into(),
                gas_per_data_byte: 1500,
                min_gas_limit: 50_000,
                min_gas_price: 1_000_000_000,
                min_transaction_version: 1,
            },
            failure: None,
        }
    }

    /// Number of `get_network_config` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

pub struct MockProviderBuilder {
    config: NetworkConfig,
    failure: Option<(String, String)>,
}

impl MockProviderBuilder {
    pub fn with_config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }

    /// Make every call fail as if the proxy answered with `code`/`message`.
    pub fn with_server_error(mut self, code: &str, message: &str) -> Self {
        self.failure = Some((code.to_owned(), message.to_owned()));
        self
    }

    pub fn build(self) -> MockProvider {
        MockProvider {
            config: self.config,
            failure: self.failure,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Provider for MockProvider {
    fn get_network_config(&self) -> Result<NetworkConfig, ProxyError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.failure {
            Some((code, message)) => Err(ProxyError::Server {
                status: 200,
                code: code.clone(),
                message: message.clone(),
            }),
            None => Ok(self.config.clone()),
        }
    }
}
