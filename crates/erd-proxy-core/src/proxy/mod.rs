//! Proxy API abstraction layer.
//!
//! Defines the [`Provider`] trait and provides a blocking HTTP
//! implementation ([`ProxyProvider`]) plus a test mock
//! (`mock::MockProvider`, also built with the `mock` feature).

mod http_adapter;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use http_adapter::ProxyProvider;

use crate::error::ProxyError;
use crate::types::NetworkConfig;

/// The proxy resources this crate knows how to query.
///
/// Implementations own their transport and decoding; every call is a
/// fresh round trip with no caching.
pub trait Provider: Send + Sync {
    /// Fetch the current network configuration.
    fn get_network_config(&self) -> Result<NetworkConfig, ProxyError>;
}
