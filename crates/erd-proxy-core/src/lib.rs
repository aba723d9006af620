//! Client for the Elrond proxy HTTP API.
//!
//! The only resource currently exposed is `network/config`; see
//! [`proxy::Provider::get_network_config`].

pub mod error;
pub mod proxy;
pub mod types;

pub use error::ProxyError;
pub use proxy::{Provider, ProxyProvider};
pub use types::NetworkConfig;
