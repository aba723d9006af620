//! Wire shapes of the `network/config` resource and their mapping onto
//! [`NetworkConfig`].
//!
//! The serde renames below are the single place where `erd_*` wire keys are
//! paired with public field names. Every field is read as `Option` so that an
//! absent or `null` key surfaces as [`ProxyError::MissingField`] naming the
//! wire key, instead of a default value.

use serde::Deserialize;

use crate::error::ProxyError;
use crate::types::NetworkConfig;

#[derive(Deserialize)]
pub(super) struct ConfigWrapper {
    pub(super) config: Option<ConfigPayload>,
}

#[derive(Deserialize)]
pub(super) struct ConfigPayload {
    #[serde(rename = "erd_chain_id")]
    chain_id: Option<String>,
    #[serde(rename = "erd_gas_per_data_byte")]
    gas_per_data_byte: Option<u32>,
    #[serde(rename = "erd_min_gas_limit")]
    min_gas_limit: Option<u64>,
    #[serde(rename = "erd_min_gas_price")]
    min_gas_price: Option<u64>,
    #[serde(rename = "erd_min_transaction_version")]
    min_transaction_version: Option<u32>,
}

impl ConfigWrapper {
    pub(super) fn into_network_config(self) -> Result<NetworkConfig, ProxyError> {
        self.config
            .ok_or(ProxyError::MissingField("data.config"))?
            .try_into()
    }
}

impl TryFrom<ConfigPayload> for NetworkConfig {
    type Error = ProxyError;

    fn try_from(payload: ConfigPayload) -> Result<Self, Self::Error> {
        Ok(NetworkConfig {
            chain_id: required(payload.chain_id, "erd_chain_id")?,
            gas_per_data_byte: required(payload.gas_per_data_byte, "erd_gas_per_data_byte")?,
            min_gas_limit: required(payload.min_gas_limit, "erd_min_gas_limit")?,
            min_gas_price: required(payload.min_gas_price, "erd_min_gas_price")?,
            min_transaction_version: required(
                payload.min_transaction_version,
                "erd_min_transaction_version",
            )?,
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ProxyError> {
    value.ok_or(ProxyError::MissingField(field))
}
