//! Public domain types returned by the proxy client.

use serde::Serialize;

// ==============================================================================
// Network Config
// ==============================================================================

/// Network-wide parameters served by the proxy's `network/config` resource.
///
/// Serializes with the proxy client's public field names (`chainID`,
/// `gasPerDataByte`, ...), not the `erd_*` wire keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub gas_per_data_byte: u32,
    pub min_gas_limit: u64,
    pub min_gas_price: u64,
    pub min_transaction_version: u32,
}
