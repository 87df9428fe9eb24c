use serde::{Deserialize, Serialize};

/// Chains the dashboard knows how to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Base,
    Solana,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub network: Network,
    pub name: String,
    pub symbol: String,
    pub native_decimals: u8,
    /// Rough USD price of the native coin. Not live-priced.
    pub usd_estimate: f64,
    pub placeholder_symbol: String,
    pub placeholder_name: String,
}
