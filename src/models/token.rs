use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::network_config::Network;

/// A token balance as reported by a chain, before pricing.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscoveredToken {
    pub address: String,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub decimals: Option<u8>,
    pub logo: Option<String>,
    /// Display units.
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub balance: f64,
    pub decimals: Option<u8>,
    pub network: Network,
    pub logo: Option<String>,
    pub price: f64,
    pub value: f64,
    pub price_change_24h: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPortfolio {
    pub tokens: Vec<TokenHolding>,
    pub total_value: f64,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}
