use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeBalance {
    pub address: String,
    /// Smallest chain unit (wei, lamports) as a decimal integer string.
    pub raw_balance: String,
    pub balance: String,
    pub balance_formatted: String,
    pub network: String,
    pub symbol: String,
    pub usd: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WalletBalances {
    pub base: NativeBalance,
    pub solana: NativeBalance,
    pub timestamp: DateTime<Utc>,
}
