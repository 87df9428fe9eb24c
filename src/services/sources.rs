use async_trait::async_trait;
use ethers::types::U256;

use crate::{
    errors::CustomError,
    models::{network_config::Network, price::PriceQuote, token::DiscoveredToken},
};

/// Reads the balance of a chain's base currency.
#[async_trait]
pub trait NativeBalanceSource: Send + Sync {
    fn network(&self) -> Network;

    /// Balance in the chain's smallest unit (wei, lamports).
    async fn native_balance(&self, address: &str) -> Result<U256, CustomError>;
}

/// Lists the fungible tokens an address holds on one chain.
#[async_trait]
pub trait TokenBalanceSource: Send + Sync {
    fn network(&self) -> Network;

    async fn token_balances(&self, owner: &str) -> Result<Vec<DiscoveredToken>, CustomError>;
}

/// Market data keyed by token contract or mint address.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// `Ok(None)` when the market knows no trading pair for the token.
    async fn quote(&self, token_address: &str) -> Result<Option<PriceQuote>, CustomError>;
}
