//! Deterministic sources for exercising the aggregators without a network.

use async_trait::async_trait;
use ethers::types::U256;
use std::collections::HashMap;

use crate::{
    errors::CustomError,
    models::{network_config::Network, price::PriceQuote, token::DiscoveredToken},
};

use super::sources::{NativeBalanceSource, PriceSource, TokenBalanceSource};

pub struct FakeNativeSource {
    pub network: Network,
    pub result: Result<U256, String>,
}

impl FakeNativeSource {
    pub fn ok(network: Network, raw: &str) -> Self {
        Self {
            network,
            result: Ok(U256::from_dec_str(raw).unwrap()),
        }
    }

    pub fn failing(network: Network, message: &str) -> Self {
        Self {
            network,
            result: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl NativeBalanceSource for FakeNativeSource {
    fn network(&self) -> Network {
        self.network
    }

    async fn native_balance(&self, _address: &str) -> Result<U256, CustomError> {
        self.result
            .clone()
            .map_err(CustomError::StringifiedProviderError)
    }
}

pub struct FakeTokenSource {
    pub network: Network,
    pub result: Result<Vec<DiscoveredToken>, String>,
}

impl FakeTokenSource {
    pub fn ok(network: Network, tokens: Vec<DiscoveredToken>) -> Self {
        Self {
            network,
            result: Ok(tokens),
        }
    }

    pub fn failing(network: Network, message: &str) -> Self {
        Self {
            network,
            result: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl TokenBalanceSource for FakeTokenSource {
    fn network(&self) -> Network {
        self.network
    }

    async fn token_balances(&self, _owner: &str) -> Result<Vec<DiscoveredToken>, CustomError> {
        self.result
            .clone()
            .map_err(CustomError::StringifiedProviderError)
    }
}

/// Unknown addresses have no trading pairs.
#[derive(Default)]
pub struct FakePriceSource {
    pub quotes: HashMap<String, Result<PriceQuote, String>>,
}

impl FakePriceSource {
    pub fn with_price(mut self, address: &str, price_usd: f64, change: f64) -> Self {
        self.quotes.insert(
            address.to_string(),
            Ok(PriceQuote {
                price_usd,
                price_change_24h: change,
                symbol: None,
                name: None,
            }),
        );
        self
    }

    pub fn with_quote(mut self, address: &str, quote: PriceQuote) -> Self {
        self.quotes.insert(address.to_string(), Ok(quote));
        self
    }

    pub fn with_failure(mut self, address: &str, message: &str) -> Self {
        self.quotes.insert(address.to_string(), Err(message.to_string()));
        self
    }
}

#[async_trait]
impl PriceSource for FakePriceSource {
    async fn quote(&self, token_address: &str) -> Result<Option<PriceQuote>, CustomError> {
        match self.quotes.get(token_address) {
            Some(Ok(quote)) => Ok(Some(quote.clone())),
            Some(Err(message)) => Err(CustomError::InvalidResponseError(message.clone())),
            None => Ok(None),
        }
    }
}

pub fn discovered(address: &str, symbol: Option<&str>, balance: f64) -> DiscoveredToken {
    DiscoveredToken {
        address: address.to_string(),
        symbol: symbol.map(str::to_string),
        name: symbol.map(|s| format!("{} Token", s)),
        decimals: Some(18),
        logo: None,
        balance,
    }
}
