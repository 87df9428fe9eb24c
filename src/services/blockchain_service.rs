use async_trait::async_trait;
use ethers::{
    core::types::{Address, U256},
    providers::{Http, Middleware, Provider},
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::Arc};

use crate::{
    errors::CustomError,
    models::{network_config::Network, token::DiscoveredToken},
    utils::format::to_display,
};

use super::sources::{NativeBalanceSource, TokenBalanceSource};

/// Decimals assumed when token metadata doesn't say.
const DEFAULT_TOKEN_DECIMALS: u8 = 18;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBalancesResult {
    #[serde(default)]
    token_balances: Vec<TokenBalanceEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBalanceEntry {
    contract_address: String,
    #[serde(default)]
    token_balance: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TokenMetadata {
    #[serde(default)]
    decimals: Option<u8>,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
}

/// Client for the Base (EVM) chain. Token discovery relies on the Alchemy
/// `alchemy_getTokenBalances` and `alchemy_getTokenMetadata` extensions.
#[derive(Clone, Debug)]
pub struct BlockchainClient {
    provider: Arc<Provider<Http>>,
}

impl BlockchainClient {
    pub fn new(rpc_url: &str) -> Result<Self, CustomError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| CustomError::ConfigError(format!("Invalid Base RPC URL {}: {}", rpc_url, e)))?;

        Ok(Self {
            provider: Arc::new(provider),
        })
    }

    fn parse_address(address: &str) -> Result<Address, CustomError> {
        Address::from_str(address).map_err(|_| CustomError::InvalidAddressError(address.to_string()))
    }

    /// Get native ETH balance in wei
    pub async fn get_native_balance(&self, wallet_address: &str) -> Result<U256, CustomError> {
        let address = Self::parse_address(wallet_address)?;
        Ok(self.provider.get_balance(address, None).await?)
    }

    async fn get_token_metadata(&self, contract_address: &str) -> Result<TokenMetadata, CustomError> {
        let metadata = self
            .provider
            .request::<_, Option<TokenMetadata>>("alchemy_getTokenMetadata", [contract_address])
            .await?;
        Ok(metadata.unwrap_or_default())
    }

    /// Get every ERC20 balance held by the wallet, with metadata
    pub async fn get_token_balances(
        &self,
        wallet_address: &str,
    ) -> Result<Vec<DiscoveredToken>, CustomError> {
        Self::parse_address(wallet_address)?;

        let result: TokenBalancesResult = self
            .provider
            .request("alchemy_getTokenBalances", (wallet_address, "erc20"))
            .await?;

        let mut tokens = Vec::new();

        for entry in result.token_balances {
            if let Some(error) = &entry.error {
                debug!("Skipping token {}: {}", entry.contract_address, error);
                continue;
            }

            let raw = match entry.token_balance.as_deref().and_then(parse_hex_amount) {
                Some(raw) if !raw.is_zero() => raw,
                _ => continue,
            };

            // A metadata failure only costs this token its names
            let metadata = match self.get_token_metadata(&entry.contract_address).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Error fetching metadata for token {}: {}", entry.contract_address, e);
                    TokenMetadata::default()
                }
            };

            let decimals = metadata.decimals.unwrap_or(DEFAULT_TOKEN_DECIMALS);

            tokens.push(DiscoveredToken {
                address: entry.contract_address,
                symbol: metadata.symbol,
                name: metadata.name,
                decimals: Some(decimals),
                logo: metadata.logo,
                balance: to_display(raw, decimals),
            });
        }

        info!("Found {} Base tokens with non-zero balance", tokens.len());
        Ok(tokens)
    }
}

/// Parse a `0x`-prefixed hex quantity. An empty quantity is zero.
fn parse_hex_amount(value: &str) -> Option<U256> {
    let digits = value.trim().trim_start_matches("0x");
    if digits.is_empty() {
        return Some(U256::zero());
    }
    U256::from_str_radix(digits, 16).ok()
}

#[async_trait]
impl NativeBalanceSource for BlockchainClient {
    fn network(&self) -> Network {
        Network::Base
    }

    async fn native_balance(&self, address: &str) -> Result<U256, CustomError> {
        self.get_native_balance(address).await
    }
}

#[async_trait]
impl TokenBalanceSource for BlockchainClient {
    fn network(&self) -> Network {
        Network::Base
    }

    async fn token_balances(&self, owner: &str) -> Result<Vec<DiscoveredToken>, CustomError> {
        self.get_token_balances(owner).await
    }
}
