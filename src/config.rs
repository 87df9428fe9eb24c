use std::env;

use crate::errors::CustomError;

pub const BASE_ADDRESS: &str = "0x75f39d9Bff76d376F3960028d98F324aAbB6c5e6";
pub const SOLANA_ADDRESS: &str = "FeB1jqjCFKyQ2vVTPLgYmZu1yLvBWhsGoudP46fhhF8z";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BASE_RPC_URL: &str = "https://mainnet.base.org";
const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
const DEFAULT_PRICE_API_URL: &str = "https://api.dexscreener.com";

/// The pair of wallets the dashboard reports on.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletConfig {
    pub base_address: String,
    pub solana_address: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            base_address: BASE_ADDRESS.to_string(),
            solana_address: SOLANA_ADDRESS.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub base_rpc_url: String,
    pub solana_rpc_url: String,
    pub price_api_url: String,
    pub static_dir: String,
    pub wallets: WalletConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup so tests
    /// don't have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| CustomError::ConfigError(format!("Failed to parse PORT: {}", raw)))?,
            None => DEFAULT_PORT,
        };

        let base_rpc_url = match (lookup("BASE_RPC_URL"), lookup("ALCHEMY_KEY")) {
            (Some(url), _) => url,
            (None, Some(key)) if !key.is_empty() => {
                format!("https://base-mainnet.g.alchemy.com/v2/{}", key)
            }
            _ => DEFAULT_BASE_RPC_URL.to_string(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            base_rpc_url,
            solana_rpc_url: lookup("SOLANA_RPC_URL")
                .unwrap_or_else(|| DEFAULT_SOLANA_RPC_URL.to_string()),
            price_api_url: lookup("PRICE_API_URL")
                .unwrap_or_else(|| DEFAULT_PRICE_API_URL.to_string()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            wallets: WalletConfig::default(),
        })
    }
}
