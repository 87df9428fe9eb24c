use async_trait::async_trait;
use ethers::types::U256;
use log::{debug, info};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

use crate::{
    errors::CustomError,
    models::{network_config::Network, token::DiscoveredToken},
};

use super::sources::{NativeBalanceSource, TokenBalanceSource};

/// SPL Token program. Token-2022 accounts are not listed.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
struct KeyedAccount {
    pubkey: String,
    account: AccountInfo,
}

#[derive(Debug, Deserialize)]
struct AccountInfo {
    data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedTokenInfo {
    mint: String,
    token_amount: UiTokenAmount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UiTokenAmount {
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    decimals: Option<u8>,
    #[serde(default)]
    ui_amount: Option<f64>,
    #[serde(default)]
    ui_amount_string: Option<String>,
}

impl UiTokenAmount {
    fn ui_amount(&self) -> f64 {
        if let Some(amount) = self.ui_amount {
            return amount;
        }
        if let Some(amount) = self.ui_amount_string.as_deref().and_then(|s| s.parse().ok()) {
            return amount;
        }
        match (self.amount.as_deref().and_then(|a| a.parse::<f64>().ok()), self.decimals) {
            (Some(raw), Some(decimals)) => raw / 10f64.powi(decimals as i32),
            _ => 0.0,
        }
    }
}

/// Solana JSON-RPC client
#[derive(Clone, Debug)]
pub struct SolanaClient {
    client: Client,
    rpc_url: String,
}

impl SolanaClient {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.to_string(),
        }
    }

    async fn rpc_call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, CustomError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response: RpcResponse<T> = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (response.result, response.error) {
            (_, Some(error)) => Err(CustomError::RpcError {
                code: error.code,
                message: error.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(CustomError::InvalidResponseError(format!(
                "{} returned neither result nor error",
                method
            ))),
        }
    }

    /// Get SOL balance in lamports
    pub async fn get_balance(&self, owner: &str) -> Result<u64, CustomError> {
        let balance: WithContext<u64> = self.rpc_call("getBalance", json!([owner])).await?;
        Ok(balance.value)
    }

    /// Get SPL token accounts owned by the wallet
    pub async fn get_token_accounts(&self, owner: &str) -> Result<Vec<DiscoveredToken>, CustomError> {
        let accounts: WithContext<Vec<KeyedAccount>> = self
            .rpc_call(
                "getTokenAccountsByOwner",
                json!([owner, { "programId": TOKEN_PROGRAM_ID }, { "encoding": "jsonParsed" }]),
            )
            .await?;

        let mut tokens = Vec::new();

        for keyed in accounts.value {
            let info = match keyed.account.data.pointer("/parsed/info") {
                Some(info) => info.clone(),
                None => {
                    debug!("Token account {} has no parsed data", keyed.pubkey);
                    continue;
                }
            };

            let info: ParsedTokenInfo = match serde_json::from_value(info) {
                Ok(info) => info,
                Err(e) => {
                    debug!("Unreadable token account {}: {}", keyed.pubkey, e);
                    continue;
                }
            };

            let balance = info.token_amount.ui_amount();
            if balance <= 0.0 {
                continue;
            }

            tokens.push(DiscoveredToken {
                address: info.mint,
                symbol: None,
                name: None,
                decimals: info.token_amount.decimals,
                logo: None,
                balance,
            });
        }

        info!("Found {} Solana token accounts with non-zero balance", tokens.len());
        Ok(tokens)
    }
}

#[async_trait]
impl NativeBalanceSource for SolanaClient {
    fn network(&self) -> Network {
        Network::Solana
    }

    async fn native_balance(&self, address: &str) -> Result<U256, CustomError> {
        Ok(U256::from(self.get_balance(address).await?))
    }
}

#[async_trait]
impl TokenBalanceSource for SolanaClient {
    fn network(&self) -> Network {
        Network::Solana
    }

    async fn token_balances(&self, owner: &str) -> Result<Vec<DiscoveredToken>, CustomError> {
        self.get_token_accounts(owner).await
    }
}
