use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::{
    errors::CustomError,
    models::price::{PairsResponse, PriceQuote},
};

use super::sources::PriceSource;

/// DexScreener market data client
#[derive(Clone, Debug)]
pub struct PriceService {
    client: Client,
    base_url: String,
}

impl PriceService {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up the trading pairs for a token and keep the first one
    pub async fn get_token_quote(&self, token_address: &str) -> Result<Option<PriceQuote>, CustomError> {
        let url = format!("{}/latest/dex/tokens/{}", self.base_url, token_address);

        let response: PairsResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let quote = response
            .pairs
            .as_deref()
            .and_then(|pairs| pairs.first())
            .map(PriceQuote::from);

        if quote.is_none() {
            debug!("No trading pairs for {}", token_address);
        }

        Ok(quote)
    }
}

#[async_trait]
impl PriceSource for PriceService {
    async fn quote(&self, token_address: &str) -> Result<Option<PriceQuote>, CustomError> {
        self.get_token_quote(token_address).await
    }
}
