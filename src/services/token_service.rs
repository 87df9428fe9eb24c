use chrono::Utc;
use futures::future::join_all;
use log::{debug, info, warn};
use std::{cmp::Ordering, sync::Arc};

use crate::{
    config::WalletConfig,
    errors::CustomError,
    models::{
        network_config::NetworkConfig,
        token::{DiscoveredToken, TokenHolding, TokenPortfolio},
    },
    utils::format::is_dust,
};

use super::{
    network_config::get_network_config,
    sources::{PriceSource, TokenBalanceSource},
};

/// Priced token holdings across both monitored wallets.
#[derive(Clone)]
pub struct TokenService {
    base: Arc<dyn TokenBalanceSource>,
    solana: Arc<dyn TokenBalanceSource>,
    prices: Arc<dyn PriceSource>,
    wallets: WalletConfig,
}

impl TokenService {
    pub fn new(
        base: Arc<dyn TokenBalanceSource>,
        solana: Arc<dyn TokenBalanceSource>,
        prices: Arc<dyn PriceSource>,
        wallets: WalletConfig,
    ) -> Self {
        Self {
            base,
            solana,
            prices,
            wallets,
        }
    }

    pub async fn get_portfolio(&self) -> Result<TokenPortfolio, CustomError> {
        let (base, solana) = tokio::join!(
            discover(self.base.as_ref(), &self.wallets.base_address),
            discover(self.solana.as_ref(), &self.wallets.solana_address),
        );

        let holdings = base.into_iter().chain(solana);
        let mut tokens = join_all(holdings.map(|holding| self.enrich(holding))).await;

        // sort_by is stable, so equal values keep discovery order
        tokens.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

        let total_value: f64 = tokens.iter().map(|t| t.value).sum();
        info!("Portfolio: {} tokens worth ${:.2}", tokens.len(), total_value);

        Ok(TokenPortfolio {
            count: tokens.len(),
            total_value,
            tokens,
            timestamp: Utc::now(),
        })
    }

    /// Price one holding. Any lookup problem zeroes the price instead of
    /// dropping the holding.
    async fn enrich(&self, mut holding: TokenHolding) -> TokenHolding {
        match self.prices.quote(&holding.address).await {
            Ok(Some(quote)) => {
                holding.price = quote.price_usd;
                holding.value = holding.balance * quote.price_usd;
                holding.price_change_24h = quote.price_change_24h;
                if let Some(symbol) = quote.symbol {
                    holding.symbol = symbol;
                }
                if let Some(name) = quote.name {
                    holding.name = name;
                }
            }
            Ok(None) => {
                debug!("No price for {} ({})", holding.symbol, holding.address);
                clear_price(&mut holding);
            }
            Err(e) => {
                warn!("Error fetching price for {}: {}", holding.address, e);
                clear_price(&mut holding);
            }
        }
        holding
    }
}

/// One chain's non-dust holdings. A failing chain contributes nothing.
async fn discover(source: &dyn TokenBalanceSource, owner: &str) -> Vec<TokenHolding> {
    let config = get_network_config(source.network());

    match source.token_balances(owner).await {
        Ok(tokens) => {
            let holdings: Vec<TokenHolding> = tokens
                .into_iter()
                .filter(|token| !is_dust(token.balance))
                .map(|token| to_holding(token, &config))
                .collect();
            info!("{}: {} token holdings above dust", config.name, holdings.len());
            holdings
        }
        Err(e) => {
            warn!("Error fetching {} tokens: {}", config.name, e);
            Vec::new()
        }
    }
}

fn to_holding(token: DiscoveredToken, config: &NetworkConfig) -> TokenHolding {
    TokenHolding {
        address: token.address,
        symbol: token
            .symbol
            .unwrap_or_else(|| config.placeholder_symbol.clone()),
        name: token.name.unwrap_or_else(|| config.placeholder_name.clone()),
        balance: token.balance,
        decimals: token.decimals,
        network: config.network,
        logo: token.logo,
        price: 0.0,
        value: 0.0,
        price_change_24h: 0.0,
    }
}

fn clear_price(holding: &mut TokenHolding) {
    holding.price = 0.0;
    holding.value = 0.0;
    holding.price_change_24h = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{network_config::Network, price::PriceQuote},
        services::testing::{discovered, FakePriceSource, FakeTokenSource},
    };

    fn service(base: FakeTokenSource, solana: FakeTokenSource, prices: FakePriceSource) -> TokenService {
        TokenService::new(
            Arc::new(base),
            Arc::new(solana),
            Arc::new(prices),
            WalletConfig::default(),
        )
    }

    #[tokio::test]
    async fn pair_metadata_replaces_discovered_names() {
        let service = service(
            FakeTokenSource::ok(Network::Base, vec![discovered("0xaaa", Some("OLD"), 10.0)]),
            FakeTokenSource::ok(Network::Solana, vec![]),
            FakePriceSource::default().with_quote(
                "0xaaa",
                PriceQuote {
                    price_usd: 1.5,
                    price_change_24h: 4.2,
                    symbol: Some("NEW".to_string()),
                    name: Some("New Token".to_string()),
                },
            ),
        );

        let portfolio = service.get_portfolio().await.unwrap();
        let token = &portfolio.tokens[0];

        assert_eq!(token.price, 1.5);
        assert_eq!(token.value, 15.0);
        assert_eq!(token.price_change_24h, 4.2);
        assert_eq!(token.symbol, "NEW");
        assert_eq!(token.name, "New Token");
        assert_eq!(token.network, Network::Base);
    }

    #[tokio::test]
    async fn no_pairs_or_failed_lookup_zeroes_price_but_keeps_token() {
        let service = service(
            FakeTokenSource::ok(
                Network::Base,
                vec![
                    discovered("0xnopairs", Some("AAA"), 10.0),
                    discovered("0xbroken", Some("BBB"), 5.0),
                ],
            ),
            FakeTokenSource::ok(Network::Solana, vec![]),
            FakePriceSource::default().with_failure("0xbroken", "503 Service Unavailable"),
        );

        let portfolio = service.get_portfolio().await.unwrap();

        assert_eq!(portfolio.count, 2);
        for token in &portfolio.tokens {
            assert_eq!(token.price, 0.0);
            assert_eq!(token.value, 0.0);
            assert_eq!(token.price_change_24h, 0.0);
        }
        assert_eq!(portfolio.tokens[0].symbol, "AAA");
        assert_eq!(portfolio.tokens[0].name, "AAA Token");
        assert_eq!(portfolio.tokens[1].symbol, "BBB");
        assert_eq!(portfolio.total_value, 0.0);
    }

    #[tokio::test]
    async fn one_failed_lookup_does_not_affect_others() {
        let service = service(
            FakeTokenSource::ok(
                Network::Base,
                vec![
                    discovered("0xbroken", Some("BBB"), 5.0),
                    discovered("0xgood", Some("GGG"), 2.0),
                ],
            ),
            FakeTokenSource::ok(Network::Solana, vec![]),
            FakePriceSource::default()
                .with_failure("0xbroken", "timeout")
                .with_price("0xgood", 3.0, -1.0),
        );

        let portfolio = service.get_portfolio().await.unwrap();

        assert_eq!(portfolio.tokens[0].address, "0xgood");
        assert_eq!(portfolio.tokens[0].value, 6.0);
        assert_eq!(portfolio.tokens[1].address, "0xbroken");
        assert_eq!(portfolio.tokens[1].value, 0.0);
    }

    #[tokio::test]
    async fn dust_is_excluded() {
        let service = service(
            FakeTokenSource::ok(
                Network::Base,
                vec![
                    discovered("0xdust", Some("D"), 1e-6),
                    discovered("0xtiny", Some("T"), 2e-6),
                    discovered("0xneg", Some("N"), -5.0),
                ],
            ),
            FakeTokenSource::ok(Network::Solana, vec![discovered("mintdust", None, 5e-7)]),
            FakePriceSource::default(),
        );

        let portfolio = service.get_portfolio().await.unwrap();

        assert_eq!(portfolio.count, 1);
        assert_eq!(portfolio.tokens[0].address, "0xtiny");
        assert!(portfolio.tokens.iter().all(|t| t.balance > 1e-6));
    }

    #[tokio::test]
    async fn sorted_by_value_and_stable_on_ties() {
        let service = service(
            FakeTokenSource::ok(
                Network::Base,
                vec![
                    discovered("0x1", Some("ONE"), 1.0),
                    discovered("0x2", Some("TWO"), 1.0),
                    discovered("0x3", Some("THREE"), 1.0),
                ],
            ),
            FakeTokenSource::ok(
                Network::Solana,
                vec![discovered("mint4", None, 1.0), discovered("mint5", None, 1.0)],
            ),
            FakePriceSource::default()
                .with_price("0x1", 2.0, 0.0)
                .with_price("0x2", 7.0, 0.0)
                .with_price("0x3", 2.0, 0.0)
                .with_price("mint5", 2.0, 0.0),
        );

        let portfolio = service.get_portfolio().await.unwrap();
        let order: Vec<&str> = portfolio.tokens.iter().map(|t| t.address.as_str()).collect();

        assert_eq!(order, vec!["0x2", "0x1", "0x3", "mint5", "mint4"]);
        assert!(portfolio
            .tokens
            .windows(2)
            .all(|pair| pair[0].value >= pair[1].value));
    }

    #[tokio::test]
    async fn total_is_sum_of_listed_values() {
        let service = service(
            FakeTokenSource::ok(
                Network::Base,
                vec![
                    discovered("0x1", Some("A"), 0.1),
                    discovered("0x2", Some("B"), 0.2),
                ],
            ),
            FakeTokenSource::ok(Network::Solana, vec![discovered("mint", None, 3.3)]),
            FakePriceSource::default()
                .with_price("0x1", 1.1, 0.0)
                .with_price("0x2", 2.2, 0.0)
                .with_price("mint", 0.7, 0.0),
        );

        let portfolio = service.get_portfolio().await.unwrap();
        let expected: f64 = portfolio.tokens.iter().map(|t| t.value).sum();

        assert_eq!(portfolio.total_value, expected);
        assert_eq!(portfolio.count, portfolio.tokens.len());
    }

    #[tokio::test]
    async fn failing_chain_leaves_other_chain_intact() {
        let base_down = service(
            FakeTokenSource::failing(Network::Base, "alchemy unavailable"),
            FakeTokenSource::ok(Network::Solana, vec![discovered("mint", None, 4.0)]),
            FakePriceSource::default(),
        );
        let portfolio = base_down.get_portfolio().await.unwrap();
        assert_eq!(portfolio.count, 1);
        assert_eq!(portfolio.tokens[0].network, Network::Solana);

        let solana_down = service(
            FakeTokenSource::ok(Network::Base, vec![discovered("0x1", Some("A"), 4.0)]),
            FakeTokenSource::failing(Network::Solana, "rpc unavailable"),
            FakePriceSource::default(),
        );
        let portfolio = solana_down.get_portfolio().await.unwrap();
        assert_eq!(portfolio.count, 1);
        assert_eq!(portfolio.tokens[0].network, Network::Base);
    }

    #[tokio::test]
    async fn placeholders_fill_missing_names() {
        let mut unnamed = discovered("0xfff", None, 1.0);
        unnamed.decimals = None;

        let service = service(
            FakeTokenSource::ok(Network::Base, vec![unnamed]),
            FakeTokenSource::ok(Network::Solana, vec![discovered("mint", None, 2.0)]),
            FakePriceSource::default(),
        );

        let portfolio = service.get_portfolio().await.unwrap();
        let base = portfolio.tokens.iter().find(|t| t.address == "0xfff").unwrap();
        let solana = portfolio.tokens.iter().find(|t| t.address == "mint").unwrap();

        assert_eq!(base.symbol, "UNKNOWN");
        assert_eq!(base.name, "Unknown Token");
        assert_eq!(solana.symbol, "SPL");
        assert_eq!(solana.name, "SPL Token");
        assert_eq!(solana.logo, None);
    }

    #[tokio::test]
    async fn serializes_to_dashboard_shape() {
        let service = service(
            FakeTokenSource::ok(Network::Base, vec![]),
            FakeTokenSource::ok(Network::Solana, vec![discovered("mint", None, 2.0)]),
            FakePriceSource::default().with_price("mint", 0.5, 1.25),
        );

        let portfolio = service.get_portfolio().await.unwrap();
        let json = serde_json::to_value(&portfolio).unwrap();

        assert_eq!(json["count"], 1);
        assert_eq!(json["total_value"], 1.0);
        assert_eq!(json["tokens"][0]["network"], "solana");
        assert_eq!(json["tokens"][0]["priceChange24h"], 1.25);
        assert_eq!(json["tokens"][0]["symbol"], "SPL");
        assert!(json["tokens"][0]["logo"].is_null());
        assert!(json["timestamp"].is_string());
    }
}
