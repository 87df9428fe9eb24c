use serde::Deserialize;

/// `GET /latest/dex/tokens/{address}` body. `pairs` is `null` for unknown tokens.
#[derive(Debug, Default, Deserialize)]
pub struct PairsResponse {
    #[serde(default)]
    pub pairs: Option<Vec<Pair>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub price_change: Option<PriceChange>,
    #[serde(default)]
    pub base_token: Option<PairToken>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PriceChange {
    #[serde(default)]
    pub h24: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PairToken {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// What the dashboard keeps from the first trading pair of a lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceQuote {
    pub price_usd: f64,
    pub price_change_24h: f64,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl From<&Pair> for PriceQuote {
    fn from(pair: &Pair) -> Self {
        let price_usd = pair
            .price_usd
            .as_deref()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .filter(|p| p.is_finite() && *p >= 0.0)
            .unwrap_or(0.0);

        let price_change_24h = pair
            .price_change
            .as_ref()
            .and_then(|c| c.h24)
            .filter(|c| c.is_finite())
            .unwrap_or(0.0);

        let (symbol, name) = match &pair.base_token {
            Some(token) => (non_empty(&token.symbol), non_empty(&token.name)),
            None => (None, None),
        };

        Self {
            price_usd,
            price_change_24h,
            symbol,
            name,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
