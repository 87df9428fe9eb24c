use chrono::Utc;
use ethers::types::U256;
use log::info;
use std::sync::Arc;

use crate::{
    config::WalletConfig,
    errors::CustomError,
    models::{
        balance::{NativeBalance, WalletBalances},
        network_config::Network,
    },
    utils::format::{fixed, format_units, to_display},
};

use super::{network_config::get_network_config, sources::NativeBalanceSource};

/// Native coin balances of both monitored wallets.
#[derive(Clone)]
pub struct BalanceService {
    base: Arc<dyn NativeBalanceSource>,
    solana: Arc<dyn NativeBalanceSource>,
    wallets: WalletConfig,
}

impl BalanceService {
    pub fn new(
        base: Arc<dyn NativeBalanceSource>,
        solana: Arc<dyn NativeBalanceSource>,
        wallets: WalletConfig,
    ) -> Self {
        Self {
            base,
            solana,
            wallets,
        }
    }

    /// Either chain failing fails the whole call.
    pub async fn get_balances(&self) -> Result<WalletBalances, CustomError> {
        let (base_raw, solana_raw) = tokio::try_join!(
            self.base.native_balance(&self.wallets.base_address),
            self.solana.native_balance(&self.wallets.solana_address),
        )?;

        let base = native_balance(self.base.network(), &self.wallets.base_address, base_raw);
        let solana = native_balance(self.solana.network(), &self.wallets.solana_address, solana_raw);

        info!(
            "Balances fetched: {} {} on {}, {} {} on {}",
            base.balance, base.symbol, base.network, solana.balance, solana.symbol, solana.network
        );

        Ok(WalletBalances {
            base,
            solana,
            timestamp: Utc::now(),
        })
    }
}

fn native_balance(network: Network, address: &str, raw: U256) -> NativeBalance {
    let config = get_network_config(network);
    let display = to_display(raw, config.native_decimals);

    NativeBalance {
        address: address.to_string(),
        raw_balance: raw.to_string(),
        balance: format_units(raw, config.native_decimals),
        balance_formatted: fixed(display, 4),
        network: config.name,
        symbol: config.symbol,
        usd: fixed(display * config.usd_estimate, 2),
    }
}
