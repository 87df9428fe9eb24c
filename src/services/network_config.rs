use crate::models::network_config::{Network, NetworkConfig};

/// Get the static facts the dashboard needs for a chain
pub fn get_network_config(network: Network) -> NetworkConfig {
    match network {
        Network::Base => NetworkConfig {
            network,
            name: "Base Mainnet".to_string(),
            symbol: "ETH".to_string(),
            native_decimals: 18,
            usd_estimate: 2500.0,
            placeholder_symbol: "UNKNOWN".to_string(),
            placeholder_name: "Unknown Token".to_string(),
        },
        Network::Solana => NetworkConfig {
            network,
            name: "Solana Mainnet".to_string(),
            symbol: "SOL".to_string(),
            native_decimals: 9,
            usd_estimate: 150.0,
            placeholder_symbol: "SPL".to_string(),
            placeholder_name: "SPL Token".to_string(),
        },
    }
}
