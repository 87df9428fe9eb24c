pub mod balance_service;
pub mod blockchain_service;
pub mod network_config;
pub mod price_service;
pub mod solana_service;
pub mod sources;
pub mod token_service;

#[cfg(test)]
pub mod testing;
