use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::{io, path::Path, sync::Arc};

mod api;
mod config;
mod errors;
mod models;
mod services;
mod utils;

use api::AppState;
use services::{
    balance_service::BalanceService, blockchain_service::BlockchainClient,
    price_service::PriceService, solana_service::SolanaClient, token_service::TokenService,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().map_err(to_io_error)?;

    let base = Arc::new(BlockchainClient::new(&config.base_rpc_url).map_err(to_io_error)?);
    let solana = Arc::new(SolanaClient::new(&config.solana_rpc_url));
    let prices = Arc::new(PriceService::new(&config.price_api_url));

    let state = web::Data::new(AppState {
        balances: BalanceService::new(base.clone(), solana.clone(), config.wallets.clone()),
        tokens: TokenService::new(base, solana, prices, config.wallets.clone()),
    });

    let static_dir = config.static_dir.clone();
    let serve_static = Path::new(&static_dir).is_dir();
    if !serve_static {
        warn!("Static directory {} not found, serving API only", static_dir);
    }

    info!("Wallet Dashboard running on {}:{}", config.host, config.port);
    info!("Monitoring:");
    info!("   Base: {}", config.wallets.base_address);
    info!("   Solana: {}", config.wallets.solana_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header();

        let app = App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(api::config);

        // Registered last so it never shadows an API route
        if serve_static {
            app.service(actix_files::Files::new("/", &static_dir).index_file("index.html"))
        } else {
            app
        }
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn to_io_error(e: errors::CustomError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}
