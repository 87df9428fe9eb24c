use actix_web::web;

use crate::services::{balance_service::BalanceService, token_service::TokenService};

mod handlers;

/// Shared by every worker; holds no mutable state.
pub struct AppState {
    pub balances: BalanceService,
    pub tokens: TokenService,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::get_balances)
            .service(handlers::get_tokens),
    )
    .service(handlers::health);
}
