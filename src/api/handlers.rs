use actix_web::{get, web, HttpResponse};
use log::{error, info};

use crate::{errors::CustomError, models::api_response::HealthResponse};

use super::AppState;

#[get("/balances")]
pub async fn get_balances(state: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    info!("Fetching wallet balances...");

    let balances = state.balances.get_balances().await.map_err(|e| {
        error!("Error fetching balances: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(balances))
}

#[get("/tokens")]
pub async fn get_tokens(state: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    info!("Fetching token holdings...");

    let portfolio = state.tokens.get_portfolio().await.map_err(|e| {
        error!("Error fetching tokens: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(portfolio))
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}
