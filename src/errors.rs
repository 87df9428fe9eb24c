use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use ethers::providers::ProviderError;
use thiserror::Error;

use crate::models::api_response::ErrorResponse;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Provider error: {0}")]
    ProviderError(#[from] ProviderError),

    #[error("Provider error: {0}")]
    StringifiedProviderError(String),

    #[error("RPC error {code}: {message}")]
    RpcError { code: i64, message: String },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid address: {0}")]
    InvalidAddressError(String),

    #[error("Invalid response: {0}")]
    InvalidResponseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// Every failure surfaces as a 500 carrying the message; callers get no
// structured error codes.
impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
