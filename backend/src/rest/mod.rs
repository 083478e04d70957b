//! # REST API Interface Layer
//!
//! Provides the HTTP endpoints for the bank registry. This layer handles:
//! - JSON request/response serialization
//! - Error translation from domain errors to HTTP status codes
//! - Request logging

pub mod bank_apis;
pub mod mappers;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::error;

use crate::domain::{BankError, BankService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub bank_service: BankService,
}

impl AppState {
    /// Create new application state with the given BankService
    pub fn new(bank_service: BankService) -> Self {
        Self { bank_service }
    }
}

/// Build the bank API router (mounted under `/api` by [`create_app`])
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/banks",
            get(bank_apis::list_banks)
                .post(bank_apis::create_bank)
                .patch(bank_apis::update_bank),
        )
        .route(
            "/banks/:account_number",
            get(bank_apis::get_bank).delete(bank_apis::delete_bank),
        )
        .with_state(state)
}

/// Assemble the full application router: the bank API nested under
/// `/api` plus the health probe.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_router(state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Wrapper translating domain errors into HTTP responses.
pub struct ApiError(BankError);

impl From<BankError> for ApiError {
    fn from(error: BankError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            BankError::NotFound { .. } => StatusCode::NOT_FOUND,
            BankError::DuplicateAccountNumber { .. } | BankError::InvalidAccountNumber => {
                StatusCode::BAD_REQUEST
            }
            BankError::Storage(_) => {
                error!("Storage failure: {:?}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.0.to_string()).into_response()
    }
}
