//! # REST API for Bank Management
//!
//! Endpoints for creating, retrieving, updating, and deleting banks.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use shared::Bank as BankDto;

use super::mappers::bank_mapper::BankMapper;
use super::{ApiError, AppState};

/// List all banks
pub async fn list_banks(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/banks");

    let banks = state.bank_service.list_banks()?;

    Ok((StatusCode::OK, Json(BankMapper::to_dto_list(banks))))
}

/// Get a bank by account number
pub async fn get_bank(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/banks/{}", account_number);

    let bank = state.bank_service.get_bank(&account_number)?;

    Ok((StatusCode::OK, Json(BankMapper::to_dto(bank))))
}

/// Create a new bank
pub async fn create_bank(
    State(state): State<AppState>,
    Json(request): Json<BankDto>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/banks - request: {:?}", request);

    let created = state.bank_service.create_bank(BankMapper::to_domain(request))?;

    Ok((StatusCode::CREATED, Json(BankMapper::to_dto(created))))
}

/// Update an existing bank in full
pub async fn update_bank(
    State(state): State<AppState>,
    Json(request): Json<BankDto>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PATCH /api/banks - request: {:?}", request);

    let updated = state.bank_service.update_bank(BankMapper::to_domain(request))?;

    Ok((StatusCode::OK, Json(BankMapper::to_dto(updated))))
}

/// Delete a bank by account number
pub async fn delete_bank(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/banks/{}", account_number);

    state.bank_service.delete_bank(&account_number)?;

    Ok(StatusCode::NO_CONTENT)
}
