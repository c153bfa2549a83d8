//! Handlers for the SWIFT code registry endpoints.
//!
//! The handlers are a thin boundary: path parameters are checked for
//! shape, bodies are deserialized, and everything else is delegated to
//! the query service. Code and country inputs are case-insensitive
//! here; the core is only ever called with uppercase values.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use swiftreg_core::validation::CreateSwiftCode;

use crate::error::{AppError, AppResult};
use crate::response::{CountryCodesResponse, MessageResponse, SwiftCodeResponse};
use crate::state::AppState;

/// GET /v1/codes/{code}
///
/// Retrieve a single entry; headquarters entries carry their branch
/// array (possibly empty), branch entries carry no `branches` field.
pub async fn get_swift_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let resolved = state.service.get_by_code(&code).await?;
    Ok(Json(SwiftCodeResponse::from(resolved)))
}

/// GET /v1/codes/country/{iso2}
///
/// List every entry for a country. The path parameter must be exactly
/// two alphabetic characters (case-insensitive); anything else is a 400
/// before the core is consulted.
pub async fn get_codes_for_country(
    State(state): State<AppState>,
    Path(country_iso2): Path<String>,
) -> AppResult<impl IntoResponse> {
    if country_iso2.len() != 2 || !country_iso2.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(
            "Invalid Country ISO2 code format. Must be 2 letters.".to_string(),
        ));
    }

    let listing = state.service.list_by_country(&country_iso2).await?;
    Ok(Json(CountryCodesResponse::from(listing)))
}

/// POST /v1/codes
///
/// Create a new entry. Validation failures answer 400 with per-field
/// details; a duplicate code answers 409.
pub async fn create_swift_code(
    State(state): State<AppState>,
    payload: Result<Json<CreateSwiftCode>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload
        .map_err(|rejection| AppError::BadRequest(format!("Invalid request body: {rejection}")))?;

    let created = state.service.create(input).await?;

    tracing::info!(
        swift_code = %created.swift_code,
        country_iso2 = %created.country_iso2,
        is_headquarter = created.is_headquarter,
        "SWIFT code created",
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("SWIFT code {} created successfully.", created.swift_code),
        }),
    ))
}

/// DELETE /v1/codes/{code}
///
/// Delete an entry. Not idempotent: a second delete answers 404.
/// Branches of a deleted headquarters are left untouched.
pub async fn delete_swift_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.service.delete(&code).await?;

    tracing::info!(swift_code = %deleted.swift_code, "SWIFT code deleted");

    Ok(Json(MessageResponse {
        message: format!("SWIFT code {} deleted successfully.", deleted.swift_code),
    }))
}
