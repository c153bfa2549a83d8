//! Route registration.

pub mod health;
pub mod swift_codes;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /codes                   create (POST)
/// /codes/{code}            lookup (GET), delete (DELETE)
/// /codes/country/{iso2}    country listing (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/codes", swift_codes::router())
}
