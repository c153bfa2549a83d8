//! Route definitions for the SWIFT code registry, mounted at `/codes`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::swift_codes;
use crate::state::AppState;

/// ```text
/// POST   /                  -> create_swift_code
/// GET    /country/{iso2}    -> get_codes_for_country
/// GET    /{code}            -> get_swift_code
/// DELETE /{code}            -> delete_swift_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(swift_codes::create_swift_code))
        .route("/country/{country_iso2}", get(swift_codes::get_codes_for_country))
        .route(
            "/{swift_code}",
            get(swift_codes::get_swift_code).delete(swift_codes::delete_swift_code),
        )
}
