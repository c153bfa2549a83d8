//! HTTP-level integration tests for the `/v1/codes` endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router. Entries are created through the API itself so every scenario
//! exercises the full validate -> store -> resolve path.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn entry(swift_code: &str, is_headquarter: bool) -> serde_json::Value {
    json!({
        "swiftCode": swift_code,
        "bankName": format!("{swift_code} Bank"),
        "address": "1 Bank Street",
        "countryISO2": "PL",
        "countryName": "Poland",
        "isHeadquarter": is_headquarter,
    })
}

async fn create(app: &axum::Router, body: serde_json::Value) {
    let response = post_json(app.clone(), "/v1/codes", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Test: create then fetch, with normalization of casing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_get_returns_normalized_record(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/v1/codes",
        json!({
            "swiftCode": "posttestxxx",
            "bankName": "Post Test Bank",
            "countryISO2": "fr",
            "countryName": "france",
            "isHeadquarter": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "SWIFT code POSTTESTXXX created successfully.");

    // Lookup is case-insensitive on input.
    let response = get(app.clone(), "/v1/codes/posttestxxx").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["swiftCode"], "POSTTESTXXX");
    assert_eq!(json["countryISO2"], "FR");
    assert_eq!(json["countryName"], "FRANCE");
    assert_eq!(json["isHeadquarter"], true);
    // Absent address maps to "".
    assert_eq!(json["address"], "");
    // A headquarters with no branches carries an explicit empty array.
    assert_eq!(json["branches"], json!([]));
}

// ---------------------------------------------------------------------------
// Test: headquarters lookup resolves branches, ascending by code
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn headquarters_lookup_lists_branches_ascending(pool: PgPool) {
    let app = build_test_app(pool);

    create(&app, entry("BANKPLPWXXX", true)).await;
    // Created out of order; the response must be sorted.
    create(&app, entry("BANKPLPWZZZ", false)).await;
    create(&app, entry("BANKPLPWABC", false)).await;
    // A different group in the same country must not appear.
    create(&app, entry("OTHRPLPWXXX", true)).await;

    let response = get(app.clone(), "/v1/codes/BANKPLPWXXX").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let branches = json["branches"].as_array().expect("branches must be present");
    let codes: Vec<_> = branches.iter().map(|b| b["swiftCode"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["BANKPLPWABC", "BANKPLPWZZZ"]);
}

// ---------------------------------------------------------------------------
// Test: branch lookup carries no branches field at all
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn branch_lookup_has_no_branches_field(pool: PgPool) {
    let app = build_test_app(pool);

    create(&app, entry("BANKPLPWXXX", true)).await;
    create(&app, entry("BANKPLPWABC", false)).await;

    let response = get(app.clone(), "/v1/codes/BANKPLPWABC").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["swiftCode"], "BANKPLPWABC");
    assert!(
        json.get("branches").is_none(),
        "a branch record must not carry a branches field"
    );
}

// ---------------------------------------------------------------------------
// Test: unknown code returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_code_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/v1/codes/NOPEUS33XXX").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: country listing is scoped, sorted, and case-insensitive
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn country_listing_is_sorted_and_uppercased(pool: PgPool) {
    let app = build_test_app(pool);

    create(&app, entry("ZBNKPLPWXXX", true)).await;
    create(&app, entry("ABNKPLPWXXX", true)).await;

    let response = get(app.clone(), "/v1/codes/country/pl").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["countryISO2"], "PL");
    assert_eq!(json["countryName"], "POLAND");

    let codes: Vec<_> = json["codes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["swiftCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["ABNKPLPWXXX", "ZBNKPLPWXXX"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn country_with_no_codes_gets_sentinel_name(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/v1/codes/country/ZZ").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["countryISO2"], "ZZ");
    assert_eq!(json["countryName"], "Country Not Found");
    assert_eq!(json["codes"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_country_param_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    for bad in ["USA", "U1", "1A"] {
        let response = get(app.clone(), &format!("/v1/codes/country/{bad}")).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "expected 400 for iso2 param {bad:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Test: duplicate create conflicts regardless of other fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_create_returns_409(pool: PgPool) {
    let app = build_test_app(pool);

    create(&app, entry("BANKPLPWXXX", true)).await;

    let mut second = entry("BANKPLPWXXX", false);
    second["bankName"] = json!("Someone Else Entirely");
    let response = post_json(app.clone(), "/v1/codes", second).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: validation failure reports every violated field
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_create_reports_all_violations(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/v1/codes",
        json!({
            "swiftCode": "BAD",
            "bankName": "",
            "countryISO2": "USA",
            "countryName": "",
            "isHeadquarter": true,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields: Vec<_> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap().to_string())
        .collect();
    for expected in ["swiftCode", "bankName", "countryISO2", "countryName"] {
        assert!(
            fields.contains(&expected.to_string()),
            "missing violation for {expected}"
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_json_body_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/v1/codes", json!("not an object")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: delete succeeds once, then 404s
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_succeeds_then_404s(pool: PgPool) {
    let app = build_test_app(pool);

    create(&app, entry("BANKPLPWXXX", true)).await;

    // Case-insensitive on input.
    let response = delete(app.clone(), "/v1/codes/bankplpwxxx").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "SWIFT code BANKPLPWXXX deleted successfully.");

    let response = delete(app.clone(), "/v1/codes/BANKPLPWXXX").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: deleting a headquarters leaves its branches in place
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_headquarters_does_not_cascade(pool: PgPool) {
    let app = build_test_app(pool);

    create(&app, entry("BANKPLPWXXX", true)).await;
    create(&app, entry("BANKPLPWABC", false)).await;

    let response = delete(app.clone(), "/v1/codes/BANKPLPWXXX").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app.clone(), "/v1/codes/BANKPLPWABC").await;
    assert_eq!(response.status(), StatusCode::OK);
}
