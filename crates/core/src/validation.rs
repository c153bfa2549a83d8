//! Input validation for registry entry creation.
//!
//! [`validate_create`] normalizes raw caller input and collects every
//! violated constraint (not just the first) into a single
//! [`CoreError::Validation`]. It is a pure transformation and never
//! touches the store.

use serde::Deserialize;

use crate::error::{CoreError, FieldViolation};
use crate::swift_code;

/// Raw input for creating a registry entry, as supplied by the caller.
///
/// Every field is optional at the deserialization layer so that missing
/// fields surface as per-field violations instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSwiftCode {
    pub swift_code: Option<String>,
    pub bank_name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "countryISO2")]
    pub country_iso2: Option<String>,
    pub country_name: Option<String>,
    pub is_headquarter: Option<bool>,
}

/// A normalized, validated record candidate ready for insertion.
///
/// `headquarter_identifier` is derived here from the code prefix; it is
/// never taken from the caller.
#[derive(Debug, Clone)]
pub struct NewSwiftCode {
    pub swift_code: String,
    pub bank_name: String,
    pub address: String,
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub headquarter_identifier: String,
}

/// Normalize and validate raw input into a [`NewSwiftCode`].
///
/// Normalization: `swiftCode`, `countryISO2`, and `countryName` are
/// trimmed and uppercased; `bankName` is trimmed; an absent or empty
/// `address` becomes `""`. The `isHeadquarter` flag is taken as
/// supplied; there is no cross-check against the code suffix.
pub fn validate_create(input: CreateSwiftCode) -> Result<NewSwiftCode, CoreError> {
    let code = input
        .swift_code
        .as_deref()
        .map(swift_code::normalize_code)
        .unwrap_or_default();
    let bank_name = input.bank_name.as_deref().unwrap_or("").trim().to_string();
    let address = input.address.as_deref().unwrap_or("").trim().to_string();
    let country_iso2 = input
        .country_iso2
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_uppercase();
    let country_name = input
        .country_name
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_uppercase();

    let mut violations = Vec::new();

    if code.is_empty() {
        violations.push(FieldViolation::new("swiftCode", "SWIFT code is required"));
    } else {
        if !(8..=11).contains(&code.len()) {
            violations.push(FieldViolation::new(
                "swiftCode",
                "SWIFT code must be 8 to 11 characters",
            ));
        }
        if !swift_code::SWIFT_CODE_RE.is_match(&code) {
            violations.push(FieldViolation::new("swiftCode", "Invalid SWIFT code format"));
        }
    }

    if bank_name.is_empty() {
        violations.push(FieldViolation::new("bankName", "Bank name cannot be empty"));
    }

    if !swift_code::COUNTRY_ISO2_RE.is_match(&country_iso2) {
        violations.push(FieldViolation::new(
            "countryISO2",
            "Country ISO2 must be 2 letters",
        ));
    }

    if country_name.is_empty() {
        violations.push(FieldViolation::new(
            "countryName",
            "Country name cannot be empty",
        ));
    }

    let Some(is_headquarter) = input.is_headquarter else {
        violations.push(FieldViolation::new(
            "isHeadquarter",
            "isHeadquarter flag is required",
        ));
        return Err(CoreError::Validation(violations));
    };

    if !violations.is_empty() {
        return Err(CoreError::Validation(violations));
    }

    let headquarter_identifier = swift_code::group_key(&code);

    Ok(NewSwiftCode {
        swift_code: code,
        bank_name,
        address,
        country_iso2,
        country_name,
        is_headquarter,
        headquarter_identifier,
    })
}
