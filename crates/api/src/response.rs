//! Typed response payloads for the registry API.
//!
//! All record fields serialize camelCase (`countryISO2` is renamed
//! explicitly); `branches` appears only on headquarters lookups. Use
//! these instead of ad-hoc `serde_json::json!` so the wire shape is
//! checked at compile time.

use serde::Serialize;
use swiftreg_db::models::swift_code::SwiftCodeRow;

use crate::service::{CountryCodes, ResolvedSwiftCode};

/// A single registry entry as it appears inside listings and branch
/// arrays: the full record shape minus `branches`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiftCodeItem {
    pub address: String,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub swift_code: String,
}

impl From<SwiftCodeRow> for SwiftCodeItem {
    fn from(row: SwiftCodeRow) -> Self {
        Self {
            address: row.address,
            bank_name: row.bank_name,
            country_iso2: row.country_iso2,
            country_name: row.country_name,
            is_headquarter: row.is_headquarter,
            swift_code: row.swift_code,
        }
    }
}

/// Response for a single-code lookup. `branches` is present (possibly
/// empty) iff the entry is a headquarters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiftCodeResponse {
    pub address: String,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub swift_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<SwiftCodeItem>>,
}

impl From<ResolvedSwiftCode> for SwiftCodeResponse {
    fn from(resolved: ResolvedSwiftCode) -> Self {
        let row = resolved.record;
        Self {
            address: row.address,
            bank_name: row.bank_name,
            country_iso2: row.country_iso2,
            country_name: row.country_name,
            is_headquarter: row.is_headquarter,
            swift_code: row.swift_code,
            branches: resolved
                .branches
                .map(|rows| rows.into_iter().map(SwiftCodeItem::from).collect()),
        }
    }
}

/// Response for a country listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCodesResponse {
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub codes: Vec<SwiftCodeItem>,
}

impl From<CountryCodes> for CountryCodesResponse {
    fn from(listing: CountryCodes) -> Self {
        Self {
            country_iso2: listing.country_iso2,
            country_name: listing.country_name,
            codes: listing
                .codes
                .into_iter()
                .map(SwiftCodeItem::from)
                .collect(),
        }
    }
}

/// Standard `{ "message": ... }` payload for create and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
