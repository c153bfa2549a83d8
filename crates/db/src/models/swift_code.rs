//! Row type for the `swift_codes` table.
//!
//! The insert payload is [`swiftreg_core::validation::NewSwiftCode`];
//! rows only enter the table through the validator, which derives
//! `headquarter_identifier` from the code prefix.

use serde::Serialize;
use sqlx::FromRow;
use swiftreg_core::types::{DbId, Timestamp};

/// A row from the `swift_codes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SwiftCodeRow {
    pub id: DbId,
    pub swift_code: String,
    pub bank_name: String,
    pub address: String,
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub headquarter_identifier: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
