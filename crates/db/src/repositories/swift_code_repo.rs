//! Repository for the `swift_codes` table.
//!
//! Keyed storage for registry entries: point lookup, country and
//! group-prefix scans, insert, delete, and the importer-only upsert.
//! All methods return `sqlx::Error`; mapping into the domain taxonomy
//! is the query service's concern.

use sqlx::PgPool;
use swiftreg_core::validation::NewSwiftCode;

use crate::models::swift_code::SwiftCodeRow;

/// Column list for `swift_codes` queries.
const COLUMNS: &str = "\
    id, swift_code, bank_name, address, country_iso2, country_name, \
    is_headquarter, headquarter_identifier, created_at, updated_at";

/// Insert column list shared by `insert` and `upsert`.
const INSERT_COLUMNS: &str = "\
    swift_code, bank_name, address, country_iso2, country_name, \
    is_headquarter, headquarter_identifier";

/// Provides data access for registry entries.
pub struct SwiftCodeRepo;

impl SwiftCodeRepo {
    /// Exact-match lookup by code.
    ///
    /// Matching is case-sensitive at this layer; callers uppercase the
    /// code first.
    pub async fn get_by_code(
        pool: &PgPool,
        swift_code: &str,
    ) -> Result<Option<SwiftCodeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM swift_codes WHERE swift_code = $1");
        sqlx::query_as::<_, SwiftCodeRow>(&query)
            .bind(swift_code)
            .fetch_optional(pool)
            .await
    }

    /// All entries for a country, ascending by code.
    ///
    /// A country with no entries yields an empty vec, not an error.
    pub async fn list_by_country(
        pool: &PgPool,
        country_iso2: &str,
    ) -> Result<Vec<SwiftCodeRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM swift_codes \
             WHERE country_iso2 = $1 \
             ORDER BY swift_code ASC"
        );
        sqlx::query_as::<_, SwiftCodeRow>(&query)
            .bind(country_iso2)
            .fetch_all(pool)
            .await
    }

    /// All entries sharing `group_key` except `exclude_code`, ascending
    /// by code. This is the headquarters -> branches range scan.
    pub async fn list_by_group_excluding(
        pool: &PgPool,
        group_key: &str,
        exclude_code: &str,
    ) -> Result<Vec<SwiftCodeRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM swift_codes \
             WHERE headquarter_identifier = $1 AND swift_code <> $2 \
             ORDER BY swift_code ASC"
        );
        sqlx::query_as::<_, SwiftCodeRow>(&query)
            .bind(group_key)
            .bind(exclude_code)
            .fetch_all(pool)
            .await
    }

    /// Insert a new entry.
    ///
    /// A duplicate code surfaces as the Postgres unique violation on
    /// `uq_swift_codes_swift_code`; that constraint is the sole
    /// serialization point for racing creates.
    pub async fn insert(pool: &PgPool, new: &NewSwiftCode) -> Result<SwiftCodeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO swift_codes ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SwiftCodeRow>(&query)
            .bind(&new.swift_code)
            .bind(&new.bank_name)
            .bind(&new.address)
            .bind(&new.country_iso2)
            .bind(&new.country_name)
            .bind(new.is_headquarter)
            .bind(&new.headquarter_identifier)
            .fetch_one(pool)
            .await
    }

    /// Delete by code, returning the removed row, or `None` if no entry
    /// has that key.
    pub async fn delete(
        pool: &PgPool,
        swift_code: &str,
    ) -> Result<Option<SwiftCodeRow>, sqlx::Error> {
        let query = format!("DELETE FROM swift_codes WHERE swift_code = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, SwiftCodeRow>(&query)
            .bind(swift_code)
            .fetch_optional(pool)
            .await
    }

    /// Insert-or-update keyed on `swift_code`.
    ///
    /// Used by the bulk importer so reseeding is re-runnable; not
    /// reachable from the HTTP surface.
    pub async fn upsert(pool: &PgPool, new: &NewSwiftCode) -> Result<SwiftCodeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO swift_codes ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (swift_code) DO UPDATE SET \
                 bank_name = EXCLUDED.bank_name, \
                 address = EXCLUDED.address, \
                 country_iso2 = EXCLUDED.country_iso2, \
                 country_name = EXCLUDED.country_name, \
                 is_headquarter = EXCLUDED.is_headquarter, \
                 headquarter_identifier = EXCLUDED.headquarter_identifier, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SwiftCodeRow>(&query)
            .bind(&new.swift_code)
            .bind(&new.bank_name)
            .bind(&new.address)
            .bind(&new.country_iso2)
            .bind(&new.country_name)
            .bind(new.is_headquarter)
            .bind(&new.headquarter_identifier)
            .fetch_one(pool)
            .await
    }
}
