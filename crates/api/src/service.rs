//! Registry query service.
//!
//! Composes the validator, the store, and the headquarters/branches
//! resolver into the four operations consumed by the HTTP layer. No
//! HTTP concepts appear here; everything returns [`CoreError`] and the
//! boundary does the status mapping.

use swiftreg_core::error::CoreError;
use swiftreg_core::swift_code;
use swiftreg_core::validation::{self, CreateSwiftCode};
use swiftreg_db::models::swift_code::SwiftCodeRow;
use swiftreg_db::repositories::SwiftCodeRepo;
use swiftreg_db::DbPool;

/// Label returned when a country has no registered codes. An empty
/// listing is a valid state, not an error.
const COUNTRY_NOT_FOUND: &str = "Country Not Found";

/// A registry entry with its branch set attached when the entry is a
/// headquarters.
///
/// `branches` is `None` for branch records so callers can distinguish
/// "branch record" from "headquarters with zero branches"; the latter
/// carries `Some(vec![])`.
#[derive(Debug, Clone)]
pub struct ResolvedSwiftCode {
    pub record: SwiftCodeRow,
    pub branches: Option<Vec<SwiftCodeRow>>,
}

/// A country listing: ISO2 code, display name, and every entry for the
/// country ascending by code.
#[derive(Debug, Clone)]
pub struct CountryCodes {
    pub country_iso2: String,
    pub country_name: String,
    pub codes: Vec<SwiftCodeRow>,
}

/// The registry's query service, built over a pool handle injected at
/// startup.
#[derive(Clone)]
pub struct SwiftCodeService {
    pool: DbPool,
}

impl SwiftCodeService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Look up a single code, case-insensitively, resolving the branch
    /// set when the entry is a headquarters.
    pub async fn get_by_code(&self, code: &str) -> Result<ResolvedSwiftCode, CoreError> {
        let code = swift_code::normalize_code(code);
        let record = SwiftCodeRepo::get_by_code(&self.pool, &code)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| CoreError::NotFound {
                entity: "SWIFT code",
                key: code,
            })?;
        self.resolve(record).await
    }

    /// List every entry for a country, ascending by code.
    ///
    /// The display country name comes from the first entry; a country
    /// with no entries gets the sentinel label.
    pub async fn list_by_country(&self, country_iso2: &str) -> Result<CountryCodes, CoreError> {
        let country_iso2 = country_iso2.trim().to_uppercase();
        let codes = SwiftCodeRepo::list_by_country(&self.pool, &country_iso2)
            .await
            .map_err(storage_error)?;
        let country_name = codes
            .first()
            .map(|row| row.country_name.clone())
            .unwrap_or_else(|| COUNTRY_NOT_FOUND.to_string());
        Ok(CountryCodes {
            country_iso2,
            country_name,
            codes,
        })
    }

    /// Validate and store a new entry.
    ///
    /// A duplicate code surfaces as [`CoreError::Conflict`]; the unique
    /// constraint in the store decides which of two racing creates wins.
    pub async fn create(&self, input: CreateSwiftCode) -> Result<SwiftCodeRow, CoreError> {
        let new = validation::validate_create(input)?;
        match SwiftCodeRepo::insert(&self.pool, &new).await {
            Ok(row) => Ok(row),
            Err(err) if is_unique_violation(&err) => Err(CoreError::Conflict(format!(
                "SWIFT code {} already exists",
                new.swift_code
            ))),
            Err(err) => Err(storage_error(err)),
        }
    }

    /// Delete an entry by code, case-insensitively.
    ///
    /// Not idempotent: a second delete of the same code observes
    /// [`CoreError::NotFound`]. Branches are never cascaded.
    pub async fn delete(&self, code: &str) -> Result<SwiftCodeRow, CoreError> {
        let code = swift_code::normalize_code(code);
        SwiftCodeRepo::delete(&self.pool, &code)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| CoreError::NotFound {
                entity: "SWIFT code",
                key: code,
            })
    }

    /// Attach the branch set to a headquarters record.
    ///
    /// Branch records pass through untouched. For a headquarters this is
    /// the one read fan-out in the system: the point lookup already
    /// happened, and one range scan fetches the group minus the record
    /// itself. The two reads are not a snapshot; a concurrent create or
    /// delete of a sibling may land between them.
    async fn resolve(&self, record: SwiftCodeRow) -> Result<ResolvedSwiftCode, CoreError> {
        if !record.is_headquarter {
            return Ok(ResolvedSwiftCode {
                record,
                branches: None,
            });
        }

        let branches = SwiftCodeRepo::list_by_group_excluding(
            &self.pool,
            &record.headquarter_identifier,
            &record.swift_code,
        )
        .await
        .map_err(storage_error)?;

        Ok(ResolvedSwiftCode {
            record,
            branches: Some(branches),
        })
    }
}

/// Postgres unique violation (23505) on one of this schema's `uq_`
/// constraints.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_"))
        }
        _ => false,
    }
}

/// Log a storage failure with full detail and fold it into the domain
/// taxonomy; the boundary returns only a generic message to callers.
fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Storage error");
    CoreError::Internal(err.to_string())
}
