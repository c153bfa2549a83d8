//! Offline bulk CSV importer for the SWIFT code registry.
//!
//! Reads a spreadsheet export with the columns `COUNTRY ISO2 CODE`,
//! `SWIFT CODE`, `NAME`, `ADDRESS`, `COUNTRY NAME`, normalizes each
//! row through the same validator the API uses, and upserts the valid
//! rows keyed on the code so reseeding is re-runnable. Rows that fail
//! validation are logged and skipped, never fatal.
//!
//! The CSV carries no headquarters flag; it is derived from the `XXX`
//! branch suffix.
//!
//! Usage: `swiftreg-importer <csv-path>` (or set `SWIFT_CSV_PATH`).

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swiftreg_core::swift_code;
use swiftreg_core::validation::{self, CreateSwiftCode, NewSwiftCode};
use swiftreg_db::repositories::SwiftCodeRepo;

/// A raw row from the spreadsheet export.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "COUNTRY ISO2 CODE")]
    country_iso2: String,
    #[serde(rename = "SWIFT CODE")]
    swift_code: String,
    #[serde(rename = "NAME")]
    bank_name: String,
    #[serde(rename = "ADDRESS", default)]
    address: String,
    #[serde(rename = "COUNTRY NAME")]
    country_name: String,
}

/// Normalize and validate one CSV row.
///
/// Reuses the API's create validator so both ingestion paths agree on
/// what a well-formed record is.
fn parse_row(row: CsvRow) -> Result<NewSwiftCode, String> {
    let code = swift_code::normalize_code(&row.swift_code);
    let is_headquarter = swift_code::has_headquarter_suffix(&code);

    let input = CreateSwiftCode {
        swift_code: Some(row.swift_code),
        bank_name: Some(row.bank_name),
        address: Some(row.address),
        country_iso2: Some(row.country_iso2),
        country_name: Some(row.country_name),
        is_headquarter: Some(is_headquarter),
    };

    validation::validate_create(input).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swiftreg_importer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let csv_path = match std::env::args().nth(1).or_else(|| std::env::var("SWIFT_CSV_PATH").ok()) {
        Some(path) => path,
        None => bail!("Usage: swiftreg-importer <csv-path> (or set SWIFT_CSV_PATH)"),
    };

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = swiftreg_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    swiftreg_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(path = %csv_path, "Processing CSV file");

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&csv_path)
        .with_context(|| format!("Failed to open CSV file {csv_path}"))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(line = line + 2, error = %err, "Skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        let code = row.swift_code.clone();
        match parse_row(row) {
            Ok(new) => records.push(new),
            Err(reason) => {
                tracing::warn!(line = line + 2, swift_code = %code, %reason, "Skipping invalid row");
                skipped += 1;
            }
        }
    }

    tracing::info!(valid = records.len(), skipped, "CSV file processed, seeding database");

    let mut upserted = 0usize;
    let mut failed = 0usize;

    for record in &records {
        match SwiftCodeRepo::upsert(&pool, record).await {
            Ok(_) => upserted += 1,
            Err(err) => {
                tracing::error!(swift_code = %record.swift_code, error = %err, "Failed to upsert record");
                failed += 1;
            }
        }
    }

    tracing::info!(upserted, failed, skipped, "Database seeding finished");

    pool.close().await;
    Ok(())
}
