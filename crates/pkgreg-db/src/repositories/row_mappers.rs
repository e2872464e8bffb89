//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use pkgreg_core::{Package, RepositoryError, Version};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for package queries.
pub const PACKAGE_SELECT_COLUMNS: &str = "id, name, user_id, created_at, updated_at, downloads";

/// Shared SELECT column list for version queries.
pub const VERSION_SELECT_COLUMNS: &str =
    "id, package_id, num, created_at, updated_at, downloads";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Current time in the stored timestamp format.
///
/// The format sorts lexically in time order.
pub fn now_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Helper to parse datetime strings that may have "UTC" suffix.
pub fn parse_datetime(datetime_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = datetime_str.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .ok()
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let raw: String = row.try_get(column).map_err(storage)?;
    parse_datetime(&raw)
        .ok_or_else(|| RepositoryError::Storage(format!("invalid {column} timestamp: {raw}")))
}

/// Parse a database row into a Package.
pub fn row_to_package(row: &SqliteRow) -> Result<Package, RepositoryError> {
    Ok(Package {
        id: row.try_get("id").map_err(storage)?,
        name: row.try_get("name").map_err(storage)?,
        user_id: row.try_get("user_id").map_err(storage)?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
        downloads: row.try_get("downloads").map_err(storage)?,
    })
}

/// Parse a database row into a Version.
pub fn row_to_version(row: &SqliteRow) -> Result<Version, RepositoryError> {
    Ok(Version {
        id: row.try_get("id").map_err(storage)?,
        package_id: row.try_get("package_id").map_err(storage)?,
        num: row.try_get("num").map_err(storage)?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
        downloads: row.try_get("downloads").map_err(storage)?,
    })
}
