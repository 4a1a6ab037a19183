//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all plenario-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse an optional TEXT column into an optional enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string does not match any variant.
pub fn parse_optional_enum<T: serde::de::DeserializeOwned>(
    s: Option<&str>,
) -> Result<Option<T>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_enum(s)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER column stored as 0/1 into `bool`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Narrow an INTEGER column to `u32` (positions, session numbers).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value is negative or too large.
pub fn to_u32(v: i64) -> Result<u32, DatabaseError> {
    u32::try_from(v).map_err(|_| DatabaseError::Query(format!("Value out of range for u32: {v}")))
}

/// Narrow an INTEGER column to `u8` (seat counts).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value is negative or too large.
pub fn to_u8(v: i64) -> Result<u8, DatabaseError> {
    u8::try_from(v).map_err(|_| DatabaseError::Query(format!("Value out of range for u8: {v}")))
}

/// Extract an optional JSON value from a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string contains invalid JSON.
pub fn parse_optional_json(s: Option<&str>) -> Result<Option<serde_json::Value>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => {
            let val = serde_json::from_str(s)
                .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column: {e}")))?;
            Ok(Some(val))
        }
        _ => Ok(None),
    }
}

/// Map `EntityType` to the corresponding SQL table name.
///
/// Uses exhaustive match — adding a new `EntityType` variant forces updating this.
#[must_use]
pub const fn entity_type_to_table(entity: &plenario_core::enums::EntityType) -> &'static str {
    use plenario_core::enums::EntityType;
    match entity {
        EntityType::Agent => "agents",
        EntityType::Councilor => "councilors",
        EntityType::Committee => "committees",
        EntityType::Board => "boards",
        EntityType::Session => "sessions",
        EntityType::AgendaItem => "agenda_items",
        EntityType::Minutes => "minutes",
        EntityType::Document => "documents",
        EntityType::Opinion => "opinions",
        EntityType::User => "users",
        EntityType::Audit => "audit_trail",
    }
}
