//! Row-to-entity parsing helpers.
//!
//! Lists and maps are stored as JSON text; datetimes as RFC 3339 or
//! `SQLite`'s `datetime('now')` format.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

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

/// Parse a TEXT column holding a JSON array into a typed list.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not a JSON array of `T`.
pub fn parse_json_list<T: DeserializeOwned>(s: &str) -> Result<Vec<T>, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid JSON list in column: {e}")))
}

/// Parse a TEXT column holding a JSON object.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not a JSON object.
pub fn parse_json_object(s: &str) -> Result<Map<String, Value>, DatabaseError> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(DatabaseError::Query(format!(
            "Expected JSON object in column, found {other}"
        ))),
        Err(e) => Err(DatabaseError::Query(format!("Invalid JSON in column: {e}"))),
    }
}

/// Serialize a value for storage in a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String, DatabaseError> {
    serde_json::to_string(value).map_err(|e| DatabaseError::Other(e.into()))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}
