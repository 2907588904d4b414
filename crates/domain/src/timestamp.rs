//! Timestamp parsing and formatting.
//!
//! Expiry timestamps are exchanged in `Y-m-d H:i:s` form (second
//! resolution, UTC); RFC 3339 input is accepted as a fallback.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{DomainError, DomainResult};

/// The canonical timestamp layout.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp in canonical or RFC 3339 form.
///
/// Canonical input carries no offset and is interpreted as UTC.
///
/// # Errors
/// Returns [`DomainError::InvalidTimestamp`] if the input matches neither
/// layout.
pub fn parse_timestamp(input: &str) -> DomainResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT) {
        return Ok(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(input)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidTimestamp(input.to_string()))
}

/// Format a timestamp in the canonical layout.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
