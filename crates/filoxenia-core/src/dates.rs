//! Lenient parsing of entity date fields.
//!
//! The remote data service sends dates as ISO-8601 strings, sometimes as a
//! plain date and sometimes as a full timestamp. Entities keep the raw
//! string; parsing happens lazily wherever a real date is needed so that a
//! corrupt record degrades at that point instead of failing the whole
//! collection up front.

use chrono::NaiveDate;

/// Parses an entity date field.
///
/// Accepts `YYYY-MM-DD` as well as a full RFC 3339 timestamp, in which case
/// only the date part is used. Returns `None` for anything unparseable.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
