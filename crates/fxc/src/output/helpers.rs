//! Common helper functions for output formatting.

use filoxenia_core::dates::parse_iso_date;

/// Truncates a string to a maximum number of characters.
///
/// Character-based so Greek text is never cut inside a UTF-8 sequence.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

/// Formats a raw ISO date for display as a Greek short date.
///
/// Unparseable values come back as-is; display never fails on a corrupt
/// record.
pub fn format_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Formats an amount with its currency code.
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}
