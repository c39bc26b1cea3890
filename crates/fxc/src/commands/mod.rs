//! Command implementations for the fxc CLI.
//!
//! This module contains the actual command handlers that are invoked by the
//! CLI, plus the shared plumbing: snapshot loading, input resolution, and
//! the translation of filter flags into core `FilterCriteria` values.

pub mod completions;
pub mod config;
pub mod export;
pub mod list;
pub mod stats;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use filoxenia_core::filter::{
    CategoryPredicate, DateRangePredicate, FilterCriteria, SearchPredicate,
};
use filoxenia_core::models::{Booking, Payment, Property};

use crate::cli::{Cli, Kind};

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// CSV export error.
    #[error("export error: {0}")]
    Export(#[from] filoxenia_core::ExportError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// The filter flags shared by the list and export commands.
#[derive(Debug, Default, Clone)]
pub struct FilterOptions {
    /// Free-text search query.
    pub query: Option<String>,
    /// Status token ("all" or unset means no constraint).
    pub status: Option<String>,
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
}

/// Resolves the snapshot file for a kind: explicit `--input` wins, then
/// `<data_dir>/<kind>.json` from config.
pub fn resolve_input(input: Option<&Path>, kind: Kind) -> Result<PathBuf> {
    if let Some(path) = input {
        return Ok(path.to_path_buf());
    }

    let config = config::load_config().unwrap_or_default();
    let Some(data_dir) = config.data_dir else {
        return Err(CommandError::Config(format!(
            "no --input given and no data_dir configured; run `fxc config init` \
             or pass --input <file> for {}",
            kind.file_name()
        )));
    };
    Ok(data_dir.join(kind.file_name()))
}

/// Loads a JSON snapshot of entities from the data service.
pub fn load_entities<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Builds booking filter criteria from the shared flags. The date range
/// applies to the check-in date.
pub fn booking_criteria(opts: &FilterOptions) -> FilterCriteria<Booking> {
    let mut criteria = FilterCriteria::new();
    if let Some(query) = &opts.query {
        criteria = criteria.with_search(SearchPredicate::new(query, Booking::search_fields()));
    }
    criteria
        .with_category(CategoryPredicate::new(opts.status.as_deref(), |b: &Booking| {
            Some(b.status.as_str().to_string())
        }))
        .with_date_range(DateRangePredicate::new(opts.from, opts.to, |b: &Booking| {
            Some(b.check_in.clone())
        }))
}

/// Builds property filter criteria. The date range applies to the
/// registration date.
pub fn property_criteria(opts: &FilterOptions) -> FilterCriteria<Property> {
    let mut criteria = FilterCriteria::new();
    if let Some(query) = &opts.query {
        criteria = criteria.with_search(SearchPredicate::new(query, Property::search_fields()));
    }
    criteria
        .with_category(CategoryPredicate::new(opts.status.as_deref(), |p: &Property| {
            Some(p.status.as_str().to_string())
        }))
        .with_date_range(DateRangePredicate::new(opts.from, opts.to, |p: &Property| {
            Some(p.created_at.clone())
        }))
}

/// Builds payment filter criteria. The date range applies to the payment
/// date.
pub fn payment_criteria(opts: &FilterOptions) -> FilterCriteria<Payment> {
    let mut criteria = FilterCriteria::new();
    if let Some(query) = &opts.query {
        criteria = criteria.with_search(SearchPredicate::new(query, Payment::search_fields()));
    }
    criteria
        .with_category(CategoryPredicate::new(opts.status.as_deref(), |p: &Payment| {
            Some(p.status.as_str().to_string())
        }))
        .with_date_range(DateRangePredicate::new(opts.from, opts.to, |p: &Payment| {
            Some(p.paid_at.clone())
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use filoxenia_core::models::BookingStatus;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn make_booking(id: &str, guest: &str, status: BookingStatus, check_in: &str) -> Booking {
        Booking {
            id: id.to_string(),
            property_id: "pr-1".to_string(),
            property_name: "Θέα Θάλασσα".to_string(),
            guest_name: guest.to_string(),
            guest_email: None,
            guest_phone: None,
            check_in: check_in.to_string(),
            check_out: check_in.to_string(),
            guests: 2,
            status,
            channel: None,
            total_amount: 100.0,
            paid_amount: 0.0,
            currency: "EUR".to_string(),
            created_at: "2026-01-01".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_load_entities_from_snapshot() {
        let bookings = vec![make_booking(
            "bk-1",
            "Μαρία",
            BookingStatus::Confirmed,
            "2026-08-01",
        )];
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&bookings).unwrap()).unwrap();

        let loaded: Vec<Booking> = load_entities(file.path()).unwrap();
        assert_eq!(loaded, bookings);
    }

    #[test]
    fn test_load_entities_missing_file_is_io_error() {
        let result: Result<Vec<Booking>> = load_entities(Path::new("/nonexistent/bookings.json"));
        assert!(matches!(result, Err(CommandError::Io(_))));
    }

    #[test]
    fn test_booking_criteria_combines_flags() {
        let bookings = vec![
            make_booking("bk-1", "Μαρία Παπαδοπούλου", BookingStatus::Confirmed, "2026-08-01"),
            make_booking("bk-2", "Μαρία Ιωάννου", BookingStatus::Cancelled, "2026-08-02"),
            make_booking("bk-3", "John Smith", BookingStatus::Confirmed, "2026-08-03"),
        ];

        let opts = FilterOptions {
            query: Some("μαρια".to_string()),
            status: Some("confirmed".to_string()),
            from: None,
            to: None,
        };
        let criteria = booking_criteria(&opts);
        let filtered = criteria.filter_collection(&bookings);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "bk-1");
    }

    #[test]
    fn test_unset_flags_are_no_constraint() {
        let bookings = vec![
            make_booking("bk-1", "Μαρία", BookingStatus::Confirmed, "2026-08-01"),
            make_booking("bk-2", "John", BookingStatus::Cancelled, "2026-08-02"),
        ];

        let criteria = booking_criteria(&FilterOptions::default());
        assert_eq!(criteria.filter_collection(&bookings).len(), 2);

        let all = FilterOptions {
            status: Some("all".to_string()),
            ..FilterOptions::default()
        };
        assert_eq!(booking_criteria(&all).filter_collection(&bookings).len(), 2);
    }

    #[test]
    fn test_resolve_input_prefers_explicit_path() {
        let path = resolve_input(Some(Path::new("/tmp/x.json")), Kind::Bookings).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x.json"));
    }
}
