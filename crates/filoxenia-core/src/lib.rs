//! Core logic for the filoxenia operator console.
//!
//! This crate holds the pieces of the console that are shared by every list
//! screen: locale-aware free-text search over Greek and Latin text,
//! structured filtering of entity collections, CSV export with fixed column
//! schemas, and period-over-period trend aggregation for dashboard cards.
//!
//! Everything here is a pure, synchronous transformation over collections
//! that have already been fetched from the remote data service. The crate
//! performs no I/O of its own apart from serializing an export document to
//! a `String`.

pub mod dates;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod models;

pub use export::{to_csv, Cell, Column, ExportError};
pub use filter::{
    matches, normalize, CategoryPredicate, DateRangePredicate, FilterCriteria, SearchPredicate,
};
pub use metrics::{compute_trend, Metric, Trend, TrendDirection};
