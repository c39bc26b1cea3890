//! Locale-aware search and structured filtering for entity collections.
//!
//! Every list screen in the console combines the same three filter
//! dimensions, ANDed together:
//!
//! - a free-text search that must match Greek text regardless of accent
//!   marks or letter case,
//! - categorical selections (status, channel, payment method) where the
//!   `"all"` sentinel or an unset value means "no constraint",
//! - an inclusive date range with independently optional bounds.
//!
//! The criteria are plain immutable values built per keystroke/change event
//! and applied to a snapshot of the collection; filtering is stable (input
//! order is preserved) and side-effect free.
//!
//! # Example
//!
//! ```
//! use filoxenia_core::filter::{FilterCriteria, SearchPredicate};
//!
//! struct Listing {
//!     name: String,
//! }
//!
//! let listings = vec![
//!     Listing { name: "Άγιος Νικόλαος".to_string() },
//!     Listing { name: "Athens Center".to_string() },
//! ];
//!
//! let criteria = FilterCriteria::new()
//!     .with_search(SearchPredicate::new("αγιο", vec![|l: &Listing| Some(l.name.clone())]));
//!
//! let hits = criteria.filter_collection(&listings);
//! assert_eq!(hits.len(), 1);
//! ```

mod criteria;
mod matcher;
mod normalize;

pub use criteria::{
    CategoryPredicate, DateRangePredicate, FieldAccessor, FilterCriteria, SearchPredicate, ALL,
};
pub use matcher::{matches, matches_any};
pub use normalize::normalize;
