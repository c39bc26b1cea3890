//! Filter criteria types and the AND-combinator over them.

use chrono::NaiveDate;

use super::matcher::matches_normalized;
use super::normalize::normalize;
use crate::dates::parse_iso_date;

/// Sentinel category value meaning "no constraint".
///
/// The console's category dropdowns all carry an "all" option; treating it
/// here means every caller gets the same behavior for free.
pub const ALL: &str = "all";

/// Extracts one searchable/filterable field value from an entity.
///
/// Accessors are plain function pointers so criteria stay `Clone` and cheap
/// to rebuild on every change event. Returning `None` means the field is
/// absent on this record.
pub type FieldAccessor<T> = fn(&T) -> Option<String>;

/// Free-text search over one or more fields of an entity.
///
/// The query is normalized once at construction; a query that is empty (or
/// normalizes to nothing, e.g. whitespace) always passes, so an untouched
/// search box filters nothing out.
#[derive(Debug, Clone)]
pub struct SearchPredicate<T> {
    query: String,
    normalized_query: String,
    fields: Vec<FieldAccessor<T>>,
}

impl<T> SearchPredicate<T> {
    /// Creates a search predicate from a raw query and the fields to search.
    pub fn new(query: impl Into<String>, fields: Vec<FieldAccessor<T>>) -> Self {
        let query = query.into();
        let normalized_query = normalize(query.trim());
        Self {
            query,
            normalized_query,
            fields,
        }
    }

    /// The raw query as the user typed it.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when the query is empty after normalization, i.e. the predicate
    /// is a no-op.
    pub fn is_blank(&self) -> bool {
        self.normalized_query.is_empty()
    }

    /// True if the entity matches: blank query, or any searched field
    /// contains the normalized query.
    pub fn matches(&self, entity: &T) -> bool {
        if self.is_blank() {
            return true;
        }
        self.fields.iter().any(|field| {
            field(entity)
                .is_some_and(|text| matches_normalized(&text, &self.normalized_query))
        })
    }
}

/// Equality filter against an enumerated field (status, channel, method).
///
/// Unset, blank, and the [`ALL`] sentinel all mean "no constraint";
/// anything else must equal the entity's field value exactly.
#[derive(Debug, Clone)]
pub struct CategoryPredicate<T> {
    selected: Option<String>,
    field: FieldAccessor<T>,
}

impl<T> CategoryPredicate<T> {
    /// Creates a category predicate from the selected token (if any) and
    /// the field it constrains.
    pub fn new(selected: Option<&str>, field: FieldAccessor<T>) -> Self {
        let selected = selected
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ALL))
            .map(str::to_string);
        Self { selected, field }
    }

    /// True if no value is selected or the entity's field equals it.
    pub fn matches(&self, entity: &T) -> bool {
        let Some(selected) = &self.selected else {
            return true;
        };
        (self.field)(entity).is_some_and(|value| value == *selected)
    }
}

/// Inclusive date-range filter with independently optional bounds.
///
/// The entity side is a raw ISO date string parsed lazily; once either
/// bound is set, a record whose date is missing or unparseable is excluded
/// (fail closed) rather than aborting the filter pass.
#[derive(Debug, Clone)]
pub struct DateRangePredicate<T> {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    field: FieldAccessor<T>,
}

impl<T> DateRangePredicate<T> {
    /// Creates a date-range predicate over the given date field.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>, field: FieldAccessor<T>) -> Self {
        Self { from, to, field }
    }

    /// True if the entity's date falls inside the configured bounds.
    pub fn matches(&self, entity: &T) -> bool {
        if self.from.is_none() && self.to.is_none() {
            return true;
        }

        let Some(date) = (self.field)(entity).and_then(|raw| parse_iso_date(&raw)) else {
            // Fail closed: a bound is set but this record has no usable date.
            return false;
        };

        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// The full filter state of one list screen: a search slot, any number of
/// category predicates, and a date-range slot, ANDed together.
///
/// An empty criteria value matches every entity, so screens can always
/// route their collection through [`FilterCriteria::filter_collection`]
/// without special-casing "no filters active".
#[derive(Debug, Clone)]
pub struct FilterCriteria<T> {
    search: Option<SearchPredicate<T>>,
    categories: Vec<CategoryPredicate<T>>,
    date_range: Option<DateRangePredicate<T>>,
}

impl<T> Default for FilterCriteria<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FilterCriteria<T> {
    /// Creates criteria with no active predicates.
    pub fn new() -> Self {
        Self {
            search: None,
            categories: Vec::new(),
            date_range: None,
        }
    }

    /// Sets the free-text search predicate.
    pub fn with_search(mut self, search: SearchPredicate<T>) -> Self {
        self.search = Some(search);
        self
    }

    /// Adds a category predicate. May be called once per filter dropdown.
    pub fn with_category(mut self, category: CategoryPredicate<T>) -> Self {
        self.categories.push(category);
        self
    }

    /// Sets the date-range predicate.
    pub fn with_date_range(mut self, range: DateRangePredicate<T>) -> Self {
        self.date_range = Some(range);
        self
    }

    /// True iff the entity satisfies every configured predicate.
    ///
    /// Evaluation short-circuits on the first failing predicate.
    pub fn matches(&self, entity: &T) -> bool {
        if let Some(search) = &self.search {
            if !search.matches(entity) {
                return false;
            }
        }
        for category in &self.categories {
            if !category.matches(entity) {
                return false;
            }
        }
        if let Some(range) = &self.date_range {
            if !range.matches(entity) {
                return false;
            }
        }
        true
    }

    /// Filters a snapshot of the collection, preserving relative order.
    pub fn filter_collection<'a>(&self, entities: &'a [T]) -> Vec<&'a T> {
        entities.iter().filter(|entity| self.matches(entity)).collect()
    }
}
