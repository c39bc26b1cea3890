//! Substring matching over normalized text.

use super::normalize::normalize;

/// Returns true if the normalized query is a contiguous substring of the
/// normalized field text.
///
/// An empty field or an empty query is an explicit non-match, never an
/// error. "Empty query means no filter" is a [`FilterCriteria`] concern,
/// handled before this function is reached.
///
/// [`FilterCriteria`]: super::FilterCriteria
pub fn matches(field_text: &str, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    matches_normalized(field_text, &normalize(query))
}

/// Returns true if any of the candidate field values matches the query.
///
/// Used for screens that search several fields at once (title, description,
/// tags); the OR happens here, the AND with other filter dimensions happens
/// at the criteria level.
pub fn matches_any<'a, I>(fields: I, query: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return false;
    }
    let normalized_query = normalize(query);
    fields
        .into_iter()
        .any(|field| matches_normalized(field, &normalized_query))
}

/// Matching against an already-normalized query, so criteria can normalize
/// the query once per filter pass instead of once per entity.
pub(crate) fn matches_normalized(field_text: &str, normalized_query: &str) -> bool {
    if field_text.is_empty() || normalized_query.is_empty() {
        return false;
    }
    normalize(field_text).contains(normalized_query)
}
