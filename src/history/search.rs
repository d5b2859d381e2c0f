//! Search functionality for query history.
//!
//! Pure filters over a slice of entries. The store reads the slot and hands
//! the decoded list to these functions.

use super::models::{HistoryItem, QueryType};

/// Searches history entries using case-insensitive substring matching.
///
/// Matches against the query text and the tag name, so `"ipv4"` finds every
/// IPv4 lookup. An empty term returns every entry. Order is preserved.
///
/// # Example
///
/// ```ignore
/// let results = search_history("example", &items);
/// ```
pub fn search_history(term: &str, items: &[HistoryItem]) -> Vec<HistoryItem> {
    if term.is_empty() {
        return items.to_vec();
    }

    let term_lower = term.to_lowercase();

    items
        .iter()
        .filter(|item| matches_term(item, &term_lower))
        .cloned()
        .collect()
}

fn matches_term(item: &HistoryItem, term_lower: &str) -> bool {
    item.query.to_lowercase().contains(term_lower)
        || item.query_type.as_str().to_lowercase().contains(term_lower)
}

/// Filters history entries by tag.
pub fn filter_by_type(query_type: QueryType, items: &[HistoryItem]) -> Vec<HistoryItem> {
    items
        .iter()
        .filter(|item| item.query_type == query_type)
        .cloned()
        .collect()
}
