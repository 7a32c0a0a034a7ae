//! Pure filter engine over the loaded catalog.
//!
//! The controller never calls [`filter`] with an empty [`FilterState`]:
//! both-fields-empty means "show the home view", not "match everything".
//! That short-circuit lives in the controller; the engine itself is total
//! and an empty result is a normal outcome, not an error.

use super::types::Item;

/// The combination of current search term and selected category.
///
/// Transient: rebuilt from the current control state on every filtering
/// action, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text term, matched case-insensitively as a substring of an
    /// item's name or description. Whitespace-only counts as empty.
    pub search: String,
    /// Category identifier, matched exactly (identifiers are not user-typed).
    pub category: Option<String>,
}

impl FilterState {
    /// True when neither a search term nor a category is active.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.category.is_none()
    }
}

/// Compute the subset of `catalog` matching `state`.
///
/// Both predicates are conjunctive: an active category keeps only items
/// whose `category` equals it exactly; an active search term keeps only
/// items whose lowercased name or description contains the lowercased term.
pub fn filter(catalog: &[Item], state: &FilterState) -> Vec<Item> {
    let term = state.search.trim().to_lowercase();

    catalog
        .iter()
        .filter(|item| {
            let category_ok = match &state.category {
                Some(id) => item.category == *id,
                None => true,
            };
            let search_ok = term.is_empty()
                || item.name.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term);
            category_ok && search_ok
        })
        .cloned()
        .collect()
}
