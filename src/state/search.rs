//! Record search.
//!
//! Case-insensitive substring matching over a configurable set of candidate
//! fields. A record matches when any candidate field contains the query.

use crate::model::{fields, Record};
use serde::Deserialize;

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            let lowered = raw.to_lowercase();
            Some(Self { raw, lowered })
        }
    }

    /// The term as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Query folded for case-insensitive comparison.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }
}

// ===== SearchScope =====

/// Which fields a search looks at.
///
/// The two policies are exclusive; a deployment picks one through config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// The record id plus every displayable field.
    #[default]
    AllFields,
    /// Only the listed fields.
    Fields(Vec<String>),
}

impl SearchScope {
    /// Country, certifier name and status.
    pub fn restricted() -> Self {
        SearchScope::Fields(vec![
            fields::COUNTRY.to_string(),
            fields::CERTIFIED_BY_NAME.to_string(),
            fields::STATUS.to_string(),
        ])
    }
}

/// Config-file spelling of [`SearchScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchScopeSetting {
    /// Search every field.
    All,
    /// Search country, certifier and status.
    Restricted,
}

impl From<SearchScopeSetting> for SearchScope {
    fn from(setting: SearchScopeSetting) -> Self {
        match setting {
            SearchScopeSetting::All => SearchScope::AllFields,
            SearchScopeSetting::Restricted => SearchScope::restricted(),
        }
    }
}

// ===== Matching =====

/// Whether a record matches the query within the given scope.
pub fn record_matches(record: &Record, query: &SearchQuery, scope: &SearchScope) -> bool {
    let needle = query.lowered();
    match scope {
        SearchScope::AllFields => {
            record.id().as_str().to_lowercase().contains(needle)
                || record
                    .display_fields()
                    .any(|(_, text)| text.to_lowercase().contains(needle))
        }
        SearchScope::Fields(names) => names
            .iter()
            .any(|name| record.text(name).to_lowercase().contains(needle)),
    }
}

/// Indices of the records that match, in input order.
///
/// With no query every index is returned.
pub fn filter_indices(
    records: &[Record],
    query: Option<&SearchQuery>,
    scope: &SearchScope,
) -> Vec<usize> {
    match query {
        None => (0..records.len()).collect(),
        Some(query) => records
            .iter()
            .enumerate()
            .filter(|(_, record)| record_matches(record, query, scope))
            .map(|(index, _)| index)
            .collect(),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
