//! Column sorting.
//!
//! Sorting compares field display strings; a missing field sorts as the
//! empty string. The sort is stable in both directions.

use crate::model::Record;
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// A to Z.
    #[default]
    Ascending,
    /// Z to A.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the sorted column header.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Field and direction of the active sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field compared.
    pub field: String,
    /// Order of the comparison.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort on `field` in `direction`.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Ascending sort on `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Descending sort on `field`.
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Spec after a header click on `field`: same column flips, new column starts ascending.
    pub fn toggled(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec::new(field, spec.direction.flipped()),
            _ => SortSpec::ascending(field),
        }
    }
}

/// Stable-sort record indices by the spec.
///
/// Equal keys keep their relative input order regardless of direction.
pub fn sort_indices(records: &[Record], indices: &mut [usize], spec: &SortSpec) {
    indices.sort_by(|&a, &b| {
        let ordering = compare_by_field(&records[a], &records[b], &spec.field);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Compare two records by a field, treating missing values as `""`.
pub fn compare_by_field(left: &Record, right: &Record, field: &str) -> Ordering {
    left.text(field).as_ref().cmp(right.text(field).as_ref())
}
