//! Row selection.
//!
//! An ordered, duplicate-free set of record identifiers. Selection is
//! independent of search and paging: rows stay selected while hidden.

use crate::model::RecordId;

/// Selected record identifiers in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<RecordId>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection, dropping duplicates (first occurrence wins).
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.ids.clear();
        for id in ids {
            self.insert(id);
        }
    }

    /// Add an id. Returns false if it was already selected.
    pub fn insert(&mut self, id: RecordId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Toggle an id. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> RecordId {
        RecordId::new(raw).unwrap()
    }

    #[test]
    fn replace_drops_duplicates_keeping_first_order() {
        let mut selection = Selection::new();

        selection.replace([id("b"), id("a"), id("b")]);

        assert_eq!(selection.ids(), &[id("b"), id("a")]);
    }

    #[test]
    fn replace_discards_previous_selection() {
        let mut selection = Selection::new();
        selection.insert(id("old"));

        selection.replace([id("new")]);

        assert!(!selection.contains(&id("old")));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();

        assert!(selection.toggle(&id("a")));
        assert!(selection.contains(&id("a")));
        assert!(!selection.toggle(&id("a")));
        assert!(selection.is_empty());
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut selection = Selection::new();

        assert!(selection.insert(id("a")));
        assert!(!selection.insert(id("a")));
        assert_eq!(selection.len(), 1);
    }
}
