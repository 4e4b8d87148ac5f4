//! Record sources (the fetch collaborator).
//!
//! This module provides the [`RecordSource`] boundary and its implementations:
//! - JSON file loading, re-read on every fetch so refresh sees edits
//! - Static in-memory records for embedding and tests

use crate::model::{FetchError, Record};

pub mod file;

pub use file::JsonFileSource;

/// Fetch collaborator delivering the full record set.
///
/// Called once at startup and again on every explicit refresh.
pub trait RecordSource {
    /// Fetch every record visible to the current user.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the backend cannot deliver a record list.
    fn fetch(&mut self) -> Result<Vec<Record>, FetchError>;
}

/// In-memory record source returning the same records on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    /// Source returning `records` on every fetch.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Replace the records returned by subsequent fetches.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }
}

impl RecordSource for StaticSource {
    fn fetch(&mut self) -> Result<Vec<Record>, FetchError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;

    #[test]
    fn static_source_returns_configured_records() {
        let record = Record::new(RecordId::new("a1").unwrap());
        let mut source = StaticSource::new(vec![record.clone()]);

        assert_eq!(source.fetch().unwrap(), vec![record]);
    }

    #[test]
    fn static_source_sees_replaced_records() {
        let mut source = StaticSource::default();
        assert!(source.fetch().unwrap().is_empty());

        source.set_records(vec![Record::new(RecordId::new("a2").unwrap())]);

        assert_eq!(source.fetch().unwrap().len(), 1);
    }
}
