//! JSON file record source.
//!
//! Reads a JSON array of record objects. The file is re-read on every fetch,
//! so a refresh picks up edits made since the last load.

use crate::model::{FetchError, Record};
use crate::parser::parse_records;
use crate::source::RecordSource;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Record source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the records file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    /// # Errors
    ///
    /// Returns `FetchError::FileNotFound` if the file does not exist.
    /// Returns `FetchError::Io` for other I/O errors.
    /// Returns `FetchError::Parse` if the content is not a JSON array.
    fn fetch(&mut self) -> Result<Vec<Record>, FetchError> {
        if !self.path.exists() {
            return Err(FetchError::FileNotFound {
                path: self.path.clone(),
            });
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;

        let parsed = parse_records(&contents)?;
        if !parsed.skipped.is_empty() {
            warn!(
                path = %self.path.display(),
                skipped = parsed.skipped.len(),
                "Some records were skipped"
            );
        }
        info!(
            path = %self.path.display(),
            records = parsed.records.len(),
            "Loaded records"
        );
        Ok(parsed.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn fetch_reads_records_from_file() {
        let path = std::env::temp_dir().join("selfcert_source_read.json");
        fs::write(&path, r#"[{"Id":"a1","Country__c":"US"},{"Id":"a2"}]"#).unwrap();

        let mut source = JsonFileSource::new(&path);
        let records = source.fetch().unwrap();

        let _ = fs::remove_file(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("Country__c"), "US");
    }

    #[test]
    fn fetch_rereads_file_on_every_call() {
        let path = std::env::temp_dir().join("selfcert_source_reread.json");
        fs::write(&path, r#"[{"Id":"a1"}]"#).unwrap();
        let mut source = JsonFileSource::new(&path);
        assert_eq!(source.fetch().unwrap().len(), 1);

        fs::write(&path, r#"[{"Id":"a1"},{"Id":"a2"},{"Id":"a3"}]"#).unwrap();
        let second = source.fetch().unwrap();

        let _ = fs::remove_file(&path);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn fetch_reports_missing_file() {
        let mut source = JsonFileSource::new("/nonexistent/selfcert/records.json");

        let result = source.fetch();

        assert!(matches!(result, Err(FetchError::FileNotFound { .. })));
    }

    #[test]
    fn fetch_reports_malformed_payload() {
        let path = std::env::temp_dir().join("selfcert_source_malformed.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonFileSource::new(&path).fetch();

        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }
}
