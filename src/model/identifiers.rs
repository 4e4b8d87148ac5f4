//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::Serialize;
use std::fmt;

/// Stable identifier of a self-certification record (the backend `Id` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: rejects empty and whitespace-only identifiers.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidRecordId::Empty);
        }
        Ok(Self(raw))
    }

    /// Raw identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an uploaded supporting document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Smart constructor: rejects empty and whitespace-only identifiers.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidDocumentId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidDocumentId::Empty);
        }
        Ok(Self(raw))
    }

    /// Raw identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Download location of the document on the hosting platform.
    pub fn download_url(&self) -> String {
        format!("/sfc/servlet.shepherd/document/download/{}", self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Validation errors for [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecordId {
    /// Empty or whitespace-only input.
    #[error("Record ID cannot be empty")]
    Empty,
}

/// Validation errors for [`DocumentId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDocumentId {
    /// Empty or whitespace-only input.
    #[error("Document ID cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_salesforce_style_id() {
        let id = RecordId::new("a0B5g00000XyZ12EAF");
        assert!(id.is_ok(), "Valid record ID should be accepted");
    }

    #[test]
    fn record_id_rejects_empty_string() {
        assert_eq!(RecordId::new(""), Err(InvalidRecordId::Empty));
    }

    #[test]
    fn record_id_rejects_whitespace_only() {
        assert_eq!(RecordId::new("   "), Err(InvalidRecordId::Empty));
    }

    #[test]
    fn record_id_display_returns_inner_string() {
        let id = RecordId::new("rec-1").expect("valid id");
        assert_eq!(id.to_string(), "rec-1");
        assert_eq!(id.as_str(), "rec-1");
    }

    #[test]
    fn document_id_rejects_empty_string() {
        assert_eq!(DocumentId::new(""), Err(InvalidDocumentId::Empty));
    }

    #[test]
    fn document_id_builds_download_url() {
        let id = DocumentId::new("069XX0000004C92").expect("valid id");
        assert_eq!(
            id.download_url(),
            "/sfc/servlet.shepherd/document/download/069XX0000004C92"
        );
    }
}
