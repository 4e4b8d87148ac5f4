//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::{AppError, ExportError, FetchError, ParseError};
pub use identifiers::{DocumentId, InvalidDocumentId, InvalidRecordId, RecordId};
pub use key_action::KeyAction;
pub use record::{calendar_date, fields, Column, ColumnKind, FieldValue, Record, ADMIN_COLUMNS};
