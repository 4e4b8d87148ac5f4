//! Self-certification records and table columns.
//!
//! A [`Record`] is an opaque field map keyed by backend field name plus a
//! stable [`RecordId`]. Nested reference objects are kept as
//! [`FieldValue::Reference`]; the parser flattens their display name onto the
//! record so search, sort and export only ever look at flat fields.

use crate::model::RecordId;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::borrow::Cow;
use std::collections::BTreeMap;

// ===== Field names =====

/// Backend field names used by the admin table and export schemas.
pub mod fields {
    /// Record identifier. Stored as [`Record::id`], never in the field map.
    pub const ID: &str = "Id";
    /// Country being certified.
    pub const COUNTRY: &str = "Country__c";
    /// Certification date.
    pub const CERTIFICATION_DATE: &str = "Certification_Date__c";
    /// Certification period label.
    pub const CERTIFICATION_PERIOD: &str = "Certification_Period__c";
    /// Nested certifier reference.
    pub const CERTIFIED_BY_REFERENCE: &str = "Certified_By__r";
    /// Certifier display name, flattened from the reference.
    pub const CERTIFIED_BY_NAME: &str = "Certified_By_Name";
    /// Certification status.
    pub const STATUS: &str = "Status__c";
}

// ===== FieldValue =====

/// A single field value as delivered by the fetch collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String value.
    Text(String),
    /// Numeric value, kept as parsed.
    Number(serde_json::Number),
    /// Boolean value.
    Bool(bool),
    /// Nested related object (e.g. the certifying contact).
    Reference(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// String form used for search, sort and export.
    ///
    /// Returns `None` for nested references: they are represented by their
    /// flattened display field instead.
    pub fn display(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            FieldValue::Number(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            FieldValue::Reference(_) => None,
        }
    }

    /// Nested field lookup for reference values.
    pub fn reference_field(&self, name: &str) -> Option<&FieldValue> {
        match self {
            FieldValue::Reference(map) => map.get(name),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

// ===== Record =====

/// One self-certification entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Record with no fields.
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Raw value of a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Display string of a field, or `""` when it is missing or not displayable.
    pub fn text(&self, name: &str) -> Cow<'_, str> {
        self.fields
            .get(name)
            .and_then(FieldValue::display)
            .unwrap_or(Cow::Borrowed(""))
    }

    /// All displayable fields, in field-name order.
    pub fn display_fields(&self) -> impl Iterator<Item = (&str, Cow<'_, str>)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| value.display().map(|text| (name.as_str(), text)))
    }

    /// Names of the stored fields, sorted.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Sets the derived display field. Only the parser calls this.
    pub(crate) fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }
}

// ===== Columns =====

/// How a column's value is rendered and exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Displayed as stored.
    Text,
    /// Calendar date; time-of-day is dropped on export.
    Date,
}

/// A table/export column bound to a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub label: &'static str,
    /// Record field rendered in the column.
    pub field: &'static str,
    /// How cells are rendered.
    pub kind: ColumnKind,
}

impl Column {
    /// Plain text column.
    pub const fn text(label: &'static str, field: &'static str) -> Self {
        Self {
            label,
            field,
            kind: ColumnKind::Text,
        }
    }

    /// Date column, normalised to `YYYY-MM-DD`.
    pub const fn date(label: &'static str, field: &'static str) -> Self {
        Self {
            label,
            field,
            kind: ColumnKind::Date,
        }
    }

    /// Cell text for a record, with dates normalized to `YYYY-MM-DD`.
    pub fn cell<'r>(&self, record: &'r Record) -> Cow<'r, str> {
        let raw = record.text(self.field);
        match self.kind {
            ColumnKind::Text => raw,
            ColumnKind::Date if raw.is_empty() => raw,
            ColumnKind::Date => match calendar_date(&raw) {
                Some(date) => Cow::Owned(date.format("%Y-%m-%d").to_string()),
                None => {
                    tracing::warn!(field = self.field, value = %raw, "Unparseable date value");
                    raw
                }
            },
        }
    }
}

/// Columns rendered by the admin table.
pub const ADMIN_COLUMNS: [Column; 4] = [
    Column::text("Country", fields::COUNTRY),
    Column::date("Certification Date", fields::CERTIFICATION_DATE),
    Column::text("Certified By", fields::CERTIFIED_BY_NAME),
    Column::text("Status", fields::STATUS),
];

/// Parse a date or date-time string down to its calendar date.
///
/// Accepts `YYYY-MM-DD`, naive `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339
/// date-times; offset date-times are converted to UTC first.
pub fn calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    // Salesforce emits offsets without a colon, e.g. +0000
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
