//! Record payload parser.
//!
//! Converts the fetch collaborator's JSON payload (an array of record objects)
//! into validated [`Record`]s. This is the boundary where nested reference
//! objects get their display name flattened onto the record.

use crate::model::{fields, FieldValue, ParseError, Record, RecordId};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

/// Suffix of relationship fields holding a nested related object.
const REFERENCE_SUFFIX: &str = "__r";
/// Field of a related object that carries its display name.
const REFERENCE_NAME_FIELD: &str = "Name";

/// Records parsed from one payload.
#[derive(Debug, Clone, Default)]
pub struct ParsedRecords {
    /// Records in payload order.
    pub records: Vec<Record>,
    /// Array positions (0-based) of entries that were skipped.
    pub skipped: Vec<usize>,
}

/// Parse a JSON payload into records.
///
/// Entries that are not objects, lack a non-empty `Id`, or repeat an `Id`
/// seen earlier in the payload are skipped and logged; they never fail the
/// whole payload.
///
/// # Errors
///
/// Returns `ParseError` if the payload is not valid JSON or not an array.
pub fn parse_records(payload: &str) -> Result<ParsedRecords, ParseError> {
    let value: Value = serde_json::from_str(payload).map_err(|e| ParseError::InvalidJson {
        message: e.to_string(),
    })?;

    let Value::Array(items) = value else {
        return Err(ParseError::NotAnArray {
            found: json_type_name(&value),
        });
    };

    let mut parsed = ParsedRecords::default();
    let mut seen = HashSet::new();
    for (index, item) in items.into_iter().enumerate() {
        match parse_record(item) {
            Some(record) if seen.insert(record.id().clone()) => parsed.records.push(record),
            Some(record) => {
                warn!(index, id = %record.id(), "Skipping record with duplicate Id");
                parsed.skipped.push(index);
            }
            None => {
                warn!(index, "Skipping record without a usable Id");
                parsed.skipped.push(index);
            }
        }
    }
    Ok(parsed)
}

/// Parse one record object. Returns `None` if it has no usable identifier.
pub fn parse_record(value: Value) -> Option<Record> {
    let Value::Object(object) = value else {
        return None;
    };

    let id = object
        .get(fields::ID)
        .and_then(Value::as_str)
        .and_then(|raw| RecordId::new(raw).ok())?;

    let mut record = Record::new(id);
    for (name, value) in object {
        if name == fields::ID {
            continue;
        }
        if let Some(field) = convert_value(value) {
            record.set_field(name, field);
        }
    }
    flatten_references(&mut record);
    Some(record)
}

/// Convert a JSON value into a field value. `null` is treated as missing.
fn convert_value(value: Value) -> Option<FieldValue> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(FieldValue::Text(s)),
        Value::Number(n) => Some(FieldValue::Number(n)),
        Value::Bool(b) => Some(FieldValue::Bool(b)),
        Value::Object(map) => Some(FieldValue::Reference(convert_object(map))),
        // Arrays have no tabular meaning; keep their JSON text so they stay searchable.
        Value::Array(items) => Some(FieldValue::Text(Value::Array(items).to_string())),
    }
}

fn convert_object(map: Map<String, Value>) -> BTreeMap<String, FieldValue> {
    map.into_iter()
        .filter_map(|(name, value)| convert_value(value).map(|v| (name, v)))
        .collect()
}

/// Flatten `<Prefix>__r.Name` onto the record as `<Prefix>_Name`.
///
/// The certifier display field is always present afterwards (empty when the
/// reference is missing), so the table never shows a hole for it.
fn flatten_references(record: &mut Record) {
    let flattened: Vec<(String, FieldValue)> = record
        .field_names()
        .filter_map(|name| name.strip_suffix(REFERENCE_SUFFIX).map(|prefix| (name, prefix)))
        .filter_map(|(name, prefix)| {
            let display = record
                .get(name)?
                .reference_field(REFERENCE_NAME_FIELD)?
                .display()?
                .into_owned();
            Some((format!("{prefix}_Name"), FieldValue::Text(display)))
        })
        .collect();

    for (name, value) in flattened {
        record.set_field(name, value);
    }

    if record.get(fields::CERTIFIED_BY_NAME).is_none() {
        record.set_field(fields::CERTIFIED_BY_NAME, FieldValue::Text(String::new()));
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
