//! CSV serialization.
//!
//! Fields containing the delimiter, a double quote, CR or LF are quoted with
//! embedded quotes doubled (RFC 4180); everything else is written raw. Lines
//! end with `\n`.

use crate::model::{Column, Record};
use std::borrow::Cow;

/// Field separator.
pub const DELIMITER: char = ',';

/// Quote a field if it would otherwise break the row.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == '"' || c == '\r' || c == '\n');
    if needs_quotes {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = Cow<'a, str>>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&escape_field(&cell));
    }
    out.push('\n');
}

/// Render a header row plus one line per record.
pub fn to_csv(records: &[&Record], columns: &[Column]) -> String {
    let mut out = String::new();
    push_row(&mut out, columns.iter().map(|c| Cow::Borrowed(c.label)));
    for record in records {
        push_row(&mut out, columns.iter().map(|c| c.cell(record)));
    }
    out
}
