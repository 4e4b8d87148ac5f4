//! CSV export of selected or visible rows.
//!
//! Export prefers the selection. When nothing is selected it falls back to
//! the rows on the current page, unless the deployment is configured for
//! selection-only export. An empty input is a validation failure: it raises
//! a warning notification and delivers nothing.

pub mod csv;
pub mod sink;

pub use csv::{escape_field, to_csv};
pub use sink::{Artifact, ArtifactSink, CollectingSink, DirectorySink};

use crate::model::{fields, Column, ExportError, Record, ADMIN_COLUMNS};
use crate::notify::{Notification, Notifier};
use crate::state::RecordTable;
use serde::Deserialize;
use tracing::info;

/// MIME type of exported artifacts.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Default artifact file name.
pub const DEFAULT_FILE_NAME: &str = "SelfCertifications.csv";

const EXTENDED_COLUMNS: [Column; 5] = [
    Column::text("Country", fields::COUNTRY),
    Column::date("Certification Date", fields::CERTIFICATION_DATE),
    Column::text("Certification Period", fields::CERTIFICATION_PERIOD),
    Column::text("Certified By", fields::CERTIFIED_BY_NAME),
    Column::text("Status", fields::STATUS),
];

/// Fixed column layout of the exported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportSchema {
    /// Country, Certification Date, Certified By, Status.
    #[default]
    Standard,
    /// Standard plus Certification Period.
    Extended,
}

impl ExportSchema {
    /// Columns written by this schema, in output order.
    pub fn columns(self) -> &'static [Column] {
        match self {
            ExportSchema::Standard => &ADMIN_COLUMNS,
            ExportSchema::Extended => &EXTENDED_COLUMNS,
        }
    }
}

/// Which rows an export may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportSource {
    /// Selection when non-empty, else the current page.
    #[default]
    SelectionOrVisible,
    /// Selection only; an empty selection is an error.
    SelectionOnly,
}

/// Where the exported rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOrigin {
    /// The user's selection was exported.
    Selection,
    /// Nothing was selected; the visible page was exported.
    VisiblePage,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Column layout.
    pub schema: ExportSchema,
    /// Whether the visible page may stand in for an empty selection.
    pub source: ExportSource,
    /// Name of the delivered file.
    pub file_name: String,
    /// Clear the selection once the artifact is delivered.
    pub clear_selection_after: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            schema: ExportSchema::default(),
            source: ExportSource::default(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            clear_selection_after: false,
        }
    }
}

/// Summary of a delivered export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Number of data rows written (header excluded).
    pub rows: usize,
    /// Which rows were exported.
    pub origin: ExportOrigin,
    /// Name the artifact was delivered under.
    pub file_name: String,
}

/// Pick the rows to export.
///
/// # Errors
///
/// Returns `ExportError::NothingToExport` if the chosen input is empty.
pub fn rows_to_export(
    table: &RecordTable,
    source: ExportSource,
) -> Result<(Vec<&Record>, ExportOrigin), ExportError> {
    let selected = table.selected_records();
    if !selected.is_empty() {
        return Ok((selected, ExportOrigin::Selection));
    }
    match source {
        ExportSource::SelectionOnly => Err(ExportError::NothingToExport),
        ExportSource::SelectionOrVisible => {
            let visible = table.visible();
            if visible.is_empty() {
                Err(ExportError::NothingToExport)
            } else {
                Ok((visible, ExportOrigin::VisiblePage))
            }
        }
    }
}

/// Export the table and deliver the CSV through `sink`.
///
/// Returns `Ok(None)` after a warning notification when there is nothing to
/// export; table state is left untouched in that case.
///
/// # Errors
///
/// Returns `ExportError::Io` if the sink fails (also notified as an error).
pub fn export_table(
    table: &mut RecordTable,
    options: &ExportOptions,
    sink: &mut dyn ArtifactSink,
    notifier: &mut dyn Notifier,
) -> Result<Option<ExportReport>, ExportError> {
    let (csv, rows, origin) = match rows_to_export(table, options.source) {
        Ok((rows, origin)) => (to_csv(&rows, options.schema.columns()), rows.len(), origin),
        Err(ExportError::NothingToExport) => {
            notifier.notify(Notification::warning(
                "Export",
                ExportError::NothingToExport.to_string(),
            ));
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    if let Err(err) = sink.deliver(csv.as_bytes(), &options.file_name, CSV_MIME_TYPE) {
        notifier.notify(Notification::error("Export", err.to_string()));
        return Err(err);
    }

    if options.clear_selection_after {
        table.clear_selection();
    }

    info!(rows, ?origin, file = %options.file_name, "Exported records");
    notifier.notify(Notification::success(
        "Export",
        format!("Exported {rows} records to {}", options.file_name),
    ));

    Ok(Some(ExportReport {
        rows,
        origin,
        file_name: options.file_name.clone(),
    }))
}
