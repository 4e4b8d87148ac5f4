//! Record table widget.

use super::constants::{MARKER_WIDTH, SELECTED_MARKER, UNSELECTED_MARKER};
use super::styles::{CURSOR_ROW, ERROR_TEXT, MUTED_TEXT, SELECTED_ROW, TABLE_HEADER};
use crate::model::{Column, ADMIN_COLUMNS};
use crate::state::RecordTable;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders the visible page of a [`RecordTable`].
///
/// Column headers carry ▲/▼ on the sorted column. Each row starts with a
/// selection marker; the row under `cursor` is highlighted.
pub struct RecordTableView<'a> {
    table: &'a RecordTable,
    cursor: usize,
}

impl<'a> RecordTableView<'a> {
    /// Widget over the visible page of `table`.
    pub fn new(table: &'a RecordTable, cursor: usize) -> Self {
        Self { table, cursor }
    }

    fn header_label(&self, column: &Column) -> String {
        match self.table.sort() {
            Some(spec) if spec.field == column.field => {
                format!("{} {}", column.label, spec.direction.indicator())
            }
            _ => column.label.to_string(),
        }
    }

    /// Message shown instead of rows, if any.
    fn empty_message(&self) -> Option<(String, Style)> {
        if let Some(err) = self.table.last_error() {
            return Some((format!("Error loading certifications: {err}"), ERROR_TEXT));
        }
        if self.table.no_results() {
            return Some(("No results found.".to_string(), MUTED_TEXT));
        }
        if self.table.visible().is_empty() {
            return Some(("No records.".to_string(), MUTED_TEXT));
        }
        None
    }
}

/// Cut `text` to at most `width` display columns, ending in `…` if cut.
pub fn truncate_to_width(text: &str, width: usize) -> Cow<'_, str> {
    if text.width() <= width {
        return Cow::Borrowed(text);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}

impl Widget for RecordTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Self Certifications ({} of {}) ",
            self.table.filtered_count(),
            self.table.total_count()
        );
        let block = Block::default().borders(Borders::ALL).title(title);

        if let Some((message, style)) = self.empty_message() {
            Paragraph::new(Line::from(Span::styled(message, style)))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        // Borders take two columns, gaps one per column
        let columns = ADMIN_COLUMNS.len() as u16;
        let inner = area
            .width
            .saturating_sub(2 + MARKER_WIDTH + columns);
        let cell_width = usize::from(inner / columns.max(1));

        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(ADMIN_COLUMNS.iter().map(|c| Cell::from(self.header_label(c)))),
        )
        .style(TABLE_HEADER);

        let rows = self.table.visible().into_iter().enumerate().map(|(i, record)| {
            let selected = self.table.is_selected(record.id());
            let marker = if selected {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            };
            let cells = std::iter::once(Cell::from(marker)).chain(ADMIN_COLUMNS.iter().map(
                |column| {
                    let value = column.cell(record);
                    Cell::from(truncate_to_width(&value, cell_width).into_owned())
                },
            ));
            let mut style = if selected {
                SELECTED_ROW
            } else {
                Style::default()
            };
            if i == self.cursor {
                style = style.patch(CURSOR_ROW);
            }
            Row::new(cells).style(style)
        });

        let widths = std::iter::once(Constraint::Length(MARKER_WIDTH))
            .chain(ADMIN_COLUMNS.iter().map(|_| Constraint::Fill(1)));

        Widget::render(
            Table::new(rows, widths).header(header).block(block),
            area,
            buf,
        );
    }
}
