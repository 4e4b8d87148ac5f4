//! Status bar: paging position, counts, and the latest notification.

use super::styles::{notification_style, ERROR_TEXT, MUTED_TEXT};
use crate::state::AppState;
use ratatui::text::{Line, Span};

/// Build the one-line status for the current state.
pub fn status_line(state: &AppState) -> Line<'static> {
    let table = state.table();
    let mut spans = vec![Span::raw(format!(
        " Page {} of {} | {} per page | {} selected | {} records ",
        table.current_page(),
        table.total_pages(),
        table.page_size(),
        table.selection().len(),
        table.filtered_count(),
    ))];

    if table.no_results() {
        spans.push(Span::styled("| No results found. ", ERROR_TEXT));
    }

    match state.notifications().latest() {
        Some(notice) => spans.push(Span::styled(
            format!("| {}: {}", notice.title, notice.message),
            notification_style(notice.variant),
        )),
        None => spans.push(Span::styled("| ? for help", MUTED_TEXT)),
    }

    Line::from(spans)
}
