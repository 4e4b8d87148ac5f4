//! Screen layout: search bar, record table, status bar, optional help.

use super::constants::{SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::search_input::SearchBar;
use super::status::status_line;
use super::table::RecordTableView;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen: search bar, table, status line, and the help overlay when visible.
pub fn render_layout(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    let table = state.table();
    frame.render_widget(
        SearchBar::new(&state.search_input, table.search_term()),
        chunks[0],
    );
    frame.render_widget(RecordTableView::new(table, state.cursor()), chunks[1]);
    frame.render_widget(Paragraph::new(status_line(state)), chunks[2]);

    if state.help_visible {
        render_help_overlay(frame);
    }
}
