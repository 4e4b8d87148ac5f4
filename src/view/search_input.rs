//! Search bar widget.

use crate::state::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the search box: an editable query while typing, otherwise the
/// applied term (or a hint when no search is active).
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    applied: &'a str,
}

impl<'a> SearchBar<'a> {
    /// Bar showing `input`, or the applied term when not typing.
    pub fn new(input: &'a SearchInput, applied: &'a str) -> Self {
        Self { input, applied }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, block) = match self.input {
            SearchInput::Typing { query, cursor } => {
                let before: String = query.chars().take(*cursor).collect();
                let mut rest = query.chars().skip(*cursor);
                let cursor_char = rest.next().map_or_else(|| " ".to_string(), String::from);
                let after: String = rest.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(after),
                ]);
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title(" Search ")
                    .style(Style::default().bg(Color::DarkGray));
                (line, block)
            }
            SearchInput::Inactive if self.applied.is_empty() => (
                Line::from(Span::styled(
                    "Press / to search",
                    super::styles::MUTED_TEXT,
                )),
                Block::default().borders(Borders::ALL).title(" Search "),
            ),
            SearchInput::Inactive => (
                Line::from(self.applied),
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Search (active) ")
                    .border_style(Style::default().fg(Color::Blue)),
            ),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
