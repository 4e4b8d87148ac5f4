//! Shared styles for the table view.

use crate::notify::NotificationVariant;
use ratatui::style::{Color, Modifier, Style};

/// Section titles.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Hints and placeholders.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Column headers.
pub const TABLE_HEADER: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Row under the cursor.
pub const CURSOR_ROW: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Selected rows.
pub const SELECTED_ROW: Style = Style::new().fg(Color::Green);

/// Error messages.
pub const ERROR_TEXT: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Style for a notification of the given severity.
pub fn notification_style(variant: NotificationVariant) -> Style {
    match variant {
        NotificationVariant::Success => Style::new().fg(Color::Green),
        NotificationVariant::Info => Style::new().fg(Color::Cyan),
        NotificationVariant::Warning => Style::new().fg(Color::Yellow),
        NotificationVariant::Error => ERROR_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_styles_differ_by_severity() {
        assert_ne!(
            notification_style(NotificationVariant::Success),
            notification_style(NotificationVariant::Error)
        );
        assert_eq!(notification_style(NotificationVariant::Error), ERROR_TEXT);
    }
}
