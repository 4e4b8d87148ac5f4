//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to table actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    fn plain(&mut self, code: KeyCode, action: KeyAction) {
        self.bind(KeyEvent::new(code, KeyModifiers::NONE), action);
    }

    fn ctrl(&mut self, c: char, action: KeyAction) {
        self.bind(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Row cursor
        keys.plain(KeyCode::Char('k'), KeyAction::CursorUp);
        keys.plain(KeyCode::Up, KeyAction::CursorUp);
        keys.plain(KeyCode::Char('j'), KeyAction::CursorDown);
        keys.plain(KeyCode::Down, KeyAction::CursorDown);

        // Pagination
        keys.plain(KeyCode::Char('n'), KeyAction::NextPage);
        keys.plain(KeyCode::Right, KeyAction::NextPage);
        keys.plain(KeyCode::PageDown, KeyAction::NextPage);
        keys.plain(KeyCode::Char('p'), KeyAction::PrevPage);
        keys.plain(KeyCode::Left, KeyAction::PrevPage);
        keys.plain(KeyCode::PageUp, KeyAction::PrevPage);
        keys.plain(KeyCode::Char('z'), KeyAction::CyclePageSize);

        // Sorting: digits pick a column, 0 clears
        for (index, digit) in ('1'..='9').enumerate() {
            keys.plain(KeyCode::Char(digit), KeyAction::SortColumn(index));
        }
        keys.plain(KeyCode::Char('0'), KeyAction::ClearSort);

        // Selection
        keys.plain(KeyCode::Char(' '), KeyAction::ToggleSelect);
        keys.plain(KeyCode::Char('a'), KeyAction::SelectPage);
        keys.plain(KeyCode::Char('c'), KeyAction::ClearSelection);

        // Search
        keys.plain(KeyCode::Char('/'), KeyAction::StartSearch);
        keys.ctrl('f', KeyAction::StartSearch);
        keys.plain(KeyCode::Enter, KeyAction::SubmitSearch);
        keys.plain(KeyCode::Esc, KeyAction::CancelSearch);

        // Application controls
        keys.plain(KeyCode::Char('e'), KeyAction::Export);
        keys.plain(KeyCode::Char('r'), KeyAction::Refresh);
        keys.plain(KeyCode::Char('?'), KeyAction::Help);
        keys.plain(KeyCode::Char('q'), KeyAction::Quit);
        keys.ctrl('c', KeyAction::Quit);

        keys
    }
}
