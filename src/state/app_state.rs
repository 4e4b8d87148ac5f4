//! Application state and transitions.
//!
//! `AppState` is the root state of the terminal table: the record engine
//! plus the UI-only pieces around it (row cursor, search box, help overlay,
//! notification history). Key handling is pure and returns an [`Effect`]
//! for anything that needs I/O; the view shell performs the effect and
//! hands the collaborator back in.

use crate::config::KeyBindings;
use crate::export::{export_table, ArtifactSink, ExportOptions, ExportReport};
use crate::model::{ExportError, KeyAction, ADMIN_COLUMNS};
use crate::notify::{Notification, NotificationLog, Notifier};
use crate::source::RecordSource;
use crate::state::record_table::{FetchOutcome, RecordTable};
use crate::state::search_input::{
    handle_backspace, handle_char_input, handle_cursor_left, handle_cursor_right, SearchInput,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Work the shell must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing for the shell to do.
    None,
    /// Export through the artifact sink.
    Export,
    /// Re-fetch from the record source.
    Refresh,
    /// Leave the application.
    Quit,
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    table: RecordTable,
    export_options: ExportOptions,
    /// Search box state; live edits are applied to the table on every key.
    pub search_input: SearchInput,
    /// Row cursor within the current page (0-based).
    cursor: usize,
    /// Whether the shortcut overlay is shown.
    pub help_visible: bool,
    notifications: NotificationLog,
}

impl AppState {
    /// State over `table` with the cursor on the first row.
    pub fn new(table: RecordTable, export_options: ExportOptions) -> Self {
        Self {
            table,
            export_options,
            search_input: SearchInput::Inactive,
            cursor: 0,
            help_visible: false,
            notifications: NotificationLog::default(),
        }
    }

    /// The record table.
    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    /// Mutable access to the record table.
    pub fn table_mut(&mut self) -> &mut RecordTable {
        &mut self.table
    }

    /// Cursor row within the visible page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Notifications raised so far.
    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    // ===== Key handling =====

    /// Route a key press to the search box or to a bound action.
    pub fn handle_key(&mut self, key: KeyEvent, bindings: &KeyBindings) -> Effect {
        if self.search_input.is_typing() {
            return self.handle_search_key(key);
        }
        match bindings.get(key) {
            Some(action) => self.handle_action(action),
            None => Effect::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Effect {
        let state = std::mem::take(&mut self.search_input);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        self.search_input = match key.code {
            KeyCode::Char('c') if ctrl => {
                self.search_input = state;
                return Effect::Quit;
            }
            KeyCode::Enter => {
                self.search_input = state;
                return self.handle_action(KeyAction::SubmitSearch);
            }
            KeyCode::Esc => {
                self.search_input = state;
                return self.handle_action(KeyAction::CancelSearch);
            }
            KeyCode::Char(ch) if !ctrl => handle_char_input(state, ch),
            KeyCode::Backspace => handle_backspace(state),
            KeyCode::Left => handle_cursor_left(state),
            KeyCode::Right => handle_cursor_right(state),
            _ => state,
        };
        if let Some(query) = self.search_input.query() {
            let query = query.to_string();
            self.table.set_search(&query);
            self.clamp_cursor();
        }
        Effect::None
    }

    /// Apply a table action. I/O actions are returned as effects.
    pub fn handle_action(&mut self, action: KeyAction) -> Effect {
        debug!(?action, "Handling action");
        match action {
            KeyAction::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            KeyAction::CursorDown => self.cursor += 1,
            KeyAction::NextPage => {
                if self.table.next_page() {
                    self.cursor = 0;
                }
            }
            KeyAction::PrevPage => {
                if self.table.previous_page() {
                    self.cursor = 0;
                }
            }
            KeyAction::CyclePageSize => {
                let next = self.table.page_size().next_in_menu();
                self.table.set_page_size(next);
                self.cursor = 0;
            }
            KeyAction::SortColumn(index) => {
                if let Some(column) = ADMIN_COLUMNS.get(index) {
                    self.table.toggle_sort(column.field);
                }
            }
            KeyAction::ClearSort => self.table.clear_sort(),
            KeyAction::ToggleSelect => {
                let id = self
                    .table
                    .visible()
                    .get(self.cursor)
                    .map(|record| record.id().clone());
                if let Some(id) = id {
                    self.table.toggle_selection(&id);
                }
            }
            KeyAction::SelectPage => self.table.select_visible(),
            KeyAction::ClearSelection => self.table.clear_selection(),
            KeyAction::StartSearch => {
                self.search_input = SearchInput::activate(self.table.search_term());
            }
            KeyAction::SubmitSearch => self.search_input = SearchInput::Inactive,
            KeyAction::CancelSearch => {
                self.search_input = SearchInput::Inactive;
                if !self.table.search_term().is_empty() {
                    self.table.set_search("");
                }
            }
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Export => return Effect::Export,
            KeyAction::Refresh => return Effect::Refresh,
            KeyAction::Quit => return Effect::Quit,
        }
        self.clamp_cursor();
        Effect::None
    }

    fn clamp_cursor(&mut self) {
        let rows = self.table.visible().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    // ===== Effects =====

    /// Export through `sink`, recording the outcome as a notification.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    pub fn export(
        &mut self,
        sink: &mut dyn ArtifactSink,
    ) -> Result<Option<ExportReport>, ExportError> {
        export_table(
            &mut self.table,
            &self.export_options,
            sink,
            &mut self.notifications,
        )
    }

    /// Re-fetch from `source`. A failure is recorded as an error notification.
    pub fn refresh(&mut self, source: &mut dyn RecordSource) -> FetchOutcome {
        let outcome = self.table.refresh(source);
        self.cursor = 0;
        match &outcome {
            FetchOutcome::Applied { loaded } => self
                .notifications
                .notify(Notification::info("Refresh", format!("Loaded {loaded} records"))),
            FetchOutcome::Failed { reason } => self
                .notifications
                .notify(Notification::error("Error loading certifications", reason.clone())),
            FetchOutcome::Stale => {}
        }
        outcome
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
