//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod search_input;
mod status;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use search_input::SearchBar;
pub use status::status_line;
pub use table::{truncate_to_width, RecordTableView};

use crate::config::KeyBindings;
use crate::export::ArtifactSink;
use crate::model::AppError;
use crate::source::RecordSource;
use crate::state::{AppState, Effect};
use constants::POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(source) => AppError::Terminal(source),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    source: Box<dyn RecordSource>,
    sink: Box<dyn ArtifactSink>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Put the terminal in raw mode on the alternate screen and build the app.
    pub fn new(
        app_state: AppState,
        source: Box<dyn RecordSource>,
        sink: Box<dyn ArtifactSink>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, app_state, source, sink))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create the app over an existing terminal, e.g. a `TestBackend` in tests.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        source: Box<dyn RecordSource>,
        sink: Box<dyn ArtifactSink>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            source,
            sink,
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Run the main event loop until the user quits.
    ///
    /// Redraws after every handled event and on resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Handle one key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.app_state.handle_key(key, &self.key_bindings) {
            Effect::None => false,
            Effect::Quit => true,
            Effect::Export => {
                // Failures are already surfaced as notifications
                if let Err(err) = self.app_state.export(self.sink.as_mut()) {
                    warn!(error = %err, "Export failed");
                }
                false
            }
            Effect::Refresh => {
                self.app_state.refresh(self.source.as_mut());
                false
            }
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        self.terminal.draw(|frame| render_layout(frame, &self.app_state))?;
        Ok(())
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Run the interactive table on the real terminal, restoring it on exit.
pub fn run(
    app_state: AppState,
    source: Box<dyn RecordSource>,
    sink: Box<dyn ArtifactSink>,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, source, sink)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
