//! Layout dimension constants for TUI rendering.

/// Height of the search bar in lines (border + content).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the selection marker column.
pub const MARKER_WIDTH: u16 = 3;

/// Marker of a selected row.
pub const SELECTED_MARKER: &str = "[x]";
/// Marker of an unselected row.
pub const UNSELECTED_MARKER: &str = "[ ]";

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// How long the event loop waits for input before redrawing.
pub const POLL_INTERVAL_MS: u64 = 250;
