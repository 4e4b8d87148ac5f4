//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor up. Default: k/↑
    CursorUp,
    /// Move the row cursor down. Default: j/↓
    CursorDown,

    // Pagination
    /// Go to the next page. Default: n/→/Page Down
    NextPage,
    /// Go to the previous page. Default: p/←/Page Up
    PrevPage,
    /// Cycle the page size through the menu (10, 20, 30, 40, 50, all). Default: z
    CyclePageSize,

    // Sorting
    /// Sort by the given column (0-based); repeat to flip direction. Default: 1-9
    SortColumn(usize),
    /// Remove any sort. Default: 0
    ClearSort,

    // Selection
    /// Toggle selection of the row under the cursor. Default: Space
    ToggleSelect,
    /// Select every row on the current page. Default: a
    SelectPage,
    /// Clear the selection. Default: c
    ClearSelection,

    // Search
    /// Activate the search input. Default: //Ctrl+f
    StartSearch,
    /// Leave the search input, keeping the term. Default: Enter
    SubmitSearch,
    /// Leave the search input and clear the term. Default: Esc
    CancelSearch,

    // Application
    /// Export selected rows (or the visible page) to CSV. Default: e
    Export,
    /// Re-fetch the record set. Default: r
    Refresh,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
