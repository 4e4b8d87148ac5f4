//! Table state (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! I/O collaborators are passed in by the caller.

pub mod app_state;
pub mod pagination;
pub mod record_table;
pub mod search;
pub mod search_input;
pub mod selection;
pub mod sort;

pub use app_state::{AppState, Effect};
pub use pagination::{InvalidPageSize, PageSize, Pagination};
pub use record_table::{FetchOutcome, FetchTicket, RecordTable, TableOptions};
pub use search::{filter_indices, record_matches, SearchQuery, SearchScope, SearchScopeSetting};
pub use search_input::SearchInput;
pub use selection::Selection;
pub use sort::{compare_by_field, sort_indices, SortDirection, SortSpec};
