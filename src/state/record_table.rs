//! Record table engine.
//!
//! `RecordTable` owns the authoritative record set and derives the visible
//! page from it. Every mutating action (search, sort, page size, page
//! navigation, fetch completion) ends in [`RecordTable::recompute`], which
//! rebuilds the derived rows from scratch:
//!
//! 1. filter by the search query over the configured candidate fields,
//! 2. stable-sort the whole filtered set by the active sort spec,
//! 3. slice out the current page.
//!
//! Sorting happens before paging, so a sort reorders the entire result and
//! not just the rows currently on screen.
//!
//! Fetches are ticketed: [`RecordTable::begin_fetch`] hands out a
//! [`FetchTicket`] and only the most recently issued ticket may complete. A
//! late response from a superseded refresh is reported as
//! [`FetchOutcome::Stale`] and leaves the table untouched.

use crate::model::{FetchError, Record, RecordId};
use crate::source::RecordSource;
use crate::state::pagination::{PageSize, Pagination};
use crate::state::search::{filter_indices, SearchQuery, SearchScope};
use crate::state::selection::Selection;
use crate::state::sort::{sort_indices, SortSpec};
use std::collections::HashSet;
use tracing::{debug, info, warn};

// ===== Options =====

/// Per-deployment table behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Initial rows per page.
    pub page_size: PageSize,
    /// Fields searched.
    pub search_scope: SearchScope,
    /// Raise the "no results" flag when a non-empty search matches nothing.
    pub report_no_results: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            search_scope: SearchScope::AllFields,
            report_no_results: true,
        }
    }
}

// ===== Fetch tickets =====

/// Proof of a started fetch. Only the latest ticket can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Result of completing a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Records replaced the authoritative set.
    Applied {
        /// Number of records loaded.
        loaded: usize,
    },
    /// The fetch failed; table state was cleared.
    Failed {
        /// Why the fetch failed.
        reason: String,
    },
    /// A newer fetch was started; this result was ignored.
    Stale,
}

// ===== RecordTable =====

/// Search/sort/paginate/select state over one record set.
#[derive(Debug, Clone)]
pub struct RecordTable {
    records: Vec<Record>,
    search_scope: SearchScope,
    report_no_results: bool,
    search: Option<SearchQuery>,
    sort: Option<SortSpec>,
    pagination: Pagination,
    selection: Selection,
    /// Indices into `records` after filter and sort, before paging.
    matched: Vec<usize>,
    no_results: bool,
    last_error: Option<String>,
    generation: u64,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl RecordTable {
    /// Empty table with the given options.
    pub fn new(options: TableOptions) -> Self {
        Self {
            records: Vec::new(),
            search_scope: options.search_scope,
            report_no_results: options.report_no_results,
            search: None,
            sort: None,
            pagination: Pagination::new(options.page_size),
            selection: Selection::new(),
            matched: Vec::new(),
            no_results: false,
            last_error: None,
            generation: 0,
        }
    }

    /// Table preloaded with a record set.
    pub fn with_records(options: TableOptions, records: Vec<Record>) -> Self {
        let mut table = Self::new(options);
        table.load(records);
        table
    }

    // ----- Fetch lifecycle -----

    /// Start a fetch. Any previously issued ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Complete a fetch started with `ticket`.
    ///
    /// Success replaces the authoritative set, returns to page 1, clears the
    /// selection and keeps the search term and sort. Rows repeating an id
    /// already in the set are dropped, since selection and export address
    /// rows by id. Failure clears all record-derived state and records the
    /// reason.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Record>, FetchError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "Ignoring stale fetch result"
            );
            return FetchOutcome::Stale;
        }

        self.selection.clear();
        self.pagination.reset();

        match result {
            Ok(records) => {
                let records = unique_by_id(records);
                let loaded = records.len();
                info!(loaded, "Record set replaced");
                self.records = records;
                self.last_error = None;
                self.recompute();
                FetchOutcome::Applied { loaded }
            }
            Err(err) => {
                let reason = err.to_string();
                warn!(error = %reason, "Record fetch failed");
                self.records.clear();
                self.last_error = Some(reason.clone());
                self.recompute();
                FetchOutcome::Failed { reason }
            }
        }
    }

    /// Replace the record set directly (a fetch that already succeeded).
    pub fn load(&mut self, records: Vec<Record>) {
        let ticket = self.begin_fetch();
        self.complete_fetch(ticket, Ok(records));
    }

    /// Re-fetch from `source` and replace the record set.
    pub fn refresh(&mut self, source: &mut dyn RecordSource) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = source.fetch();
        self.complete_fetch(ticket, result)
    }

    // ----- Search -----

    /// Apply a search term. Empty or whitespace-only terms clear the search.
    /// Always returns to page 1.
    pub fn set_search(&mut self, term: &str) {
        self.search = SearchQuery::new(term);
        self.pagination.reset();
        self.recompute();
    }

    /// Current search term, empty when not filtering.
    pub fn search_term(&self) -> &str {
        self.search.as_ref().map(SearchQuery::as_str).unwrap_or("")
    }

    /// Fields the search looks at.
    pub fn search_scope(&self) -> &SearchScope {
        &self.search_scope
    }

    /// True when a non-empty search matched nothing (if reporting is enabled).
    pub fn no_results(&self) -> bool {
        self.no_results
    }

    // ----- Sort -----

    /// Sort by a field and direction. Keeps the current page.
    pub fn sort_by(&mut self, spec: SortSpec) {
        self.sort = Some(spec);
        self.recompute();
    }

    /// Header-click sort: same field flips, new field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        let spec = SortSpec::toggled(self.sort.as_ref(), field);
        self.sort_by(spec);
    }

    /// Restore the authoritative order. Keeps the current page.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.recompute();
    }

    /// Active sort, if any.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    // ----- Pagination -----

    /// Change the page size and return to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pagination.set_page_size(page_size, self.matched.len());
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        self.pagination.next()
    }

    /// Go back one page; no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    /// Jump to a page, clamped into range.
    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    /// Paging state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Rows per page.
    pub fn page_size(&self) -> PageSize {
        self.pagination.page_size()
    }

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Number of pages over the filtered rows.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    // ----- Derived rows -----

    /// Rows on the current page.
    pub fn visible(&self) -> Vec<&Record> {
        let range = self.pagination.range(self.matched.len());
        self.matched[range]
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// All rows matching the search, in sort order (every page).
    pub fn filtered(&self) -> Vec<&Record> {
        self.matched.iter().map(|&index| &self.records[index]).collect()
    }

    /// Number of rows passing the search.
    pub fn filtered_count(&self) -> usize {
        self.matched.len()
    }

    /// Size of the authoritative set.
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// Authoritative record set in fetch order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Reason of the last failed fetch, cleared by the next successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ----- Selection -----

    /// Replace the selection with the given rows.
    ///
    /// Identifiers not present in the record set are ignored.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        let known: HashSet<&RecordId> = self.records.iter().map(Record::id).collect();
        let ids: Vec<RecordId> = ids.into_iter().filter(|id| known.contains(id)).collect();
        self.selection.replace(ids);
    }

    /// Toggle one row. Returns true if it is selected afterwards.
    pub fn toggle_selection(&mut self, id: &RecordId) -> bool {
        if !self.records.iter().any(|record| record.id() == id) {
            return false;
        }
        self.selection.toggle(id)
    }

    /// Add every row of the current page to the selection.
    pub fn select_visible(&mut self) {
        let ids: Vec<RecordId> = self.visible().iter().map(|r| r.id().clone()).collect();
        for id in ids {
            self.selection.insert(id);
        }
    }

    /// Deselect every row.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the row is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }

    /// Selected records in selection order.
    pub fn selected_records(&self) -> Vec<&Record> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.records.iter().find(|record| record.id() == id))
            .collect()
    }

    // ----- Recompute -----

    /// Rebuild derived rows from the authoritative set and current settings.
    fn recompute(&mut self) {
        let mut matched = filter_indices(&self.records, self.search.as_ref(), &self.search_scope);
        if let Some(spec) = &self.sort {
            sort_indices(&self.records, &mut matched, spec);
        }
        self.no_results = self.report_no_results && self.search.is_some() && matched.is_empty();
        self.pagination.recount(matched.len());
        self.matched = matched;

        debug!(
            total = self.records.len(),
            matched = self.matched.len(),
            page = self.pagination.current_page(),
            pages = self.pagination.total_pages(),
            "Recomputed visible rows"
        );
    }
}

/// Keep the first record for each id.
fn unique_by_id(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let first = seen.insert(record.id().clone());
            if !first {
                warn!(id = %record.id(), "Dropping record with duplicate id");
            }
            first
        })
        .collect()
}

#[cfg(test)]
#[path = "record_table_tests.rs"]
mod tests;
