//! Page size and page index bookkeeping.

use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

/// Rows per page, or every row on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PageSizeRepr")]
pub enum PageSize {
    /// Fixed number of rows per page.
    Rows(NonZeroUsize),
    /// Every row on a single page.
    All,
}

impl PageSize {
    /// Page sizes offered by the page-size picker.
    pub const MENU: [usize; 5] = [10, 20, 30, 40, 50];

    /// Smart constructor: `None` for zero.
    pub fn rows(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(PageSize::Rows)
    }

    /// Number of pages needed for `count` rows. Zero rows means zero pages.
    pub fn page_count(self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        match self {
            PageSize::Rows(size) => count.div_ceil(size.get()),
            PageSize::All => 1,
        }
    }

    /// Half-open row range of a 1-based page, clamped to `count`.
    pub fn page_range(self, page: usize, count: usize) -> std::ops::Range<usize> {
        match self {
            PageSize::Rows(size) => {
                let start = page.saturating_sub(1).saturating_mul(size.get()).min(count);
                let end = start.saturating_add(size.get()).min(count);
                start..end
            }
            PageSize::All => 0..count,
        }
    }

    /// Next entry of the picker menu, wrapping from `All` back to the first size.
    pub fn next_in_menu(self) -> Self {
        match self {
            PageSize::All => PageSize::Rows(menu_size(0)),
            PageSize::Rows(size) => PageSize::MENU
                .iter()
                .position(|&n| n > size.get())
                .map(|i| PageSize::Rows(menu_size(i)))
                .unwrap_or(PageSize::All),
        }
    }
}

fn menu_size(index: usize) -> NonZeroUsize {
    NonZeroUsize::new(PageSize::MENU[index]).unwrap_or(NonZeroUsize::MIN)
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(menu_size(0))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Rows(n) => write!(f, "{n}"),
            PageSize::All => f.write_str("all"),
        }
    }
}

/// Error parsing a page size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid page size '{0}': expected a positive number or 'all'")]
pub struct InvalidPageSize(pub String);

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(PageSize::rows)
            .ok_or_else(|| InvalidPageSize(s.to_string()))
    }
}

/// TOML accepts either `page_size = 20` or `page_size = "all"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageSizeRepr {
    Rows(usize),
    Keyword(String),
}

impl TryFrom<PageSizeRepr> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(repr: PageSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            PageSizeRepr::Rows(n) => PageSize::rows(n).ok_or_else(|| InvalidPageSize(n.to_string())),
            PageSizeRepr::Keyword(s) => s.parse(),
        }
    }
}

// ===== Pagination =====

/// Pagination state: page size, current page and derived page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: PageSize,
    current_page: usize,
    total_pages: usize,
}

impl Pagination {
    /// Pagination over an empty set, on page 1.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current_page: 1,
            total_pages: 0,
        }
    }

    /// Rows per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// 1-based current page. Always at least 1, even with no rows.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages; zero when there are no rows.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// True on page 1.
    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// True when there is no next page.
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Recompute the page count for `count` rows and clamp the current page.
    pub fn recount(&mut self, count: usize) {
        self.total_pages = self.page_size.page_count(count);
        self.current_page = self.current_page.clamp(1, self.total_pages.max(1));
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Change the page size and go back to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize, count: usize) {
        self.page_size = page_size;
        self.current_page = 1;
        self.recount(count);
    }

    /// Advance one page. Returns false (no-op) on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false (no-op) on the first page.
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a page, clamped into `1..=total_pages`.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages.max(1));
    }

    /// Row range of the current page within `count` rows.
    pub fn range(&self, count: usize) -> std::ops::Range<usize> {
        self.page_size.page_range(self.current_page, count)
    }
}
