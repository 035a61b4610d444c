use nutype::nutype;
use serde::{Deserialize, Serialize};

/// The position within a paginated list, as seen by the page window generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageState {
    pub current_page: u64,
    pub total_pages: u64,
}

impl PageState {
    /// Clamps `current_page` into `[1, total_pages]` (or to `1` if there are no
    /// pages at all).
    pub fn clamped(self) -> Self {
        Self {
            current_page: self.current_page.clamp(1, self.total_pages.max(1)),
            total_pages: self.total_pages,
        }
    }

    pub fn is_first(self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last(self) -> bool {
        self.current_page >= self.total_pages
    }
}

#[nutype(
    validate(greater_or_equal = 1),
    derive(
        Debug,
        Display,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Deref,
        TryFrom,
        Serialize,
        Deserialize
    )
)]
pub struct PageNumber(u64);

impl PageNumber {
    pub fn first() -> Self {
        Self::try_new(1).unwrap()
    }

    /// Converts a page number that is known to be at least `1`, falling back
    /// to the first page otherwise.
    pub fn saturating_new(page: u64) -> Self {
        Self::try_new(page).unwrap_or_else(|_| Self::first())
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::first()
    }
}

#[nutype(
    validate(greater_or_equal = 1, less_or_equal = PageSize::MAX),
    derive(
        Debug,
        Display,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Deref,
        TryFrom,
        Serialize,
        Deserialize
    )
)]
pub struct PageSize(u64);

impl PageSize {
    pub const MAX: u64 = 100;
    pub const DEFAULT: u64 = 10;
}

impl Default for PageSize {
    fn default() -> Self {
        Self::try_new(Self::DEFAULT).unwrap()
    }
}

/// Page and page size as synced to the url query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: PageNumber,
    #[serde(default)]
    pub page_size: PageSize,
}

impl PageQuery {
    pub fn total_pages(self, total_items: u64) -> u64 {
        total_items.div_ceil(*self.page_size)
    }

    pub fn state(self, total_items: u64) -> PageState {
        PageState {
            current_page: *self.page,
            total_pages: self.total_pages(total_items),
        }
        .clamped()
    }

    /// Returns the same query with the page clamped to the available pages.
    pub fn clamped(self, total_items: u64) -> Self {
        Self {
            page: PageNumber::saturating_new(self.state(total_items).current_page),
            page_size: self.page_size,
        }
    }

    pub fn slice(self) -> PaginationSlice {
        PaginationSlice {
            limit: self.page_size,
            offset: (*self.page - 1).saturating_mul(*self.page_size),
        }
    }
}

/// The range of items a data source has to load for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationSlice {
    pub limit: PageSize,
    pub offset: u64,
}

/// The lists on the platform that share the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationScope {
    Events,
    Resources,
}

impl PaginationScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Resources => "resources",
        }
    }
}

impl std::fmt::Display for PaginationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
