use paginator_models::pagination::{PageQuery, PageSize, PaginationSlice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// The clamped query. Callers should sync this back if it differs from
    /// the requested one.
    pub query: PageQuery,
    pub total_pages: u64,
    pub total_items: u64,
    pub page_size_options: Vec<PageSize>,
    pub previous: NavControl,
    pub next: NavControl,
    pub controls: Vec<PageControl>,
    /// The items to load for the current page.
    pub slice: PaginationSlice,
}

impl PaginationView {
    pub fn current_page(&self) -> u64 {
        *self.query.page
    }

    /// Whether rendering the controls makes sense at all.
    pub fn visible(&self) -> bool {
        self.total_pages > 1
    }
}

/// A previous/next button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    /// The page to go to, `None` if the button is disabled.
    pub target: Option<u64>,
}

impl NavControl {
    pub fn enabled(self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// A page button, disabled if it points to the current page.
    Page { number: u64, current: bool },
    /// A non-interactive gap marker.
    Ellipsis,
}
