use paginator_models::pagination::{PageQuery, PageSize, PageState, PaginationScope};
use thiserror::Error;

pub use view::{NavControl, PageControl, PaginationView};

pub mod view;

/// Drives the pagination controls of the event and resource lists.
///
/// The service never holds state of its own: callers pass the current
/// [`PageQuery`]/[`PageState`] in and receive the updated value back.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PaginationService: Send + Sync + 'static {
    /// Builds everything needed to render the controls for one list.
    fn view(
        &self,
        scope: PaginationScope,
        query: PageQuery,
        total_items: u64,
    ) -> Result<PaginationView, PaginationViewError>;

    /// Moves to another page. The resulting page is always clamped into the
    /// available range.
    fn navigate(&self, state: PageState, navigation: Navigation) -> PageChange;

    /// Switches to another page size and starts over at the first page.
    fn change_page_size(
        &self,
        scope: PaginationScope,
        query: PageQuery,
        page_size: PageSize,
    ) -> Result<PageQuery, PaginationViewError>;

    /// Returns the page sizes offered for the given list.
    fn page_size_options(&self, scope: PaginationScope) -> Vec<PageSize>;

    /// Returns the query used when a list is opened without one.
    fn default_query(&self, scope: PaginationScope) -> PageQuery;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Previous,
    Next,
    Last,
    Goto(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub state: PageState,
    /// Set if the page actually changed and the list should be scrolled back
    /// into view.
    pub scroll_to_top: bool,
}

#[derive(Debug, Error)]
pub enum PaginationViewError {
    #[error("Page size {0} is not available.")]
    InvalidPageSize(PageSize),
}

#[cfg(feature = "mock")]
impl MockPaginationService {
    pub fn with_view(
        mut self,
        scope: PaginationScope,
        query: PageQuery,
        total_items: u64,
        result: Result<PaginationView, PaginationViewError>,
    ) -> Self {
        self.expect_view()
            .once()
            .with(
                mockall::predicate::eq(scope),
                mockall::predicate::eq(query),
                mockall::predicate::eq(total_items),
            )
            .return_once(|_, _, _| result);
        self
    }

    pub fn with_default_query(mut self, scope: PaginationScope, result: PageQuery) -> Self {
        self.expect_default_query()
            .once()
            .with(mockall::predicate::eq(scope))
            .return_once(move |_| result);
        self
    }
}
