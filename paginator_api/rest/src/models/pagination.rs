use paginator_core_pagination_contracts::{PageControl, PaginationView};
use paginator_models::pagination::{PageNumber, PageSize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ApiPaginationQuery {
    pub page: Option<PageNumber>,
    pub page_size: Option<PageSize>,
    #[serde(default)]
    pub total_items: u64,
}

#[derive(Debug, Serialize)]
pub struct ApiPaginationView {
    pub page: PageNumber,
    pub page_size: PageSize,
    pub total_pages: u64,
    pub total_items: u64,
    pub page_size_options: Vec<PageSize>,
    /// Target of the "previous" button, `null` if disabled.
    pub previous: Option<u64>,
    /// Target of the "next" button, `null` if disabled.
    pub next: Option<u64>,
    pub visible: bool,
    pub controls: Vec<ApiPageControl>,
    pub offset: u64,
    pub limit: PageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiPageControl {
    Page { number: u64, current: bool },
    Ellipsis,
}

impl From<PageControl> for ApiPageControl {
    fn from(value: PageControl) -> Self {
        match value {
            PageControl::Page { number, current } => Self::Page { number, current },
            PageControl::Ellipsis => Self::Ellipsis,
        }
    }
}

impl From<PaginationView> for ApiPaginationView {
    fn from(value: PaginationView) -> Self {
        Self {
            visible: value.visible(),
            page: value.query.page,
            page_size: value.query.page_size,
            total_pages: value.total_pages,
            total_items: value.total_items,
            page_size_options: value.page_size_options,
            previous: value.previous.target,
            next: value.next.target,
            controls: value.controls.into_iter().map(Into::into).collect(),
            offset: value.slice.offset,
            limit: value.slice.limit,
        }
    }
}
