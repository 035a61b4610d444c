use paginator_models::window::PageToken;
use serde::Serialize;

pub mod pagination;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiPageToken {
    Page { number: u64 },
    Ellipsis,
}

impl From<PageToken> for ApiPageToken {
    fn from(value: PageToken) -> Self {
        match value {
            PageToken::Page(number) => Self::Page { number },
            PageToken::Ellipsis => Self::Ellipsis,
        }
    }
}
