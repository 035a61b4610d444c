use std::sync::Arc;

use paginator_core_window_contracts::MockPageWindowService;
use paginator_models::{
    pagination::{PageQuery, PageSize},
    window::WindowConfig,
};

use crate::{PaginationFeatureConfig, PaginationScopeConfig, PaginationServiceImpl};


type Sut = PaginationServiceImpl<MockPageWindowService>;

impl Default for Sut {
    fn default() -> Self {
        Self::new(MockPageWindowService::new(), config())
    }
}

fn config() -> PaginationFeatureConfig {
    PaginationFeatureConfig {
        events: Arc::new(PaginationScopeConfig {
            page_sizes: sizes(&[6, 12, 24]),
            default_page_size: size(6),
            window: WindowConfig::default(),
        }),
        resources: Arc::new(PaginationScopeConfig {
            page_sizes: sizes(&[9, 18, 36]),
            default_page_size: size(9),
            window: WindowConfig {
                max_visible: 5.try_into().unwrap(),
            },
        }),
    }
}

fn size(page_size: u64) -> PageSize {
    page_size.try_into().unwrap()
}

fn sizes(page_sizes: &[u64]) -> Vec<PageSize> {
    page_sizes.iter().copied().map(size).collect()
}

fn query(page: u64, page_size: u64) -> PageQuery {
    PageQuery {
        page: page.try_into().unwrap(),
        page_size: size(page_size),
    }
}
