use std::sync::Arc;

use paginator_core_pagination_contracts::{
    NavControl, Navigation, PageChange, PageControl, PaginationService, PaginationView,
    PaginationViewError,
};
use paginator_core_window_contracts::PageWindowService;
use paginator_models::{
    pagination::{PageNumber, PageQuery, PageSize, PageState, PaginationScope},
    window::{PageToken, WindowConfig},
};
use tracing::debug;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct PaginationServiceImpl<Window> {
    window: Window,
    config: PaginationFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct PaginationFeatureConfig {
    pub events: Arc<PaginationScopeConfig>,
    pub resources: Arc<PaginationScopeConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationScopeConfig {
    /// Page sizes offered by the page size selector, in display order.
    pub page_sizes: Vec<PageSize>,
    pub default_page_size: PageSize,
    pub window: WindowConfig,
}

impl PaginationFeatureConfig {
    pub fn scope(&self, scope: PaginationScope) -> &PaginationScopeConfig {
        match scope {
            PaginationScope::Events => &self.events,
            PaginationScope::Resources => &self.resources,
        }
    }
}

impl<Window> PaginationServiceImpl<Window> {
    pub fn new(window: Window, config: PaginationFeatureConfig) -> Self {
        Self { window, config }
    }

    fn check_page_size(
        &self,
        scope: PaginationScope,
        page_size: PageSize,
    ) -> Result<&PaginationScopeConfig, PaginationViewError> {
        let config = self.config.scope(scope);
        if !config.page_sizes.contains(&page_size) {
            return Err(PaginationViewError::InvalidPageSize(page_size));
        }
        Ok(config)
    }
}

impl<Window> PaginationService for PaginationServiceImpl<Window>
where
    Window: PageWindowService,
{
    fn view(
        &self,
        scope: PaginationScope,
        query: PageQuery,
        total_items: u64,
    ) -> Result<PaginationView, PaginationViewError> {
        let config = self.check_page_size(scope, query.page_size)?;

        let query = query.clamped(total_items);
        let state = query.state(total_items);

        let controls = self
            .window
            .generate_for(state, config.window)
            .into_iter()
            .map(|token| match token {
                PageToken::Page(number) => PageControl::Page {
                    number,
                    current: number == state.current_page,
                },
                PageToken::Ellipsis => PageControl::Ellipsis,
            })
            .collect();

        debug!(
            %scope,
            current_page = state.current_page,
            total_pages = state.total_pages,
            total_items,
            "built pagination view"
        );

        Ok(PaginationView {
            query,
            total_pages: state.total_pages,
            total_items,
            page_size_options: config.page_sizes.clone(),
            previous: NavControl {
                target: (!state.is_first()).then(|| state.current_page - 1),
            },
            next: NavControl {
                target: (!state.is_last()).then(|| state.current_page + 1),
            },
            controls,
            slice: query.slice(),
        })
    }

    fn navigate(&self, state: PageState, navigation: Navigation) -> PageChange {
        let clamped = state.clamped();
        let target = match navigation {
            Navigation::First => 1,
            Navigation::Previous => clamped.current_page.saturating_sub(1),
            Navigation::Next => clamped.current_page.saturating_add(1),
            Navigation::Last => clamped.total_pages,
            Navigation::Goto(page) => u64::try_from(page).unwrap_or(0),
        };

        let new_state = PageState {
            current_page: target,
            total_pages: state.total_pages,
        }
        .clamped();

        let scroll_to_top = new_state.current_page != state.current_page;
        debug!(
            ?navigation,
            from = state.current_page,
            to = new_state.current_page,
            "navigated"
        );

        PageChange {
            state: new_state,
            scroll_to_top,
        }
    }

    fn change_page_size(
        &self,
        scope: PaginationScope,
        query: PageQuery,
        page_size: PageSize,
    ) -> Result<PageQuery, PaginationViewError> {
        self.check_page_size(scope, page_size)?;
        debug!(%scope, from = %query.page_size, to = %page_size, "changed page size");
        Ok(PageQuery {
            page: PageNumber::first(),
            page_size,
        })
    }

    fn page_size_options(&self, scope: PaginationScope) -> Vec<PageSize> {
        self.config.scope(scope).page_sizes.clone()
    }

    fn default_query(&self, scope: PaginationScope) -> PageQuery {
        PageQuery {
            page: PageNumber::first(),
            page_size: self.config.scope(scope).default_page_size,
        }
    }
}
