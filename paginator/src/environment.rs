use std::sync::Arc;

use paginator_api_rest::RestServerConfig;
use paginator_config::Config;
use paginator_core_pagination_impl::{
    PaginationFeatureConfig, PaginationScopeConfig, PaginationServiceImpl,
};
use paginator_core_window_impl::PageWindowServiceImpl;
use paginator_models::window::WindowConfig;

pub type WindowService = PageWindowServiceImpl;
pub type PaginationService = PaginationServiceImpl<WindowService>;
pub type RestServer = paginator_api_rest::RestServer<WindowService, PaginationService>;

/// All services, wired up from the configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    pub window: WindowService,
    pub pagination: PaginationService,
    pub rest_server_config: RestServerConfig,
}

impl Provider {
    pub fn new(config: &Config) -> Self {
        let window_config = WindowConfig {
            max_visible: config.window.max_visible,
        };

        let scope_config = |scope: &paginator_config::PaginationScopeConfig| {
            Arc::new(PaginationScopeConfig {
                page_sizes: scope.page_sizes.clone(),
                default_page_size: scope.default_page_size,
                window: WindowConfig {
                    max_visible: scope.max_visible.unwrap_or(window_config.max_visible),
                },
            })
        };

        let pagination_feature_config = PaginationFeatureConfig {
            events: scope_config(&config.pagination.events),
            resources: scope_config(&config.pagination.resources),
        };

        let window = PageWindowServiceImpl;

        Self {
            window,
            pagination: PaginationServiceImpl::new(window, pagination_feature_config),
            rest_server_config: RestServerConfig {
                window: window_config,
            },
        }
    }

    pub fn rest_server(self) -> RestServer {
        RestServer::new(self.window, self.pagination, self.rest_server_config)
    }
}
