use std::{net::IpAddr, sync::Arc};

use axum::Router;
use paginator_core_pagination_contracts::PaginationService;
use paginator_core_window_contracts::PageWindowService;
use paginator_models::window::WindowConfig;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Window, Pagination> {
    window: Window,
    pagination: Pagination,
    config: RestServerConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct RestServerConfig {
    /// Used by the window endpoint if the request does not specify a size.
    pub window: WindowConfig,
}

impl<Window, Pagination> RestServer<Window, Pagination>
where
    Window: PageWindowService,
    Pagination: PaginationService,
{
    pub fn new(window: Window, pagination: Pagination, config: RestServerConfig) -> Self {
        Self {
            window,
            pagination,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::window::router(
                Arc::new(self.window),
                self.config.window,
            ))
            .merge(routes::pagination::router(Arc::new(self.pagination)));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
