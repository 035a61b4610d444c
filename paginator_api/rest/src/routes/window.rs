use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use paginator_core_window_contracts::PageWindowService;
use paginator_models::window::{MaxVisible, WindowConfig};
use serde::Deserialize;

use crate::{errors::invalid_max_visible, models::ApiPageToken};

pub fn router<S: PageWindowService>(service: Arc<S>, config: WindowConfig) -> Router<()> {
    Router::new()
        .route("/pagination/window", routing::get(window::<S>))
        .with_state((service, config))
}

#[derive(Debug, Deserialize)]
struct WindowQuery {
    current_page: i64,
    total_pages: i64,
    max_visible: Option<i64>,
}

async fn window<S: PageWindowService>(
    State((service, config)): State<(Arc<S>, WindowConfig)>,
    Query(query): Query<WindowQuery>,
) -> Response {
    let max_visible = match query.max_visible {
        Some(max_visible) => match u64::try_from(max_visible).map(MaxVisible::try_new) {
            Ok(Ok(max_visible)) => max_visible,
            _ => return invalid_max_visible(),
        },
        None => config.max_visible,
    };
    let max_visible = i64::try_from(*max_visible).unwrap_or(i64::MAX);

    let tokens = service
        .generate(query.current_page, query.total_pages, max_visible)
        .into_iter()
        .map(ApiPageToken::from)
        .collect::<Vec<_>>();

    Json(tokens).into_response()
}
