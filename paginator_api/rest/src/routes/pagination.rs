use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use paginator_core_pagination_contracts::{PaginationService, PaginationViewError};
use paginator_models::pagination::{PageQuery, PaginationScope};
use paginator_utils::Apply;

use crate::{
    errors::invalid_page_size,
    models::pagination::{ApiPaginationQuery, ApiPaginationView},
};

pub fn router(service: Arc<impl PaginationService>) -> Router<()> {
    Router::new()
        .route("/pagination/:scope", routing::get(view))
        .with_state(service)
}

async fn view(
    service: State<Arc<impl PaginationService>>,
    Path(scope): Path<PaginationScope>,
    Query(query): Query<ApiPaginationQuery>,
) -> Response {
    let page_query = service
        .default_query(scope)
        .apply_map(query.page, |q, page| PageQuery { page, ..q })
        .apply_map(query.page_size, |q, page_size| PageQuery { page_size, ..q });

    match service.view(scope, page_query, query.total_items) {
        Ok(view) => Json(ApiPaginationView::from(view)).into_response(),
        Err(PaginationViewError::InvalidPageSize(_)) => invalid_page_size(),
    }
}
