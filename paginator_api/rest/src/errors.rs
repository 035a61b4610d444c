use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

pub fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

pub fn invalid_page_size() -> Response {
    error(StatusCode::BAD_REQUEST, "Invalid page size")
}

pub fn invalid_max_visible() -> Response {
    error(StatusCode::BAD_REQUEST, "Invalid max visible")
}
