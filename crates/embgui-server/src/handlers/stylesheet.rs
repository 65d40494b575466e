//! Bundled stylesheet endpoint.

use axum::http::header;
use axum::response::IntoResponse;

/// Stylesheet covering the classes emitted by the convenience constructors.
const STYLESHEET: &str = include_str!("../../assets/app.css");

/// Handle GET /app.css.
pub(crate) async fn get_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
