//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Page rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] embgui_dom::RenderError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Request failed");

        let (status, body) = match &self {
            Self::Render(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
