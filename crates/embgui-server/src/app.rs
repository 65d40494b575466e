//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::pages::hello))
        .route("/world", get(handlers::pages::world))
        .route("/app.css", get(handlers::stylesheet::get_stylesheet))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(TraceLayer::new_for_http())
        .layer(security::security_headers())
        .with_state(state)
}
