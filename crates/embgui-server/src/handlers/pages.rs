//! Demo page endpoints.
//!
//! Each request mints its own root from the shared page configuration.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::demo;
use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn hello(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let mut page = state.page.new_root(demo::HELLO);
    demo::build_hello(&mut page);
    Ok(Html(page.render_page()?))
}

/// Handle GET /world.
pub(crate) async fn world(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let mut page = state.page.new_root(demo::WORLD);
    demo::build_world(&mut page);
    Ok(Html(page.render_page()?))
}
