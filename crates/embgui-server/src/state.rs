//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use embgui_dom::PageConfig;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page template every request mints its root from.
    pub(crate) page: Arc<PageConfig>,
}
