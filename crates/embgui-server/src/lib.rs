//! Demo HTTP server for embgui pages.
//!
//! This crate provides a small axum server that shows how a service embeds
//! `embgui-dom`: one [`PageConfig`] is created at startup and shared by all
//! handlers, and every request mints a fresh root node, builds its page and
//! serves the rendered document.
//!
//! # Routes
//!
//! - `GET /` - catalogue of every convenience constructor ("Hello" active)
//! - `GET /world` - dashboard tiles ("World" active)
//! - `GET /app.css` - bundled stylesheet
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use embgui_dom::{MenuItem, PageConfig};
//! use embgui_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8080,
//!         page: Arc::new(PageConfig::new(
//!             "DEMO",
//!             "/app.css",
//!             vec![MenuItem::new("Hello", "/"), MenuItem::new("World", "/world")],
//!         )),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
pub mod demo;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use embgui_dom::PageConfig;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Page template shared by all routes.
    pub page: Arc<PageConfig>,
}

/// Run the server until Ctrl-C is received.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState { page: config.page });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the loaded embgui configuration.
#[must_use]
pub fn server_config_from_config(config: &embgui_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        page: Arc::new(config.page.to_page_config()),
    }
}
