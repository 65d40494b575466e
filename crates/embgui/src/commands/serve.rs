//! `embgui serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use embgui_config::{CliSettings, Config};
use embgui_server::{run_server, server_config_from_config};

use crate::error::CliError;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover embgui.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "EMBGUI_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "EMBGUI_PORT")]
    port: Option<u16>,

    /// Page title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Enable verbose output (request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            title: self.title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        tracing::info!(
            "Starting server on http://{}:{}",
            config.server.host,
            config.server.port
        );
        match &config.config_path {
            Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
            None => tracing::info!("No config file found, using built-in defaults"),
        }
        tracing::info!(
            title = %config.page.title,
            menu_entries = config.page.menu.len(),
            "Page family configured"
        );

        run_server(server_config_from_config(&config))
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
