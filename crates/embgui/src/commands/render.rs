//! `embgui render` command implementation.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use embgui_config::Config;
use embgui_server::demo::{self, DemoPage};

use crate::error::CliError;

/// Page to render.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum PageArg {
    Hello,
    World,
}

impl From<PageArg> for DemoPage {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Hello => Self::Hello,
            PageArg::World => Self::World,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover embgui.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Demo page to render.
    #[arg(long, value_enum, default_value = "hello")]
    page: PageArg,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the page cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let page = Arc::new(config.page.to_page_config());

        let html = demo::render(&page, self.page.into())?;
        tracing::debug!(bytes = html.len(), page = ?self.page, "Rendered demo page");

        std::io::stdout().lock().write_all(html.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_arg_maps_to_demo_page() {
        assert_eq!(DemoPage::from(PageArg::Hello), DemoPage::Hello);
        assert_eq!(DemoPage::from(PageArg::World), DemoPage::World);
    }
}
