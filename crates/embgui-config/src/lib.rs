//! Configuration management for embgui.
//!
//! Parses `embgui.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `page.title`
//! - `page.stylesheet`
//! - `page.nav_link`
//! - `page.menu[].link`

mod expand;

use std::path::{Path, PathBuf};

use embgui_dom::{MenuItem, PageConfig};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override page title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "embgui.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Page template configuration.
    pub page: PageSection,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

/// Page template configuration (`[page]` section).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageSection {
    /// Document title and navigation bar brand text.
    pub title: String,
    /// Stylesheet URL.
    pub stylesheet: String,
    /// Navigation bar theme class.
    pub nav_theme: String,
    /// Navigation bar brand link.
    pub nav_link: String,
    /// Menu entries in display order.
    pub menu: Vec<MenuItem>,
}

impl Default for PageSection {
    fn default() -> Self {
        let defaults = PageConfig::new("EMBDEMO", "/app.css", Vec::new());
        Self {
            title: defaults.title,
            stylesheet: defaults.stylesheet_url,
            nav_theme: defaults.nav_theme,
            nav_link: defaults.nav_link,
            menu: vec![
                MenuItem::new("Hello", "/"),
                MenuItem::new("World", "/world"),
            ],
        }
    }
}

impl PageSection {
    /// Build the page configuration shared by all rendered pages.
    #[must_use]
    pub fn to_page_config(&self) -> PageConfig {
        PageConfig::new(&self.title, &self.stylesheet, self.menu.clone())
            .with_nav_theme(&self.nav_theme)
            .with_nav_link(&self.nav_link)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`page.title`").
        field: String,
        /// Error message (e.g., "${`EMBGUI_TITLE`} is not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `embgui.toml` in current directory and parents,
    /// falling back to the built-in defaults.
    ///
    /// CLI settings are applied after loading, so they take precedence over
    /// config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(title) = &settings.title {
            self.page.title.clone_from(title);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        expand::expand_config(&mut config)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_page()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 lets the OS pick a port, which is never what a config file means
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate page configuration.
    fn validate_page(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.page.title, "page.title")?;
        require_non_empty(&self.page.stylesheet, "page.stylesheet")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.page.title, "EMBDEMO");
        assert_eq!(config.page.stylesheet, "/app.css");
        assert_eq!(config.page.nav_theme, "is-white");
        assert_eq!(config.page.nav_link, "/");
        assert_eq!(
            config.page.menu,
            vec![
                MenuItem::new("Hello", "/"),
                MenuItem::new("World", "/world")
            ]
        );
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.page.title, "EMBDEMO");
    }

    #[test]
    fn test_parse_page_config() {
        let toml = r#"
[page]
title = "Admin"
stylesheet = "/static/bulma.css"
nav_theme = "is-dark"
nav_link = "/gui"

[[page.menu]]
name = "Status"
link = "/status"

[[page.menu]]
name = "Docs"
link = "/docs"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.page.title, "Admin");
        assert_eq!(config.page.stylesheet, "/static/bulma.css");
        assert_eq!(config.page.nav_theme, "is-dark");
        assert_eq!(config.page.nav_link, "/gui");
        assert_eq!(
            config.page.menu,
            vec![
                MenuItem::new("Status", "/status"),
                MenuItem::new("Docs", "/docs")
            ]
        );
    }

    #[test]
    fn test_partial_page_section_keeps_defaults() {
        let toml = r#"
[page]
title = "Admin"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.page.title, "Admin");
        assert_eq!(config.page.nav_theme, "is-white");
        assert_eq!(config.page.menu.len(), 2);
    }

    #[test]
    fn test_to_page_config() {
        let toml = r#"
[page]
title = "Admin"
nav_theme = "is-light"
nav_link = "/gui"
menu = [{ name = "Home", link = "/" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let page = config.page.to_page_config();

        assert_eq!(page.title, "Admin");
        assert_eq!(page.stylesheet_url, "/app.css");
        assert_eq!(page.nav_theme, "is-light");
        assert_eq!(page.nav_link, "/gui");
        assert_eq!(page.menu, vec![MenuItem::new("Home", "/")]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[server]
port = 3000

[page]
title = "From file"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.page.title, "From file");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("EMBGUI_TEST_LOAD_TITLE", "Ops console");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[page]
title = "${EMBGUI_TEST_LOAD_TITLE}"
stylesheet = "${EMBGUI_TEST_LOAD_CSS_UNSET:-/default.css}"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.page.title, "Ops console");
        assert_eq!(config.page.stylesheet, "/default.css");
        unsafe {
            std::env::remove_var("EMBGUI_TEST_LOAD_TITLE");
        }
    }

    #[test]
    fn test_load_missing_env_var_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[[page.menu]]
name = "Docs"
link = "${EMBGUI_TEST_LOAD_DOCS_UNSET}"
"#,
        )
        .unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("page.menu[0].link"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            title: Some("Override".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.page.title, "Override");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.page.title, "EMBDEMO");
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "cannot be empty"]);
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert_validation_error(&config, &["server.port", "cannot be 0"]);
    }

    #[test]
    fn test_validate_page_title_empty() {
        let mut config = Config::default();
        config.page.title = String::new();
        assert_validation_error(&config, &["page.title"]);
    }

    #[test]
    fn test_menu_passed_through_as_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[[page.menu]]
name = "Hello"
link = "/"

[[page.menu]]
name = "Draft"
link = ""

[[page.menu]]
name = "Hello"
link = "/again"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(
            config.page.menu,
            vec![
                MenuItem::new("Hello", "/"),
                MenuItem::new("Draft", ""),
                MenuItem::new("Hello", "/again"),
            ]
        );
    }

    #[test]
    fn test_cli_settings_are_validated() {
        let settings = CliSettings {
            port: Some(0),
            ..Default::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }
}
