//! `${VAR}` references in `embgui.toml` string values.
//!
//! Expanded fields: `server.host`, `page.title`, `page.stylesheet`,
//! `page.nav_link` and every `page.menu[i].link`. Menu names and the nav
//! theme are taken literally. Bare `$VAR` is never touched, so relative links
//! such as `$HOME/x` survive unchanged.

use std::env::VarError;

use crate::{Config, ConfigError};

/// Expand every expandable field of `config` from the process environment.
pub(crate) fn expand_config(config: &mut Config) -> Result<(), ConfigError> {
    expand_config_with(config, |name| std::env::var(name))
}

fn expand_config_with<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut fields: Vec<(String, &mut String)> = vec![
        ("server.host".to_owned(), &mut config.server.host),
        ("page.title".to_owned(), &mut config.page.title),
        ("page.stylesheet".to_owned(), &mut config.page.stylesheet),
        ("page.nav_link".to_owned(), &mut config.page.nav_link),
    ];
    fields.extend(
        config
            .page
            .menu
            .iter_mut()
            .enumerate()
            .map(|(i, item)| (format!("page.menu[{i}].link"), &mut item.link)),
    );

    for (field, value) in fields {
        if let Some(expanded) = expand_value(value, &field, &lookup)? {
            *value = expanded;
        }
    }
    Ok(())
}

/// Expand one value. `None` means the value holds no `${` reference.
///
/// `${VAR:-default}` falls back to `default` whenever the lookup fails.
fn expand_value<F>(value: &str, field: &str, lookup: &F) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    if !value.contains("${") {
        return Ok(None);
    }

    shellexpand::env_with_context(value, |name| lookup(name).map(Some))
        .map(|expanded| Some(expanded.into_owned()))
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: match e.cause {
                VarError::NotPresent => format!("${{{}}} is not set", e.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid UTF-8", e.var_name),
            },
        })
}
