// Configuration loader
// Loads settings from ~/.solace/config.toml, then applies SOLACE_* overrides

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::errors::SolaceError;

/// Default config location: ~/.solace/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".solace").join("config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is
/// used when present and built-in defaults otherwise. Environment
/// overrides are applied last, then the result is validated.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => match default_config_path() {
            Some(default) if default.exists() => load_from_file(&default)?,
            _ => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok())
        .context("Invalid SOLACE_* environment override")?;
    config.validate()?;

    Ok(config)
}

/// Parse a TOML config file
pub fn load_from_file(path: &Path) -> std::result::Result<Config, SolaceError> {
    let contents = fs::read_to_string(path).map_err(|source| SolaceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = toml::from_str(&contents).map_err(|source| SolaceError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Apply overrides from `lookup` (normally the process environment)
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> std::result::Result<(), SolaceError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("SOLACE_TYPING_DELAY_MIN_MS") {
        config.typing_delay_min_ms = parse_millis("SOLACE_TYPING_DELAY_MIN_MS", &value)?;
    }
    if let Some(value) = lookup("SOLACE_TYPING_DELAY_MAX_MS") {
        config.typing_delay_max_ms = parse_millis("SOLACE_TYPING_DELAY_MAX_MS", &value)?;
    }
    if let Some(value) = lookup("SOLACE_CRISIS_KEYWORDS") {
        if !value.trim().is_empty() {
            config.crisis_keywords_path = Some(PathBuf::from(value.trim()));
        }
    }
    if lookup("NO_COLOR").is_some() {
        config.color = false;
    }
    Ok(())
}

fn parse_millis(key: &str, value: &str) -> std::result::Result<u64, SolaceError> {
    value
        .trim()
        .parse()
        .map_err(|_| SolaceError::InvalidConfig(format!("{} must be milliseconds, got '{}'", key, value)))
}
