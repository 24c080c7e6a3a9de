use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use page_core::DelayedSubmitter;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortfolioSettings {
    pub contact_endpoint: Option<String>,
    pub submit_delay_ms: u64,
    pub window_title: String,
    pub log_filter: String,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            submit_delay_ms: DelayedSubmitter::DEFAULT_DELAY.as_millis() as u64,
            window_title: "Alex Chen | 3D Artist".into(),
            log_filter: "info".into(),
        }
    }
}

impl PortfolioSettings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Values supplied on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub contact_endpoint: Option<String>,
    pub submit_delay_ms: Option<u64>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid {key} '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Defaults, then `config_path` (or `portfolio.toml` when present), then the
/// environment, then `overrides`.
pub fn load_settings(
    config_path: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<PortfolioSettings, SettingsError> {
    load_settings_with_env(config_path, overrides, |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_with_env(
    config_path: Option<&Path>,
    overrides: &SettingsOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PortfolioSettings, SettingsError> {
    let mut settings = match config_path {
        Some(path) => read_settings_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                read_settings_file(default_path)?
            } else {
                PortfolioSettings::default()
            }
        }
    };

    if let Some(v) = env("PORTFOLIO_CONTACT_ENDPOINT") {
        settings.contact_endpoint = Some(v);
    }
    if let Some(v) = env("APP__CONTACT_ENDPOINT") {
        settings.contact_endpoint = Some(v);
    }
    if let Some(v) = env("APP__SUBMIT_DELAY_MS") {
        settings.submit_delay_ms = parse_delay_ms(&v)?;
    }
    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }

    if let Some(endpoint) = &overrides.contact_endpoint {
        settings.contact_endpoint = Some(endpoint.clone());
    }
    if let Some(delay_ms) = overrides.submit_delay_ms {
        settings.submit_delay_ms = delay_ms;
    }

    settings.contact_endpoint = normalize_endpoint(settings.contact_endpoint.take())?;
    Ok(settings)
}

pub fn parse_settings(raw: &str, path: &Path) -> Result<PortfolioSettings, SettingsError> {
    toml::from_str(raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_settings_file(path: &Path) -> Result<PortfolioSettings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&raw, path)
}

fn parse_delay_ms(raw: &str) -> Result<u64, SettingsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|err| SettingsError::Invalid {
            key: "submit_delay_ms",
            value: raw.to_string(),
            reason: err.to_string(),
        })
}

/// Blank endpoints mean "not configured".
fn normalize_endpoint(raw: Option<String>) -> Result<Option<String>, SettingsError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = Url::parse(trimmed).map_err(|err| SettingsError::Invalid {
        key: "contact_endpoint",
        value: raw.clone(),
        reason: err.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SettingsError::Invalid {
            key: "contact_endpoint",
            value: raw.clone(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
