use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use strum_macros::{Display, EnumString};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SVG_PATH: &str = "table.html";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

/// How the terminal front-end draws the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RenderMode {
    /// Text nodes printed to the terminal
    #[default]
    Text,
    /// SVG cards written to an HTML file
    Svg,
}

/// Runtime configuration of the table client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub render_mode: RenderMode,
    pub svg_path: PathBuf,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            render_mode: RenderMode::default(),
            svg_path: PathBuf::from(DEFAULT_SVG_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Reads `OFC_API_URL`, `OFC_RENDER`, `OFC_SVG_PATH` and
    /// `OFC_TIMEOUT_SECS`, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("OFC_API_URL") {
            if url.trim().is_empty() {
                return Err(ConfigError::Empty { key: "OFC_API_URL" });
            }
            config.api_url = url.trim().to_string();
        }

        if let Some(mode) = lookup("OFC_RENDER") {
            config.render_mode =
                RenderMode::from_str(mode.trim()).map_err(|_| ConfigError::Invalid {
                    key: "OFC_RENDER",
                    value: mode.clone(),
                })?;
        }

        if let Some(path) = lookup("OFC_SVG_PATH") {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty { key: "OFC_SVG_PATH" });
            }
            config.svg_path = PathBuf::from(path);
        }

        if let Some(secs) = lookup("OFC_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::Invalid {
                    key: "OFC_TIMEOUT_SECS",
                    value: secs.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
