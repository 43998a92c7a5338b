//! Configuration file loading with precedence handling.

use crate::view::colors::{
    PresenceColors, DEFAULT_AVAILABLE, DEFAULT_AWAY, DEFAULT_BACKGROUND, DEFAULT_BUSY,
    DEFAULT_INVISIBLE, DEFAULT_OFFLINE, DEFAULT_UNKNOWN,
};
use crate::view::geometry::sanitize_density;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "PRESENCE_DOT_CONFIG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/presence-dot/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Pixels per density unit; sets the border width.
    #[serde(default)]
    pub density: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Presence colors.
    #[serde(default)]
    pub colors: Option<ColorsSection>,
}

/// `[colors]` section.
///
/// Values are color strings: `#RRGGBB` hex or a ratatui color name.
/// ```toml
/// [colors]
/// available = "#4FBF62"
/// busy = "red"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColorsSection {
    /// Available status color.
    #[serde(default)]
    pub available: Option<String>,
    /// Busy status color.
    #[serde(default)]
    pub busy: Option<String>,
    /// Away status color.
    #[serde(default)]
    pub away: Option<String>,
    /// Invisible status color.
    #[serde(default)]
    pub invisible: Option<String>,
    /// Offline status color.
    #[serde(default)]
    pub offline: Option<String>,
    /// Border and punch-out color.
    #[serde(default)]
    pub background: Option<String>,
    /// Color for unrecognized statuses.
    #[serde(default)]
    pub unknown: Option<String>,
}

/// Resolved configuration after applying defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Presence colors.
    pub colors: PresenceColors,
    /// Pixels per density unit.
    pub density: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            colors: PresenceColors::default(),
            density: 1.0,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/presence-dot/presence-dot.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("presence-dot").join("presence-dot.log")
    } else {
        PathBuf::from("presence-dot.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/presence-dot/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("presence-dot").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PRESENCE_DOT_CONFIG` environment variable
/// 3. Default path `~/.config/presence-dot/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// Malformed colors and densities are logged and replaced by their defaults;
/// every other key keeps its configured value.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let colors = config.colors.unwrap_or_default();
    let density = config
        .density
        .map(sanitize_density)
        .unwrap_or(defaults.density);

    ResolvedConfig {
        colors: PresenceColors {
            available: resolve_color("available", colors.available, DEFAULT_AVAILABLE),
            busy: resolve_color("busy", colors.busy, DEFAULT_BUSY),
            away: resolve_color("away", colors.away, DEFAULT_AWAY),
            invisible: resolve_color("invisible", colors.invisible, DEFAULT_INVISIBLE),
            offline: resolve_color("offline", colors.offline, DEFAULT_OFFLINE),
            background: resolve_color("background", colors.background, DEFAULT_BACKGROUND),
            unknown: resolve_color("unknown", colors.unknown, DEFAULT_UNKNOWN),
        },
        density,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

fn resolve_color(key: &str, value: Option<String>, default: Color) -> Color {
    let Some(raw) = value else {
        return default;
    };
    match raw.trim().parse::<Color>() {
        Ok(color) => color,
        Err(_) => {
            warn!(key, value = %raw, "Invalid color in config, using default");
            default
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
