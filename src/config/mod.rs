//! Configuration module.
//!
//! Presence colors and rendering density come from an optional TOML file.

pub mod loader;

pub use loader::{
    default_config_path, default_log_path, load_config_file, load_config_with_precedence,
    merge_config, ColorsSection, ConfigError, ConfigFile, ResolvedConfig, CONFIG_ENV_VAR,
};
