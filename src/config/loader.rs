//! Configuration file loading with precedence handling.

use crate::model::Category;
use crate::state::{DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_LIMIT};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "UNITCONV_CONFIG";
/// Environment variable overriding the starting category.
pub const ENV_CATEGORY: &str = "UNITCONV_CATEGORY";
/// Environment variable overriding the realtime flag.
pub const ENV_REALTIME: &str = "UNITCONV_REALTIME";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting from the file or environment has an unusable value.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Setting or environment variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/unitconv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Category selected at startup (case-insensitive name).
    #[serde(default)]
    pub default_category: Option<String>,

    /// Value in the input field at startup.
    #[serde(default)]
    pub default_value: Option<f64>,

    /// Start with real-time conversion on.
    #[serde(default)]
    pub realtime: Option<bool>,

    /// Number of history entries displayed and exported.
    #[serde(default)]
    pub history_limit: Option<usize>,

    /// Maximum number of entries kept in the ledger.
    #[serde(default)]
    pub history_capacity: Option<usize>,

    /// Directory receiving `conversion_history.txt`.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Custom key bindings (future use).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Starting category.
    pub default_category: Category,
    /// Starting value.
    pub default_value: f64,
    /// Real-time conversion at startup.
    pub realtime: bool,
    /// History entries displayed and exported.
    pub history_limit: usize,
    /// History ledger capacity.
    pub history_capacity: usize,
    /// Export directory.
    pub export_dir: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Default tracing filter.
    pub log_level: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_category: Category::Length,
            default_value: 1.0,
            realtime: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            export_dir: PathBuf::from("."),
            log_file_path: default_log_path(),
            log_level: "info".to_string(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/unitconv/unitconv.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("unitconv").join("unitconv.log")
    } else {
        PathBuf::from("unitconv.log")
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
/// Returns `~/.config/unitconv/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("unitconv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `UNITCONV_CONFIG` environment variable
/// 3. Default path `~/.config/unitconv/config.toml`
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{ENV_CONFIG} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// `InvalidValue` if `default_category` names no category or
/// `default_value` is not finite.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let default_category = match config.default_category {
        Some(name) => parse_category("default_category", &name)?,
        None => defaults.default_category,
    };

    let default_value = match config.default_value {
        Some(value) if !value.is_finite() => {
            return Err(ConfigError::InvalidValue {
                key: "default_value".to_string(),
                value: value.to_string(),
            })
        }
        Some(value) => value,
        None => defaults.default_value,
    };

    Ok(ResolvedConfig {
        default_category,
        default_value,
        realtime: config.realtime.unwrap_or(defaults.realtime),
        history_limit: config.history_limit.unwrap_or(defaults.history_limit),
        history_capacity: config.history_capacity.unwrap_or(defaults.history_capacity),
        export_dir: config.export_dir.unwrap_or(defaults.export_dir),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        log_level: config.log_level.unwrap_or(defaults.log_level),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `UNITCONV_CATEGORY`: Override starting category
/// - `UNITCONV_REALTIME`: Override realtime flag (`1/true/yes/on`, `0/false/no/off`)
///
/// # Errors
///
/// `InvalidValue` if a variable is set to something unparseable.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(category) = std::env::var(ENV_CATEGORY) {
        config.default_category = parse_category(ENV_CATEGORY, &category)?;
    }

    if let Ok(realtime) = std::env::var(ENV_REALTIME) {
        config.realtime = parse_flag(&realtime).ok_or_else(|| ConfigError::InvalidValue {
            key: ENV_REALTIME.to_string(),
            value: realtime.clone(),
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `category_override` - Category from `--category`
/// * `realtime_override` - `Some(false)` when `--manual` was given
/// * `export_dir_override` - Directory from `--export-dir`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    category_override: Option<Category>,
    realtime_override: Option<bool>,
    export_dir_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(category) = category_override {
        config.default_category = category;
    }

    if let Some(realtime) = realtime_override {
        config.realtime = realtime;
    }

    if let Some(dir) = export_dir_override {
        config.export_dir = dir;
    }

    config
}

fn parse_category(key: &str, name: &str) -> Result<Category, ConfigError> {
    name.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: name.to_string(),
    })
}

/// Parse a boolean-ish environment value.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
