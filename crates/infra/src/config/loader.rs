//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the offset variable is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Without any config file, the built-in defaults apply
//!
//! ## Environment Variables
//! - `SLOTWISE_UTC_OFFSET_MINUTES`: Organisation UTC offset (required)
//! - `SLOTWISE_WORK_START`: Fallback working window start, `HH:MM`
//! - `SLOTWISE_WORK_END`: Fallback working window end, `HH:MM`
//! - `SLOTWISE_LOG_LEVEL`: Default log filter directive
//! - `SLOTWISE_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./slotwise.json` or `./slotwise.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use slotwise_domain::constants::ENV_PREFIX;
use slotwise_domain::{Config, LoggingConfig, Result, SchedulingConfig, SchedulingError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables, then from the first
/// config file found by [`probe_config_paths`], then defaults. The result
/// is always validated.
///
/// # Errors
/// Returns `SchedulingError::Config` if:
/// - An environment variable or file holds an invalid value
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path))?,
                None => {
                    tracing::info!("No config file found, using defaults");
                    Config::default()
                }
            }
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `SLOTWISE_UTC_OFFSET_MINUTES` is required; the other variables fall
/// back to their defaults.
///
/// # Errors
/// Returns `SchedulingError::Config` if the offset is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let utc_offset_minutes = env_var("UTC_OFFSET_MINUTES").and_then(|s| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| SchedulingError::Config(format!("Invalid UTC offset: {e}")))
    })?;

    let defaults = Config::default();
    let default_work_start =
        optional_env_var("WORK_START").unwrap_or(defaults.scheduling.default_work_start);
    let default_work_end =
        optional_env_var("WORK_END").unwrap_or(defaults.scheduling.default_work_end);
    let level = optional_env_var("LOG_LEVEL").unwrap_or(defaults.logging.level);
    let json = env_bool("LOG_JSON", defaults.logging.json);

    let config = Config {
        scheduling: SchedulingConfig { utc_offset_minutes, default_work_start, default_work_end },
        logging: LoggingConfig { level, json },
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections and fields take their defaults.
///
/// # Errors
/// Returns `SchedulingError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SchedulingError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SchedulingError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SchedulingError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `SchedulingError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SchedulingError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SchedulingError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SchedulingError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "slotwise.json",
        "slotwise.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Get required environment variable
///
/// # Errors
/// Returns `SchedulingError::Config` if the variable is not set.
fn env_var(suffix: &str) -> Result<String> {
    let key = env_key(suffix);
    std::env::var(&key).map_err(|_| {
        SchedulingError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn optional_env_var(suffix: &str) -> Option<String> {
    std::env::var(env_key(suffix)).ok().filter(|v| !v.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(suffix: &str, default: bool) -> bool {
    std::env::var(env_key(suffix))
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
