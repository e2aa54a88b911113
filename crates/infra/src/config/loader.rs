//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Environment variables, when `CALORIGRAM_API_BASE_URL` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults (production backend)
//!
//! An environment variable that is set but malformed is an error; it never
//! silently falls through to a file.
//!
//! ## Environment Variables
//! - `CALORIGRAM_API_BASE_URL`: API base URL including the `/api` prefix (required)
//! - `CALORIGRAM_API_TIMEOUT_SECS`: per-request timeout in seconds
//! - `CALORIGRAM_API_MAX_RETRIES`: attempts per call for transport failures
//! - `CALORIGRAM_API_BACKOFF_MS`: first retry delay in milliseconds
//! - `CALORIGRAM_USER_AGENT`: custom `User-Agent` header
//! - `CALORIGRAM_KEYCHAIN_SERVICE`: keychain service namespace
//! - `CALORIGRAM_LOG_JSON`: emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./calorigram.{json,toml}` then `./config.{json,toml}` (working directory)
//! 2. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use calorigram_domain::{ApiConfig, Config, ConfigError, KeychainConfig, LoggingConfig};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["calorigram.json", "calorigram.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ConfigError` if an environment value is malformed or the probed
/// config file cannot be read or parsed.
pub fn load() -> Result<Config, ConfigError> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(ConfigError::Missing(key)) => {
            tracing::debug!(%key, "Environment incomplete, trying config file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
        Err(e) => Err(e),
    }
}

/// Load configuration from environment variables
///
/// Only `CALORIGRAM_API_BASE_URL` is required; every other value falls back
/// to its default.
///
/// # Errors
/// Returns `ConfigError::Missing` if the base URL is not set and
/// `ConfigError::Invalid` if a value cannot be parsed.
pub fn load_from_env() -> Result<Config, ConfigError> {
    let defaults = ApiConfig::default();

    let api = ApiConfig {
        base_url: env_var("CALORIGRAM_API_BASE_URL")?,
        timeout_seconds: env_parse("CALORIGRAM_API_TIMEOUT_SECS", defaults.timeout_seconds)?,
        max_retries: env_parse("CALORIGRAM_API_MAX_RETRIES", defaults.max_retries)?,
        backoff_base_ms: env_parse("CALORIGRAM_API_BACKOFF_MS", defaults.backoff_base_ms)?,
        user_agent: std::env::var("CALORIGRAM_USER_AGENT").ok(),
    };

    let keychain = std::env::var("CALORIGRAM_KEYCHAIN_SERVICE")
        .map(|service_name| KeychainConfig { service_name })
        .unwrap_or_default();

    let logging = LoggingConfig { json: env_bool("CALORIGRAM_LOG_JSON", false) };

    Ok(Config { api, keychain, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML (detected by file extension); missing sections take their defaults.
///
/// # Errors
/// Returns `ConfigError` if the file is missing, unreadable, or malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::Missing(format!("config file {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConfigError::Missing("config file in any standard location".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConfigError::Parse(format!("Invalid JSON format: {e}"))),
        _ => Err(ConfigError::Parse(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    find_config_in(&dirs)
}

fn find_config_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::Missing(key.to_string()))
}

/// Parse an optional environment variable, `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid {
                key: key.to_string(),
                message: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
