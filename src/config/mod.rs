//! Configuration management for the lookup helpers.
//!
//! This module provides configuration loading, validation, and access through a singleton pattern.
//! Configuration is read from a settings document under the "lookup" key and merged with defaults.
//! The history bound can also come from the `HISTORY_LIMIT` environment variable.

pub mod schema;

pub use schema::{Locale, LookupConfig};

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Settings key holding the lookup configuration.
pub const SETTINGS_KEY: &str = "lookup";

/// Environment variable overriding the history bound.
pub const HISTORY_LIMIT_ENV: &str = "HISTORY_LIMIT";

/// Global configuration instance.
///
/// This is lazily initialized on first access and can be updated when settings change.
static CONFIG: Lazy<RwLock<LookupConfig>> = Lazy::new(|| RwLock::new(LookupConfig::default()));

/// Loads configuration from a settings document.
///
/// Reads the "lookup" settings, falls back to defaults when they do not parse,
/// validates the result, and updates the global configuration.
///
/// # Example
///
/// ```no_run
/// use lookup_kit::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "lookup": {
///         "historyLimit": 50
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.history_limit, 50);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<LookupConfig, String> {
    let mut config = LookupConfig::default();

    if let Some(lookup_settings) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<LookupConfig>(lookup_settings.clone()) {
            Ok(user_config) => config = user_config,
            Err(e) => {
                log::warn!("Failed to parse lookup settings: {}. Using defaults.", e);
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    Ok(config)
}

/// Applies the `HISTORY_LIMIT` environment variable to the global configuration.
///
/// Unset or unparsable values leave the current bound untouched.
///
/// # Returns
///
/// The configuration after the override was applied.
pub fn load_config_from_env() -> LookupConfig {
    if let Some(limit) = parse_history_limit(std::env::var(HISTORY_LIMIT_ENV).ok().as_deref()) {
        update_config(|config| config.history_limit = limit);
    }
    get_config()
}

fn parse_history_limit(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    match raw.parse::<i64>() {
        Ok(limit) => Some(limit),
        Err(e) => {
            log::warn!("Ignoring {}={:?}: {}", HISTORY_LIMIT_ENV, raw, e);
            None
        }
    }
}

/// Gets the current global configuration.
///
/// Returns a clone of the current configuration, or the defaults if the lock is poisoned.
pub fn get_config() -> LookupConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| LookupConfig::default())
}

/// Updates the configuration in place.
///
/// If the updated configuration fails validation it is reverted to defaults.
///
/// # Example
///
/// ```no_run
/// use lookup_kit::config::update_config;
///
/// update_config(|config| {
///     config.history_limit = 100;
/// });
/// ```
pub fn update_config<F>(updater: F)
where
    F: FnOnce(&mut LookupConfig),
{
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);

        if let Err(e) = config.validate() {
            log::warn!("Configuration validation failed after update: {}", e);
            *config = LookupConfig::default();
        }
    }
}

/// Resets the configuration to defaults.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = LookupConfig::default();
    }
}
