//! Configuration schema for the lookup helpers.
//!
//! This module defines the configuration structure and validation logic for all
//! user-configurable settings consumed by the history store and the image exporter.

use crate::capture::CaptureType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Main configuration structure.
///
/// All settings can be supplied under the "lookup" key of a settings document.
/// Missing settings fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupConfig {
    /// Maximum number of queries kept in history.
    ///
    /// Older queries beyond this bound are dropped on insert. A negative
    /// value disables the bound entirely. Defaults to -1 (unbounded).
    #[serde(default = "default_history_limit")]
    pub history_limit: i64,

    /// Locale used when a caller does not request one.
    ///
    /// Must be one of `locales`. Defaults to "en".
    #[serde(default = "default_locale")]
    pub default_locale: Locale,

    /// Locales the front-end offers.
    ///
    /// Defaults to every supported locale. Must not be empty.
    #[serde(default = "default_locales")]
    pub locales: Vec<Locale>,

    /// Image format used by the exporter when none is requested.
    #[serde(default = "default_capture_type")]
    pub default_capture_type: CaptureType,
}

/// Locales the lookup front-end ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh")]
    Zh,
    #[serde(rename = "zh-tw")]
    ZhTw,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "ko")]
    Ko,
}

impl Locale {
    /// Every supported locale, in the order the front-end lists them.
    pub const ALL: [Locale; 8] = [
        Locale::En,
        Locale::Zh,
        Locale::ZhTw,
        Locale::De,
        Locale::Ru,
        Locale::Ja,
        Locale::Fr,
        Locale::Ko,
    ];

    /// Returns the locale code, e.g. `"zh-tw"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::ZhTw => "zh-tw",
            Locale::De => "de",
            Locale::Ru => "ru",
            Locale::Ja => "ja",
            Locale::Fr => "fr",
            Locale::Ko => "ko",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Locale::ALL
            .iter()
            .copied()
            .find(|locale| locale.as_str() == lower)
            .ok_or_else(|| format!("unsupported locale: {}", s))
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            default_locale: default_locale(),
            locales: default_locales(),
            default_capture_type: default_capture_type(),
        }
    }
}

impl LookupConfig {
    /// Validates the configuration and returns errors if any settings are invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.locales.is_empty() {
            return Err("locales must not be empty".to_string());
        }

        if !self.locales.contains(&self.default_locale) {
            return Err(format!(
                "defaultLocale '{}' is not listed in locales",
                self.default_locale
            ));
        }

        // Any history_limit is valid: negative means unbounded.
        Ok(())
    }

    /// Picks the locale for user-facing messages.
    ///
    /// A requested locale is honoured only when it is listed in `locales`;
    /// otherwise `default_locale` is used.
    pub fn resolve_locale(&self, requested: Option<Locale>) -> Locale {
        requested
            .filter(|locale| self.locales.contains(locale))
            .unwrap_or(self.default_locale)
    }
}

// Default value functions for serde

fn default_history_limit() -> i64 {
    -1
}

fn default_locale() -> Locale {
    Locale::En
}

fn default_locales() -> Vec<Locale> {
    Locale::ALL.to_vec()
}

fn default_capture_type() -> CaptureType {
    CaptureType::default()
}
