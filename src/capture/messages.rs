//! User-facing export messages.
//!
//! The exporter reports through a [`Notifier`] (the host's toast layer) using
//! strings looked up through a [`Translator`]. [`Catalog`] is a flat key/value
//! table with built-in strings, in every supported locale, for the keys the
//! exporter uses.

use crate::config::{get_config, Locale};
use serde_json::Value;
use std::collections::HashMap;

/// Message key shown after a successful export.
pub const SAVED_KEY: &str = "toast.saved";

/// Message key shown after a failed export. Takes a `{message}` argument.
pub const SAVE_FAILED_KEY: &str = "toast.save_failed";

/// Receives user-visible outcome messages.
pub trait Notifier {
    /// Reports a successful action.
    fn success(&self, message: &str);

    /// Reports a failed action.
    fn error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Notifier that writes messages to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Looks up localized strings.
pub trait Translator {
    /// Returns the string for `key` with `{name}` placeholders replaced from `args`.
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        (**self).translate(key, args)
    }
}

/// Flat translation table keyed by dotted paths such as `toast.saved`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English strings.
    pub fn english() -> Self {
        Self::for_locale(Locale::En)
    }

    /// The built-in strings for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        let (saved, save_failed) = match locale {
            Locale::En => ("Saved", "Save failed: {message}"),
            Locale::Zh => ("已保存", "保存失败：{message}"),
            Locale::ZhTw => ("已儲存", "儲存失敗：{message}"),
            Locale::De => ("Gespeichert", "Speichern fehlgeschlagen: {message}"),
            Locale::Ru => ("Сохранено", "Не удалось сохранить: {message}"),
            Locale::Ja => ("保存しました", "保存に失敗しました: {message}"),
            Locale::Fr => ("Enregistré", "Échec de l'enregistrement : {message}"),
            Locale::Ko => ("저장됨", "저장 실패: {message}"),
        };

        let mut catalog = Self::new();
        catalog.insert(SAVED_KEY, saved);
        catalog.insert(SAVE_FAILED_KEY, save_failed);
        catalog
    }

    /// The built-in strings for the configured locale.
    ///
    /// `requested` is used when the configuration lists it, otherwise the
    /// configured `defaultLocale`.
    pub fn from_config(requested: Option<Locale>) -> Self {
        Self::for_locale(get_config().resolve_locale(requested))
    }

    /// Builds a catalog from a nested JSON object.
    ///
    /// `{"toast": {"saved": "Gespeichert"}}` yields the key `toast.saved`.
    /// Non-string leaves are ignored.
    pub fn from_json(value: &Value) -> Self {
        let mut catalog = Self::new();
        flatten_into(&mut catalog.entries, "", value);
        catalog
    }

    /// Adds or replaces one string.
    pub fn insert(&mut self, key: &str, text: &str) {
        self.entries.insert(key.to_string(), text.to_string());
    }

    /// Returns a catalog where keys from `overrides` replace keys in `self`.
    pub fn merged(mut self, overrides: Catalog) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    /// Returns the raw, uninterpolated string for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten_into(entries, &key, child);
            }
        }
        Value::String(text) if !prefix.is_empty() => {
            entries.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

impl Translator for Catalog {
    /// Unknown keys translate to the key itself.
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.get(key).unwrap_or(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}
