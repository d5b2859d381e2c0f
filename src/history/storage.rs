//! Key-value storage backing the query history.
//!
//! The history lives in a single string slot. [`KeyValueStore`] is the
//! capability the store is constructed with, so the same history logic runs
//! against an in-memory map in tests, a directory of JSON files on a desktop,
//! or a host-provided facility when embedded.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Errors raised by a storage backend.
///
/// The history store never surfaces these; they are logged and absorbed.
#[derive(Debug)]
pub enum StorageError {
    /// The storage facility is missing or refused access.
    Unavailable(String),

    /// The key cannot be used with this backend.
    InvalidKey(String),

    /// Error occurred reading or writing the backing file.
    Io(std::io::Error),

    /// The value could not be serialized before writing.
    Serialization(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(reason) => write!(f, "Storage unavailable: {}", reason),
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: {:?}", key),
            StorageError::Io(err) => write!(f, "Storage I/O error: {}", err),
            StorageError::Serialization(err) => {
                write!(f, "Storage serialization error: {}", err)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(err) => Some(err),
            StorageError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err)
    }
}

/// A string key-value facility.
pub trait KeyValueStore {
    /// Reads a slot. `Ok(None)` means the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a slot, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-process storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already populated.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.write() {
            slots.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Returns the raw contents of a slot.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.read().ok()?.get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .read()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage for environments that have no key-value facility.
///
/// Every access fails with [`StorageError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("no storage facility".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("no storage facility".to_string()))
    }
}

/// Directory-backed storage: each key is stored in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store in the default per-user configuration directory.
    ///
    /// `~/.config/lookup-kit` on Unix-like systems, or the equivalent on Windows.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(default_storage_dir()?))
    }

    /// Returns the directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        // Write to a temporary file first, then replace
        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = fs::File::create(&temp_path)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.flush()?;
        drop(temp_file);

        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

/// Resolves the default storage directory without creating it.
pub fn default_storage_dir() -> Result<PathBuf, StorageError> {
    let config_dir = if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".config")
    } else if let Some(user_profile) = std::env::var_os("USERPROFILE") {
        PathBuf::from(user_profile).join("AppData").join("Roaming")
    } else {
        return Err(StorageError::Unavailable(
            "could not determine home directory".to_string(),
        ));
    };

    Ok(config_dir.join("lookup-kit"))
}
