//! The query history store.
//!
//! [`HistoryStore`] keeps a bounded, deduplicated, most-recent-first list of
//! queries in a single storage slot. Every operation re-reads the slot and,
//! for writes, persists the whole list again. There is no cache and no
//! coordination between callers: two writers sharing a slot can overwrite
//! each other's changes.
//!
//! Storage failures never reach the caller. Reads degrade to an empty list
//! and writes are dropped, with a warning logged either way.

use super::classify::classify;
use super::models::{decode_history, HistoryItem, HistoryLimit, QueryType};
use super::search::{filter_by_type, search_history};
use super::storage::{KeyValueStore, StorageError};
use crate::config::get_config;
use chrono::Utc;

/// Storage key holding the serialized history.
pub const HISTORY_KEY: &str = "history";

/// Bounded query history over a key-value slot.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    limit: HistoryLimit,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Creates a store over `storage` with the given bound.
    pub fn new(storage: S, limit: HistoryLimit) -> Self {
        Self { storage, limit }
    }

    /// Creates a store using the `historyLimit` from the global configuration.
    pub fn from_config(storage: S) -> Self {
        let limit = HistoryLimit::from_config_value(get_config().history_limit);
        Self::new(storage, limit)
    }

    /// Returns the configured bound.
    pub fn limit(&self) -> HistoryLimit {
        self.limit
    }

    /// Returns the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Lists stored queries, most recent first.
    ///
    /// Malformed entries are dropped. Returns an empty list when the slot is
    /// absent, unreadable or not a JSON array.
    pub fn list(&self) -> Vec<HistoryItem> {
        match self.storage.get(HISTORY_KEY) {
            Ok(raw) => decode_history(raw.as_deref()),
            Err(e) => {
                log::warn!("Failed to read history: {}", e);
                Vec::new()
            }
        }
    }

    /// Records a query with the current time.
    ///
    /// Empty or whitespace-only queries are ignored.
    pub fn add(&self, query: &str) {
        self.add_at(query, Utc::now().timestamp_millis());
    }

    /// Records a query with an explicit timestamp in milliseconds.
    ///
    /// The trimmed query is classified, any previous entry with the same text
    /// is removed, the new entry goes to the front, and the list is cut to the
    /// configured bound before being persisted.
    pub fn add_at(&self, query: &str, timestamp: i64) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let mut history = match self.read_for_update() {
            Some(history) => history,
            None => return,
        };

        let item = HistoryItem::new(query, timestamp, classify(query));
        history.retain(|existing| existing.query != item.query);
        history.insert(0, item);
        self.limit.apply(&mut history);

        if let Err(e) = self.persist(&history) {
            log::warn!("Failed to save history: {}", e);
        }
    }

    /// Removes every entry whose query equals the trimmed input.
    ///
    /// Empty input and unknown queries leave the list unchanged.
    pub fn remove(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let mut history = match self.read_for_update() {
            Some(history) => history,
            None => return,
        };

        history.retain(|existing| existing.query != query);

        if let Err(e) = self.persist(&history) {
            log::warn!("Failed to remove history entry: {}", e);
        }
    }

    /// Case-insensitive substring search over query text and tag name.
    ///
    /// An empty term returns the full list.
    pub fn search(&self, term: &str) -> Vec<HistoryItem> {
        search_history(term, &self.list())
    }

    /// Returns the entries carrying the given tag, most recent first.
    pub fn filter_by_type(&self, query_type: QueryType) -> Vec<HistoryItem> {
        filter_by_type(query_type, &self.list())
    }

    /// Empties the history. The slot is kept and holds `[]`.
    pub fn clear(&self) {
        if let Err(e) = self.storage.set(HISTORY_KEY, "[]") {
            log::warn!("Failed to clear history: {}", e);
        }
    }

    /// Number of valid stored entries.
    pub fn len(&self) -> usize {
        self.list().len()
    }

    /// Returns `true` when no valid entries are stored.
    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    // A failed read skips the write and leaves the slot untouched.
    fn read_for_update(&self) -> Option<Vec<HistoryItem>> {
        match self.storage.get(HISTORY_KEY) {
            Ok(raw) => Some(decode_history(raw.as_deref())),
            Err(e) => {
                log::warn!("History storage unavailable, skipping write: {}", e);
                None
            }
        }
    }

    fn persist(&self, history: &[HistoryItem]) -> Result<(), StorageError> {
        let json = serde_json::to_string(history)?;
        self.storage.set(HISTORY_KEY, &json)
    }
}
