//! Query history tracking and persistence.
//!
//! This module keeps a short list of recent lookups so the front-end can
//! offer them again.
//!
//! # Features
//!
//! - Classify each query as domain, IPv4, IPv6, ASN or CIDR
//! - Deduplicate by query text, most recent first
//! - Bounded length, or unbounded when configured with a negative limit
//! - Case-insensitive search over query and tag
//! - Lenient decoding of whatever the storage slot holds
//!
//! # Example
//!
//! ```
//! use lookup_kit::history::{HistoryLimit, HistoryStore, MemoryStore, QueryType};
//!
//! let store = HistoryStore::new(MemoryStore::new(), HistoryLimit::Max(10));
//! store.add("example.com");
//! store.add("AS13335");
//!
//! let items = store.list();
//! assert_eq!(items[0].query, "AS13335");
//! assert_eq!(items[0].query_type, QueryType::Asn);
//! ```

pub mod classify;
pub mod models;
pub mod search;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use classify::{classify, is_asn, is_cidr, is_ipv4, is_ipv6};
pub use models::{decode_history, decode_item, HistoryItem, HistoryLimit, QueryType};
pub use search::{filter_by_type, search_history};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, UnavailableStore};
pub use store::{HistoryStore, HISTORY_KEY};
