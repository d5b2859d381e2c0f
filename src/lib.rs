//! Client-side helpers for a WHOIS/RDAP lookup front-end.
//!
//! This crate keeps a short local history of lookups and exports rendered
//! result panels as images.
//!
//! # Architecture
//!
//! - **history**: query classification and the bounded, deduplicated history
//!   store over an injected key-value slot
//! - **capture**: encoding a rendered element as PNG, JPEG or SVG and handing
//!   it to a download sink, with translated success/failure notices
//! - **config**: global settings (history bound, locales, default export format)
//!
//! The two feature modules share no state. A UI calls
//! [`history::HistoryStore::add`] when a lookup is submitted and
//! [`capture::ImageCapture::save`] when the user exports a result.
//!
//! # Usage
//!
//! ```
//! use lookup_kit::history::{HistoryLimit, HistoryStore, MemoryStore};
//!
//! let store = HistoryStore::new(MemoryStore::new(), HistoryLimit::Max(2));
//! store.add("a.example");
//! store.add("b.example");
//! store.add("c.example");
//!
//! let queries: Vec<_> = store.list().into_iter().map(|i| i.query).collect();
//! assert_eq!(queries, vec!["c.example", "b.example"]);
//! ```

pub mod capture;
pub mod config;
pub mod history;

pub use capture::{CaptureError, CaptureType};
pub use history::{classify, HistoryItem, HistoryStore, QueryType};
