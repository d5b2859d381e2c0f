//! Data models for query history.
//!
//! This module defines the persisted history entry, the closed set of query
//! tags, the configured history bound, and the lenient decoder that turns
//! untyped slot contents back into entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Classification tag attached to every stored query.
///
/// The classifier only produces the five known tags. Entries written by
/// other clients may carry any string; those are kept as [`QueryType::Other`]
/// so they survive a rewrite of the slot unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryType {
    /// Anything that is not recognised as one of the address forms below.
    Domain,
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// Full eight-group IPv6 address.
    Ipv6,
    /// Autonomous system number, e.g. `AS13335`.
    Asn,
    /// IPv4 network in CIDR notation.
    Cidr,
    /// A stored tag outside the known set, verbatim.
    Other(String),
}

impl QueryType {
    /// Every tag the classifier produces, in precedence order with the fallback last.
    pub const ALL: [QueryType; 5] = [
        QueryType::Ipv4,
        QueryType::Ipv6,
        QueryType::Asn,
        QueryType::Cidr,
        QueryType::Domain,
    ];

    /// Returns the tag as persisted, e.g. `"ipv4"`.
    pub fn as_str(&self) -> &str {
        match self {
            QueryType::Domain => "domain",
            QueryType::Ipv4 => "ipv4",
            QueryType::Ipv6 => "ipv6",
            QueryType::Asn => "asn",
            QueryType::Cidr => "cidr",
            QueryType::Other(tag) => tag,
        }
    }

    /// Returns `true` for the tags the classifier produces.
    pub fn is_known(&self) -> bool {
        !matches!(self, QueryType::Other(_))
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one of the known tags, ignoring case.
impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown query type: {}", s))
    }
}

/// Maps a stored tag back to a variant. Only exact tag names are known;
/// everything else becomes [`QueryType::Other`].
impl From<String> for QueryType {
    fn from(tag: String) -> Self {
        QueryType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == tag)
            .unwrap_or(QueryType::Other(tag))
    }
}

impl From<QueryType> for String {
    fn from(query_type: QueryType) -> Self {
        match query_type {
            QueryType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// A single entry in the query history.
///
/// Serialized with camelCase keys:
/// `{"query": "example.com", "timestamp": 1700000000000, "queryType": "domain"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// The trimmed lookup subject.
    pub query: String,

    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,

    /// Tag assigned by the classifier when the entry was created.
    pub query_type: QueryType,
}

impl HistoryItem {
    /// Creates an entry, trimming the query.
    pub fn new(query: &str, timestamp: i64, query_type: QueryType) -> Self {
        Self {
            query: query.trim().to_string(),
            timestamp,
            query_type,
        }
    }

    /// Returns the creation time as a UTC datetime, if it is in range.
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        use chrono::TimeZone;
        chrono::Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

/// Configured bound on the number of retained entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryLimit {
    /// Never truncate.
    #[default]
    Unbounded,
    /// Keep at most this many entries.
    Max(usize),
}

impl HistoryLimit {
    /// Builds a bound from the signed configuration value; negative means unbounded.
    pub fn from_config_value(limit: i64) -> Self {
        match usize::try_from(limit) {
            Ok(max) => HistoryLimit::Max(max),
            Err(_) => HistoryLimit::Unbounded,
        }
    }

    /// Drops entries past the bound, keeping the front of the list.
    pub fn apply(&self, items: &mut Vec<HistoryItem>) {
        if let HistoryLimit::Max(max) = *self {
            items.truncate(max);
        }
    }
}

/// Validates one element of the persisted array.
///
/// The element must be an object with a string `query`, a numeric `timestamp`
/// and a string `queryType`. The query is trimmed and must be non-empty
/// afterwards. Unknown tags are kept as [`QueryType::Other`]. Fractional
/// timestamps are truncated to whole milliseconds.
pub fn decode_item(value: &Value) -> Option<HistoryItem> {
    let object = value.as_object()?;

    let query = object.get("query")?.as_str()?.trim();
    if query.is_empty() {
        return None;
    }

    let timestamp = match object.get("timestamp")? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        _ => return None,
    };

    let query_type = QueryType::from(object.get("queryType")?.as_str()?.to_string());

    Some(HistoryItem {
        query: query.to_string(),
        timestamp,
        query_type,
    })
}

/// Decodes the raw slot contents into entries, dropping anything malformed.
///
/// Absent, empty, unparsable or non-array contents all decode to an empty list.
pub fn decode_history(raw: Option<&str>) -> Vec<HistoryItem> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() && raw != "[]" => raw,
        _ => return Vec::new(),
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => values.iter().filter_map(decode_item).collect(),
        Ok(_) => Vec::new(),
        Err(e) => {
            log::warn!("Failed to parse stored history: {}", e);
            Vec::new()
        }
    }
}
