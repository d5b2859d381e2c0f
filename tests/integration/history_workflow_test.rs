//! History workflows against a file-backed slot.
//!
//! Each store here reads and writes `<tempdir>/history.json`, so these tests
//! also cover what the UI sees after a restart.

use super::temp_history;
use lookup_kit::history::{
    FileStore, HistoryLimit, HistoryStore, KeyValueStore, QueryType, HISTORY_KEY,
};
use std::fs;

fn queries(store: &HistoryStore<FileStore>) -> Vec<String> {
    store.list().into_iter().map(|item| item.query).collect()
}

#[test]
fn test_first_write_creates_slot_file() {
    let (temp_dir, store) = temp_history(HistoryLimit::Unbounded);
    let slot = temp_dir.path().join("history.json");

    assert!(!slot.exists());
    assert!(store.list().is_empty());

    store.add("example.com");

    let raw = fs::read_to_string(&slot).expect("slot should be written");
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["query"], "example.com");
    assert_eq!(parsed[0]["queryType"], "domain");
    assert!(parsed[0]["timestamp"].is_i64());
}

#[test]
fn test_duplicate_insert_moves_to_front() {
    let (_temp_dir, store) = temp_history(HistoryLimit::Unbounded);

    store.add_at("x", 1_000);
    store.add_at("y", 2_000);
    store.add_at("x", 3_000);

    let items = store.list();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].query, "x");
    assert_eq!(items[0].timestamp, 3_000);
    assert_eq!(items[1].query, "y");
}

#[test]
fn test_bound_keeps_most_recent() {
    let (_temp_dir, store) = temp_history(HistoryLimit::Max(2));

    store.add("a");
    store.add("b");
    store.add("c");

    assert_eq!(queries(&store), vec!["c", "b"]);
}

#[test]
fn test_unbounded_never_truncates() {
    let (_temp_dir, store) = temp_history(HistoryLimit::from_config_value(-1));

    for i in 0..250 {
        store.add(&format!("host{}.example", i));
    }

    assert_eq!(store.len(), 250);
    assert_eq!(store.list()[0].query, "host249.example");
}

#[test]
fn test_zero_bound_stores_nothing() {
    let (_temp_dir, store) = temp_history(HistoryLimit::Max(0));

    store.add("example.com");

    assert!(store.is_empty());
}

#[test]
fn test_whitespace_query_is_not_stored() {
    let (temp_dir, store) = temp_history(HistoryLimit::Unbounded);

    store.add("   ");
    store.add("");

    assert!(store.is_empty());
    assert!(!temp_dir.path().join("history.json").exists());
}

#[test]
fn test_queries_are_trimmed_and_classified() {
    let (_temp_dir, store) = temp_history(HistoryLimit::Unbounded);

    store.add("  8.8.8.8 ");
    store.add("AS15169");
    store.add("10.0.0.0/8");
    store.add("2001:0db8:0000:0000:0000:ff00:0042:8329");
    store.add("example.org");

    let tags: Vec<_> = store
        .list()
        .into_iter()
        .map(|item| (item.query, item.query_type))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("example.org".to_string(), QueryType::Domain),
            (
                "2001:0db8:0000:0000:0000:ff00:0042:8329".to_string(),
                QueryType::Ipv6
            ),
            ("10.0.0.0/8".to_string(), QueryType::Cidr),
            ("AS15169".to_string(), QueryType::Asn),
            ("8.8.8.8".to_string(), QueryType::Ipv4),
        ]
    );
}

#[test]
fn test_remove_missing_query_is_noop() {
    let (_temp_dir, store) = temp_history(HistoryLimit::Unbounded);
    store.add("a");
    store.add("b");

    store.remove("zzz");
    assert_eq!(queries(&store), vec!["b", "a"]);

    store.remove(" a ");
    assert_eq!(queries(&store), vec!["b"]);
}

#[test]
fn test_search_matches_query_or_tag() {
    let (_temp_dir, store) = temp_history(HistoryLimit::Unbounded);
    store.add("EXAMPLE.com");
    store.add("1.1.1.1");

    let by_tag = store.search("ipv4");
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].query, "1.1.1.1");

    let by_query = store.search("example");
    assert_eq!(by_query.len(), 1);
    assert_eq!(by_query[0].query, "EXAMPLE.com");

    assert_eq!(store.search("").len(), 2);
}

#[test]
fn test_malformed_slot_keeps_valid_entries() {
    let (temp_dir, store) = temp_history(HistoryLimit::Unbounded);
    fs::write(
        temp_dir.path().join("history.json"),
        r#"[{"query":"a"},"garbage",123,{"query":"ok.example","timestamp":5,"queryType":"domain"}]"#,
    )
    .unwrap();

    let items = store.list();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].query, "ok.example");

    store.add("new.example");
    assert_eq!(queries(&store), vec!["new.example", "ok.example"]);
}

#[test]
fn test_unparsable_slot_is_replaced_on_write() {
    let (temp_dir, store) = temp_history(HistoryLimit::Unbounded);
    fs::write(temp_dir.path().join("history.json"), "{not json").unwrap();

    assert!(store.list().is_empty());

    store.add("example.com");
    assert_eq!(queries(&store), vec!["example.com"]);
}

#[test]
fn test_clear_writes_empty_array() {
    let (temp_dir, store) = temp_history(HistoryLimit::Unbounded);
    store.add("a");
    store.add("b");

    store.clear();

    assert!(store.list().is_empty());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("history.json")).unwrap(),
        "[]"
    );
    assert_eq!(
        store.storage().get(HISTORY_KEY).unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn test_history_survives_reopen() {
    let (temp_dir, store) = temp_history(HistoryLimit::Max(10));
    store.add("a.example");
    store.add("b.example");
    drop(store);

    let reopened = HistoryStore::new(FileStore::new(temp_dir.path()), HistoryLimit::Max(1));
    assert_eq!(queries(&reopened), vec!["b.example", "a.example"]);

    // A smaller bound only applies on the next insert.
    reopened.add("c.example");
    assert_eq!(queries(&reopened), vec!["c.example"]);
}
