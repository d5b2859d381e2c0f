//! Shared setup for the workflow tests.

pub mod capture_workflow_test;
pub mod history_workflow_test;

use lookup_kit::history::{FileStore, HistoryLimit, HistoryStore};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A file-backed history store in a fresh temporary directory.
///
/// The directory lives as long as the returned guard.
pub fn temp_history(limit: HistoryLimit) -> (TempDir, HistoryStore<FileStore>) {
    init_test_env();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = HistoryStore::new(FileStore::new(temp_dir.path()), limit);
    (temp_dir, store)
}
