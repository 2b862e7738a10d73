//! Shared fixtures for the karat integration tests.

use karat::services::state::AppState;
use karat::{JsonStore, PriceSet};
use tempfile::TempDir;

/// A store rooted in a scratch directory. The caller must keep the `TempDir`
/// alive for the duration of the test so the directory is not deleted
/// prematurely.
pub fn temp_store() -> (JsonStore, TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(tmp_dir.path()).unwrap();
    (store, tmp_dir)
}

#[allow(dead_code)]
pub fn temp_state() -> (AppState, TempDir) {
    let (store, tmp_dir) = temp_store();
    (AppState::new(store), tmp_dir)
}

#[allow(dead_code)]
pub fn sample_prices() -> PriceSet {
    PriceSet {
        gold_without_tax: 5500.0,
        gold_with_tax: 6000.0,
        silver_without_tax: 70.0,
        silver_with_tax: 75.0,
    }
}
