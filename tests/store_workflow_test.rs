//! Store Lifecycle Integration Tests
//!
//! Tests for the settings store lifecycle:
//! - Initialization with and without a persisted blob
//! - Save / reload round-trips
//! - Shallow-merge semantics on reload
//! - Refresh listener notification

mod common;

use common::{read_persisted_blob, TestFixture};
use fire_settings::{AppData, FileStorage, SettingsStore};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use time::macros::date;

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_initialize_without_blob_yields_defaults() {
    let fixture = TestFixture::new();
    let data = fixture.store.snapshot();

    assert_eq!(data, AppData::default());
    assert_eq!(data.config.period, 20);
    assert_eq!(data.config.times, 100);
    assert_eq!(data.config.birth_date, date!(2000 - 01 - 01));
    assert_eq!(data.config.cash, 0.0);
    assert_eq!(data.config.inflation_rate, 2.0);
}

#[test]
fn test_initialize_hydrates_from_blob() {
    let fixture = TestFixture::with_persisted_blob(
        r#"{"config":{"period":45,"times":100,"birthDate":"1985-03-20","cash":500.0,"inflationRate":2.0},"stocks":[{"ticker":"VT"}]}"#,
    );
    let data = fixture.store.snapshot();

    assert_eq!(data.config.period, 45);
    assert_eq!(data.config.birth_date, date!(1985 - 03 - 20));
    assert_eq!(data.stocks, vec![json!({"ticker": "VT"})]);
    // Sequences absent from the blob stay at their default (empty)
    assert!(data.income.is_empty());
}

#[test]
fn test_initialize_with_corrupt_blob_falls_back_to_defaults() {
    let fixture = TestFixture::with_persisted_blob("{not json at all");

    assert_eq!(fixture.store.snapshot(), AppData::default());
}

#[test]
fn test_initialize_with_non_object_blob_falls_back_to_defaults() {
    let fixture = TestFixture::with_persisted_blob(r#"[1, 2, 3]"#);

    assert_eq!(fixture.store.snapshot(), AppData::default());
}

#[test]
fn test_initialize_keeps_unknown_top_level_keys() {
    let fixture =
        TestFixture::with_persisted_blob(r#"{"config":{"period":20},"pension":[{"age":65}]}"#);

    let data = fixture.store.snapshot();
    assert_eq!(data.extra["pension"], json!([{"age": 65}]));
}

// =============================================================================
// Save / Reload
// =============================================================================

#[test]
fn test_save_persists_current_data() {
    let fixture = TestFixture::new();

    fixture.store.save().unwrap();

    let blob = read_persisted_blob(&fixture).expect("blob should exist after save");
    assert_eq!(blob["config"]["period"], json!(20));
    assert_eq!(blob["config"]["birthDate"], json!("2000-01-01"));
}

#[test]
fn test_save_then_reload_roundtrip_leaves_data_unchanged() {
    let fixture = TestFixture::new();

    fixture.store.update(|data| {
        data.config.period = 35;
        data.config.cash = 12345.67;
        data.life_cost.push(json!({"monthly": 200000}));
    });

    let before = fixture.store.snapshot();
    fixture.store.save().unwrap();
    fixture.store.reload().unwrap();

    assert_eq!(fixture.store.snapshot(), before);
}

#[test]
fn test_reload_without_blob_fails() {
    let fixture = TestFixture::new();

    let err = fixture.store.reload().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_reload_merges_only_keys_present_in_blob() {
    let fixture = TestFixture::with_persisted_blob(r#"{"config":{"period":50}}"#);

    // In-memory edit to a key the blob does not contain
    fixture
        .store
        .update(|data| data.income.push(json!({"salary": 400})));

    fixture.store.reload().unwrap();

    let data = fixture.store.snapshot();
    assert_eq!(data.config.period, 50);
    // income was absent from the blob, so the in-memory value survives
    assert_eq!(data.income.len(), 1);
}

#[test]
fn test_reload_with_corrupt_blob_leaves_data_unchanged() {
    let fixture = TestFixture::new();

    fixture.store.update(|data| data.config.times = 777);
    std::fs::write(fixture.blob_path(), "%%%").unwrap();

    assert!(fixture.store.reload().is_err());
    assert_eq!(fixture.store.snapshot().config.times, 777);
}

#[test]
fn test_reload_notifies_registered_listeners() {
    let fixture = TestFixture::with_persisted_blob(r#"{"config":{"period":25}}"#);

    let seen_period = Arc::new(AtomicUsize::new(0));
    let calls = Arc::new(AtomicUsize::new(0));

    let p = seen_period.clone();
    fixture.store.events().register("config", move |data| {
        p.store(data.config.period as usize, Ordering::SeqCst);
    });
    let c = calls.clone();
    fixture.store.events().register("stocks", move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });

    fixture.store.reload().unwrap();

    assert_eq!(seen_period.load(Ordering::SeqCst), 25);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_reload_does_not_notify() {
    let fixture = TestFixture::new();

    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    fixture.store.events().register("config", move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });

    assert!(fixture.store.reload().is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Two-session persistence
// =============================================================================

#[test]
fn test_saved_settings_survive_a_new_session() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_path_buf();

    // First session: edit and save
    {
        let store = SettingsStore::initialize(FileStorage::new(&data_dir));
        store.update(|data| {
            data.config.inflation_rate = 0.5;
            data.big_expense.push(json!({"label": "house", "amount": 30_000_000}));
        });
        store.save().unwrap();
    }

    // Second session: hydrates from the blob
    {
        let store = SettingsStore::initialize(FileStorage::new(&data_dir));
        let data = store.snapshot();
        assert_eq!(data.config.inflation_rate, 0.5);
        assert_eq!(data.big_expense.len(), 1);
    }
}
