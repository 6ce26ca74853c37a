// ABOUTME: Tests for session persistence - round trips, corrupt-state recovery, reset
// ABOUTME: Uses temporary directories so runs never touch the real platform data dir
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use seedmix::catalog::Catalog;
use seedmix::constants::{DEFAULT_MAX_PARTS, DEFAULT_TARGET};
use seedmix::session::{SessionState, SessionStore};
use seedmix::Ingredient;

fn temp_store() -> (tempfile::TempDir, SessionStore) {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = SessionStore::new(dir.path().join("seedmix"));
    (dir, store)
}

#[test]
fn test_defaults_when_nothing_saved() {
    let (_dir, store) = temp_store();
    let state = store.load();
    assert_eq!(state.target, DEFAULT_TARGET);
    assert_eq!(state.max_parts, DEFAULT_MAX_PARTS);
    assert!(state.enabled.is_empty());
    assert!(state.custom_foods.is_empty());
}

#[test]
fn test_save_and_load_round_trip() {
    let (_dir, store) = temp_store();

    let mut state = SessionState::default();
    state.target.protein = 16.0;
    state.max_parts = 6;
    state.enable("Corn");
    state.enable("White Peas");
    state
        .custom_foods
        .push(Ingredient::new("Popcorn", 12.0, 4.5, 2.2));
    store.save(&state).expect("save should succeed");

    let loaded = store.load();
    assert_eq!(loaded.target, state.target);
    assert_eq!(loaded.max_parts, 6);
    assert!(loaded.is_enabled("corn"));
    assert!(loaded.is_enabled("WHITE PEAS"));
    assert!(!loaded.is_enabled("Wheat"));
    assert_eq!(loaded.custom_foods.len(), 1);
    assert_eq!(loaded.custom_foods[0].name, "Popcorn");
}

#[test]
fn test_corrupt_state_falls_back_to_defaults() {
    let (dir, store) = temp_store();
    let mut state = SessionState::default();
    state.enable("Corn");
    store.save(&state).expect("save should succeed");

    // Overwrite the state file with junk the way a partial write or an old
    // incompatible version would.
    let state_dir = dir.path().join("seedmix");
    for entry in fs::read_dir(&state_dir).expect("state dir should exist") {
        let entry = entry.expect("dir entry");
        fs::write(entry.path(), "{not valid json").expect("overwrite should succeed");
    }

    let loaded = store.load();
    assert_eq!(loaded.target, DEFAULT_TARGET);
    assert!(loaded.enabled.is_empty());
}

#[test]
fn test_reset_discards_saved_state() {
    let (_dir, store) = temp_store();
    let mut state = SessionState::default();
    state.enable("Corn");
    store.save(&state).expect("save should succeed");

    store.reset().expect("reset should succeed");
    let loaded = store.load();
    assert!(loaded.enabled.is_empty());

    // Resetting again with nothing saved is fine.
    store.reset().expect("repeat reset should succeed");
}

#[test]
fn test_enabled_ingredients_follow_catalog_order() {
    let catalog = Catalog::new();
    let mut state = SessionState::default();
    // Enable out of catalog order; the core gets catalog order back.
    state.enable("White Peas");
    state.enable("Corn");
    // A name that left the catalog since last session is skipped.
    state.enable("Ghost Seed");

    let enabled = state.enabled_ingredients(&catalog);
    let names: Vec<&str> = enabled.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Corn", "White Peas"]);
}

#[test]
fn test_saved_at_is_stamped_on_save() {
    let (_dir, store) = temp_store();
    let state = SessionState::default();
    let before = chrono::Utc::now();
    store.save(&state).expect("save should succeed");
    let loaded = store.load();
    assert!(loaded.saved_at >= before - chrono::Duration::seconds(1));
}
