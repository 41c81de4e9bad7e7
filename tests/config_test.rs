//! Integration tests for Settings layered loading.
//!
//! These run without a global config file and exercise the merge helpers
//! directly; the env-override path is covered where it can be done without
//! racing other tests on process-wide environment state.

use std::path::PathBuf;

use avlkit::config::{RawSettings, Settings};

#[test]
fn given_no_config_when_loading_then_default_snapshot_path_is_used() {
    let settings = Settings::load().expect("load settings");
    assert!(settings
        .snapshot_path
        .to_string_lossy()
        .ends_with("tree.avl"));
}

#[test]
fn given_overlay_without_values_when_merged_then_defaults_survive() {
    let base = Settings::default();
    let merged = base.merge_with(&RawSettings::default());
    assert_eq!(merged, base);
}

#[test]
fn given_overlay_with_snapshot_path_when_merged_then_overlay_wins() {
    let base = Settings::default();
    let overlay = RawSettings {
        snapshot_path: Some(PathBuf::from("/var/data/forest.avl")),
    };
    let merged = base.merge_with(&overlay);
    assert_eq!(merged.snapshot_path, PathBuf::from("/var/data/forest.avl"));
}

#[test]
fn given_settings_when_serialized_then_toml_lists_snapshot_path() {
    let toml = Settings::default().to_toml().expect("serialize");
    assert!(toml.contains("snapshot_path"));
}
