#![allow(missing_docs)]
//! Integration tests for the directory-backed registration service.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use toolscout_core::{Enumeration, Toolset, ToolsetSource};
use toolscout_setup::{
    DirSetupConfiguration, INSTANCE_BATCH, InstanceEnumerator, SetupConfiguration,
    SideBySideToolsets,
};

fn register_instance(root: &Path, id: &str, state: &str) {
    let dir = root.join("instances").join(id);
    fs::create_dir_all(&dir).expect("create instance dir");
    fs::write(dir.join("state.json"), state).expect("write state");
}

fn state(id: &str, version: &str, path: &str) -> String {
    format!(
        r#"{{"instanceId": "{id}", "installationVersion": "{version}", "installationPath": "{path}"}}"#
    )
}

fn side_by_side(root: &Path) -> SideBySideToolsets {
    let configuration = DirSetupConfiguration::connect(root)
        .map(|config| Box::new(config) as Box<dyn SetupConfiguration>);
    SideBySideToolsets::new(configuration)
}

#[test]
fn test_missing_root_is_absent() {
    let root = TempDir::new().expect("tempdir");
    let missing = root.path().join("no-such-service");
    assert!(DirSetupConfiguration::connect(&missing).is_none());
    assert_eq!(side_by_side(&missing).enumerate(), Enumeration::Absent);
}

#[test]
fn test_root_without_instances_dir_is_absent() {
    let root = TempDir::new().expect("tempdir");
    assert_eq!(side_by_side(root.path()).enumerate(), Enumeration::Absent);
}

#[test]
fn test_no_registered_instances_is_absent() {
    let root = TempDir::new().expect("tempdir");
    fs::create_dir_all(root.path().join("instances")).expect("create instances dir");
    assert_eq!(side_by_side(root.path()).enumerate(), Enumeration::Absent);
}

#[test]
fn test_instances_enumerate_in_sorted_order() {
    let root = TempDir::new().expect("tempdir");
    register_instance(root.path(), "b", &state("b", "15.2", "/sxs/b"));
    register_instance(root.path(), "a", &state("a", "15.1", "/sxs/a"));
    register_instance(root.path(), "c", &state("c", "15.3", "/sxs/c"));
    register_instance(root.path(), "d", &state("d", "16.0", "/sxs/d"));

    assert_eq!(
        side_by_side(root.path()).enumerate(),
        Enumeration::Found(vec![
            Toolset::new("15.1", "/sxs/a"),
            Toolset::new("15.2", "/sxs/b"),
            Toolset::new("15.3", "/sxs/c"),
            Toolset::new("16.0", "/sxs/d"),
        ])
    );
}

#[test]
fn test_malformed_descriptor_becomes_null_slot() {
    let root = TempDir::new().expect("tempdir");
    register_instance(root.path(), "a", &state("a", "15.1", "/sxs/a"));
    register_instance(root.path(), "b", "{ not json");
    register_instance(root.path(), "c", &state("c", "15.3", "/sxs/c"));

    // The malformed descriptor is counted in its batch but skipped.
    assert_eq!(
        side_by_side(root.path()).enumerate(),
        Enumeration::Found(vec![
            Toolset::new("15.1", "/sxs/a"),
            Toolset::new("15.3", "/sxs/c"),
        ])
    );
}

#[test]
fn test_only_malformed_descriptors_collapse_to_absent() {
    let root = TempDir::new().expect("tempdir");
    register_instance(root.path(), "a", "{ not json");
    register_instance(root.path(), "b", "also not json");

    assert_eq!(side_by_side(root.path()).enumerate(), Enumeration::Absent);
}

#[test]
fn test_enumerator_honors_the_batch_contract() {
    let root = TempDir::new().expect("tempdir");
    for id in ["a", "b", "c", "d"] {
        register_instance(root.path(), id, &state(id, "15.0", "/sxs"));
    }

    let config = DirSetupConfiguration::connect(root.path()).expect("service connects");
    let mut enumerator = config.enum_instances().expect("enumerator available");

    let mut batch: [Option<toolscout_setup::SetupInstance>; INSTANCE_BATCH] =
        std::array::from_fn(|_| None);
    assert_eq!(enumerator.next(&mut batch), 3);
    assert!(batch.iter().all(Option::is_some));

    let mut batch: [Option<toolscout_setup::SetupInstance>; INSTANCE_BATCH] =
        std::array::from_fn(|_| None);
    assert_eq!(enumerator.next(&mut batch), 1);

    let mut batch: [Option<toolscout_setup::SetupInstance>; INSTANCE_BATCH] =
        std::array::from_fn(|_| None);
    assert_eq!(enumerator.next(&mut batch), 0);
}
