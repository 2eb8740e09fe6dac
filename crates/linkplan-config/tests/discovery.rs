//! Tests for manifest discovery and profile loading.

use std::fs;

use linkplan_config::{ConfigError, CyclePolicy, ManifestDiscovery, load_from};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[settings]
cycle_policy = "warn"

[units.bin]
static = ["lib2", "lib1"]

[units.lib1]
static = ["lib2"]

[units.lib2]

[profiles.ci.settings]
cycle_policy = "deny"
"#;

#[test]
fn finds_primary_manifest() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("linkplan.toml"), MANIFEST).expect("write manifest");

    let discovery = ManifestDiscovery::new(dir.path());
    assert_eq!(discovery.find(), Some(dir.path().join("linkplan.toml")));

    let manifest = discovery.load().expect("load");
    assert_eq!(manifest.units.len(), 3);
}

#[test]
fn falls_back_to_hidden_manifest() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(".linkplan.toml"), MANIFEST).expect("write manifest");

    let discovery = ManifestDiscovery::new(dir.path());
    assert_eq!(discovery.find(), Some(dir.path().join(".linkplan.toml")));
}

#[test]
fn primary_manifest_wins_over_hidden() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("linkplan.toml"), MANIFEST).expect("write manifest");
    fs::write(dir.path().join(".linkplan.toml"), "not = [valid").expect("write hidden");

    let manifest = ManifestDiscovery::new(dir.path()).load().expect("load");
    assert!(manifest.units.contains_key("bin"));
}

#[test]
fn missing_manifest_reports_directory() {
    let dir = TempDir::new().expect("tempdir");

    let err = ManifestDiscovery::new(dir.path()).load().unwrap_err();
    match err {
        ConfigError::NotFound(path) => assert_eq!(path, dir.path()),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn load_with_profile_applies_overrides() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("linkplan.toml"), MANIFEST).expect("write manifest");

    let manifest = ManifestDiscovery::new(dir.path())
        .load_with_profile("ci")
        .expect("load with profile");
    assert_eq!(manifest.settings.cycle_policy, Some(CyclePolicy::Deny));

    let err = ManifestDiscovery::new(dir.path())
        .load_with_profile("nightly")
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProfile(_)));
}

#[test]
fn syntax_errors_are_invalid_values() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[units.bin\nstatic = [").expect("write manifest");

    let err = load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "toml"));
}

#[test]
fn unreadable_path_is_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
