//! Loading `kube-score.toml` from disk.

use std::fs;

use kube_scorecard::config::{ScoreConfig, CONFIG_FILE};
use kube_scorecard::{Grade, ScoreError};

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join(CONFIG_FILE),
        "ignore_checks = [\"container-image-tag\"]\nexit_one_on_warning = true\nparallel = false\n",
    )
    .unwrap();
    let c = ScoreConfig::load(d.path()).unwrap();
    assert_eq!(c.ignore_checks, vec!["container-image-tag".to_string()]);
    assert_eq!(c.threshold(), Grade::Warning);
    assert!(!c.parallel);
}

#[test]
fn test_missing_file_uses_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = ScoreConfig::load(d.path()).unwrap();
    assert_eq!(c, ScoreConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "ignore_checks = [").unwrap();
    assert!(matches!(ScoreConfig::load(d.path()), Err(ScoreError::Config(_))));
}

#[test]
fn test_optional_checks() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join(CONFIG_FILE),
        "enable_optional_checks = [\"container-seccomp-profile\"]",
    )
    .unwrap();
    let c = ScoreConfig::load(d.path()).unwrap();
    assert_eq!(c.enable_optional_checks.len(), 1);
}
