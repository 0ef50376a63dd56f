//! CLI-level tests for the extractor binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// Path to the RNC excerpt fixture.
fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("rnc")
        .join("excerpt.txt")
}

#[test]
fn test_extract_writes_yaml() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("bridgefacile-extractor")
        .unwrap()
        .arg("extract")
        .arg(fixture_path())
        .args(["--doc-type", "rnc"])
        .args(["--document-id", "rnc-2025-2026"])
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sections: 13"))
        .stdout(predicate::str::contains("Saved to:"));

    let output_file = dir.path().join("rnc_2025_2026.yaml");
    let yaml = fs::read_to_string(&output_file).unwrap();
    assert!(yaml.contains("document_type: RNC"));
    assert!(yaml.contains("article_number: '5'"));
}

#[test]
fn test_extract_defaults_document_id_to_file_stem() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("bridgefacile-extractor")
        .unwrap()
        .arg("extract")
        .arg(fixture_path())
        .args(["--doc-type", "rnc"])
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("excerpt.yaml").exists());
}

#[test]
fn test_extract_unknown_doc_type_fails() {
    Command::cargo_bin("bridgefacile-extractor")
        .unwrap()
        .arg("extract")
        .arg(fixture_path())
        .args(["--doc-type", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown document type"));
}

#[test]
fn test_extract_missing_file_fails() {
    Command::cargo_bin("bridgefacile-extractor")
        .unwrap()
        .arg("extract")
        .arg("does-not-exist.txt")
        .args(["--doc-type", "rnc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_extract_no_references_skips_resolution() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("bridgefacile-extractor")
        .unwrap()
        .arg("extract")
        .arg(fixture_path())
        .args(["--doc-type", "rnc"])
        .arg("--output")
        .arg(dir.path())
        .arg("--no-references")
        .assert()
        .success()
        .stdout(predicate::str::contains("References:").not());

    let yaml = fs::read_to_string(dir.path().join("excerpt.yaml")).unwrap();
    assert!(!yaml.contains("matched_text:"));
}
