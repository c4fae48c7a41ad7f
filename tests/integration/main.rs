//! Integration tests for the licmatch CLI
//!
//! These tests run the real binary: expression commands on the command line,
//! and the matcher on revision documents written to a temp directory.

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a licmatch command
///
/// The config directory points into `home` so a user's own config never
/// leaks into a test.
fn licmatch(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("licmatch"));
    cmd.env("XDG_CONFIG_HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Helper to write a revision document
fn write_revision(dir: &Path, name: &str, kind: &str, revision: &str, harvest: &Value) -> String {
    let document = json!({
        "definition": {
            "coordinates": { "type": kind, "provider": "npmjs", "name": "left-pad", "revision": revision },
            "files": []
        },
        "harvest": { "clearlydefined": { "1.5.0": harvest } }
    });
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

// =============================================================================
// EXPRESSION COMMANDS
// =============================================================================

#[test]
fn test_normalize() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path())
        .args(["normalize", "mit OR apache-2.0"])
        .assert()
        .success()
        .stdout("MIT OR Apache-2.0\n");
}

#[test]
fn test_normalize_blank_prints_null() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path()).args(["normalize", " "]).assert().success().stdout("null\n");
}

#[test]
fn test_normalize_json() {
    let temp = TempDir::new().unwrap();
    let output = licmatch(temp.path())
        .args(["--json", "normalize", "(mit"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value, json!({ "input": "(mit", "output": "NOASSERTION" }));
}

#[test]
fn test_expand_prints_one_clause_per_line() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path())
        .args(["expand", "(MIT OR ISC) AND GPL-3.0"])
        .assert()
        .success()
        .stdout("GPL-3.0 AND ISC\nGPL-3.0 AND MIT\n");
}

#[test]
fn test_flatten() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path())
        .args(["flatten", "MIT AND (ISC OR MIT)"])
        .assert()
        .success()
        .stdout("ISC\nMIT\n");
}

#[test]
fn test_merge_modes() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path())
        .args(["merge", "MIT AND GPL-3.0", "GPL-3.0", "--mode", "AND"])
        .assert()
        .success()
        .stdout("GPL-3.0 AND MIT\n");

    licmatch(temp.path())
        .args(["merge", "ISC", "MIT"])
        .assert()
        .success()
        .stdout("ISC OR MIT\n");
}

#[test]
fn test_merge_rejects_unknown_mode() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path())
        .args(["merge", "ISC", "MIT", "--mode", "XOR"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid merge mode"));
}

#[test]
fn test_satisfies() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path())
        .args(["satisfies", "MIT", "MIT OR Apache-2.0"])
        .assert()
        .success()
        .stdout("true\n");
    licmatch(temp.path())
        .args(["satisfies", "GPL-3.0", "MIT OR Apache-2.0"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_lookup() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path())
        .args(["lookup", "MIT License", "No Such License"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MIT License: MIT"))
        .stdout(predicate::str::contains("No Such License: unknown"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    licmatch(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("licmatch v"));
}

// =============================================================================
// MATCH COMMAND
// =============================================================================

#[test]
fn test_match_npm_json() {
    let temp = TempDir::new().unwrap();
    let harvest = json!({ "registryData": { "manifest": { "license": "MIT" } } });
    let source = write_revision(temp.path(), "source.json", "npm", "1.3.0", &harvest);
    let target = write_revision(temp.path(), "target.json", "npm", "1.3.1", &harvest);

    let output = licmatch(temp.path())
        .args(["--json", "match", source.as_str(), target.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["isMatching"], json!(true));
    assert_eq!(value["match"][0]["propPath"], json!("registryData.manifest.license"));
    assert_eq!(value["source"], json!("npm/npmjs/-/left-pad/1.3.0"));
}

#[test]
fn test_match_human_mismatch() {
    let temp = TempDir::new().unwrap();
    let source = write_revision(
        temp.path(),
        "source.json",
        "npm",
        "1.3.0",
        &json!({ "registryData": { "manifest": { "license": "MIT" } } }),
    );
    let target = write_revision(
        temp.path(),
        "target.json",
        "npm",
        "2.0.0",
        &json!({ "registryData": { "manifest": { "license": "ISC" } } }),
    );

    licmatch(temp.path())
        .args(["match", source.as_str(), target.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT MATCHING"))
        .stdout(predicate::str::contains("registryData.manifest.license"));
}

#[test]
fn test_match_nuget_inconclusive() {
    let temp = TempDir::new().unwrap();
    let harvest = json!({ "manifest": { "licenseUrl": "https://github.com/owner/repo/blob/main/LICENSE" } });
    let source = write_revision(temp.path(), "source.json", "nuget", "1.0.0", &harvest);
    let target = write_revision(temp.path(), "target.json", "nuget", "1.1.0", &harvest);

    licmatch(temp.path())
        .args(["match", source.as_str(), target.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("INCONCLUSIVE"));
}

#[test]
fn test_match_with_config_disabling_harvest() {
    let temp = TempDir::new().unwrap();
    let harvest = json!({ "registryData": { "manifest": { "license": "MIT" } } });
    let source = write_revision(temp.path(), "source.json", "npm", "1.3.0", &harvest);
    let target = write_revision(temp.path(), "target.json", "npm", "1.3.1", &harvest);
    let config = temp.path().join("licmatch.toml");
    fs::write(&config, "[matcher]\nharvest_policy = false\n").unwrap();
    let config = config.to_string_lossy().to_string();

    licmatch(temp.path())
        .args(["--config", config.as_str(), "match", source.as_str(), target.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("INCONCLUSIVE"));
}

#[test]
fn test_match_missing_document_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.json");
    let missing = missing.to_string_lossy().to_string();

    licmatch(temp.path())
        .args(["match", missing.as_str(), missing.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: cannot read source revision"));
}
