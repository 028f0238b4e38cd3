//! Tests for the `teidocs-analysis` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cmd() -> Command {
    Command::cargo_bin("teidocs-analysis").unwrap()
}

#[test]
fn test_index_prints_citetrails() {
    cmd()
        .args(["index", "--doc-type", "guidelines"])
        .arg(fixture("guidelines.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2.2.3"))
        .stdout(predicate::str::contains("structure-divisions"))
        .stdout(predicate::str::contains("Introduction"))
        .stdout(predicate::str::contains("Nodes: 14"));
}

#[test]
fn test_index_json() {
    let output = cmd()
        .args(["index", "--doc-type", "projectmembers", "--lang", "de", "--json"])
        .arg(fixture("projectmembers.xml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let nodes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let team = &nodes[0];
    assert_eq!(team["xml_id"], "team");
    assert_eq!(team["node_type"], "structural");
    assert_eq!(team["citetrail"], "1");
    assert_eq!(team["title"], "Projektteam");
}

#[test]
fn test_index_unknown_doc_type() {
    cmd()
        .args(["index", "--doc-type", "works"])
        .arg(fixture("guidelines.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown document type: 'works'"));
}

#[test]
fn test_index_not_implemented_fails() {
    cmd()
        .args(["index", "--doc-type", "specialchars"])
        .arg(fixture("specialchars.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn test_index_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .args(["index", "--doc-type", "guidelines"])
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_index_malformed_xml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    std::fs::write(&path, "<TEI><text></TEI>").unwrap();

    cmd()
        .args(["index", "--doc-type", "guidelines"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML parsing failed"));
}

#[test]
fn test_fragment_command() {
    cmd()
        .args(["fragment", "--id", "char017f"])
        .arg(fixture("specialchars.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"<dts:fragment xmlns:dts="https://w3id.org/dts/api#"><char"#,
        ))
        .stdout(predicate::str::contains("LATIN SMALL LETTER LONG S"));
}

#[test]
fn test_fragment_unknown_id() {
    cmd()
        .args(["fragment", "--id", "nope"])
        .arg(fixture("specialchars.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No element with xml:id 'nope'"));
}
