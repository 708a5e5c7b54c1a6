//! Tests of the introspector binary

use super::fixtures::{create_sample_project, write_source, FOO, FOO_REPORT};
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const USAGE_LINE: &str = "Usage: introspector <path-to-java-project>\n";

/// The binary run inside `cwd`, isolated from user config and env
fn introspector(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("introspector").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("INTROSPECTOR_SUFFIX")
        .env_remove("INTROSPECTOR_EXCLUDE_TYPES")
        .env_remove("INTROSPECTOR_SCHEMA")
        .env_remove("INTROSPECTOR_OUTPUT_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = tempdir().unwrap();

    introspector(dir.path())
        .assert()
        .code(2)
        .stdout(USAGE_LINE);

    assert!(!dir.path().join("project_analysis.json").exists());
}

#[test]
fn test_two_arguments_prints_usage_and_keeps_previous_report() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    write_source(&project, "demo/Foo.java", FOO);
    let report = dir.path().join("project_analysis.json");
    fs::write(&report, "previous").unwrap();

    introspector(dir.path())
        .args(["project", "project"])
        .assert()
        .code(2)
        .stdout(USAGE_LINE);

    assert_eq!(fs::read_to_string(&report).unwrap(), "previous");
}

#[test]
fn test_foo_report_in_working_directory() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);

    introspector(dir.path())
        .args(["project", "--no-progress", "--no-colors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis complete"))
        .stdout(predicate::str::contains("Declarations:   1"))
        .stdout(predicate::str::contains("Relations:      3"));

    let written = fs::read_to_string(dir.path().join("project_analysis.json")).unwrap();
    assert_eq!(written, FOO_REPORT);
}

#[test]
fn test_missing_root_is_critical() {
    let dir = tempdir().unwrap();

    introspector(dir.path())
        .arg("does-not-exist")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid path"));

    assert!(!dir.path().join("project_analysis.json").exists());
}

#[test]
fn test_missing_output_directory_is_rejected() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);

    introspector(dir.path())
        .args(["project", "--output-file", "missing/out.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing"));

    assert!(!dir.path().join("missing").exists());
}

#[test]
fn test_broken_file_is_logged_on_stderr() {
    let dir = tempdir().unwrap();
    create_sample_project(&dir.path().join("shop"));

    introspector(dir.path())
        .args(["shop", "--no-progress", "--no-colors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 failed)"))
        .stderr(predicate::str::contains("Broken.java"));

    let written = fs::read_to_string(dir.path().join("project_analysis.json")).unwrap();
    assert!(!written.contains("Broken"));
    assert!(!written.contains("MavenWrapperDownloader"));
}

#[test]
fn test_quiet_mode() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);

    introspector(dir.path())
        .args(["project", "--quiet", "-o", "out.json"])
        .assert()
        .success()
        .stdout("1 declaration(s), 3 relation(s) -> out.json\n");

    assert!(dir.path().join("out.json").exists());
    assert!(!dir.path().join("project_analysis.json").exists());
}

#[test]
fn test_schema_and_exclusion_flags() {
    let dir = tempdir().unwrap();
    create_sample_project(&dir.path().join("shop"));

    introspector(dir.path())
        .args([
            "shop",
            "--no-progress",
            "--schema",
            "minimal",
            "--exclude-type",
            "Order*",
        ])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("project_analysis.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    let names: Vec<_> = value["classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["MavenWrapperDownloader", "Line", "Repository"]);
    assert!(value.get("relations").is_none());
}

#[test]
fn test_init_creates_config() {
    let dir = tempdir().unwrap();

    introspector(dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    assert!(dir.path().join(".introspector.toml").exists());
}

#[test]
fn test_unknown_schema_value_is_rejected_by_clap() {
    let dir = tempdir().unwrap();

    introspector(dir.path())
        .args(["project", "--schema", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));

    assert!(!dir.path().join("project_analysis.json").exists());
}
