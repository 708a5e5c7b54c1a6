//! Configuration layering through the binary

use super::fixtures::{write_source, FOO};
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn introspector(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("introspector").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", cwd.join("home"))
        .env("XDG_CONFIG_HOME", cwd.join("xdg"))
        .env_remove("INTROSPECTOR_SUFFIX")
        .env_remove("INTROSPECTOR_EXCLUDE_TYPES")
        .env_remove("INTROSPECTOR_SCHEMA")
        .env_remove("INTROSPECTOR_OUTPUT_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn has_relations(path: &Path) -> bool {
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value.get("relations").is_some()
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);
    fs::write(
        dir.path().join(".introspector.toml"),
        "schema = \"minimal\"\noutput_file = \"from-config.json\"\nshow_progress = false\n",
    )
    .unwrap();

    introspector(dir.path()).arg("project").assert().success();

    let output = dir.path().join("from-config.json");
    assert!(output.exists());
    assert!(!has_relations(&output));
}

#[test]
fn test_environment_overrides_file_and_cli_overrides_environment() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);
    fs::write(
        dir.path().join(".introspector.toml"),
        "schema = \"minimal\"\nshow_progress = false\n",
    )
    .unwrap();

    introspector(dir.path())
        .arg("project")
        .env("INTROSPECTOR_SCHEMA", "full")
        .env("INTROSPECTOR_OUTPUT_FILE", "from-env.json")
        .assert()
        .success();
    assert!(has_relations(&dir.path().join("from-env.json")));

    introspector(dir.path())
        .args(["project", "--schema", "minimal", "-o", "from-cli.json"])
        .env("INTROSPECTOR_SCHEMA", "full")
        .env("INTROSPECTOR_OUTPUT_FILE", "from-env.json")
        .assert()
        .success();
    assert!(!has_relations(&dir.path().join("from-cli.json")));
}

#[test]
fn test_suffix_from_environment() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.jav", FOO);
    write_source(&dir.path().join("project"), "demo/Other.java", "class Other {}\n");

    introspector(dir.path())
        .args(["project", "--no-progress", "--quiet"])
        .env("INTROSPECTOR_SUFFIX", ".jav")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 declaration(s), 3 relation(s)"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);

    introspector(dir.path())
        .args(["project", "--config", "nope.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.toml"));

    assert!(!dir.path().join("project_analysis.json").exists());
}

#[test]
fn test_invalid_config_is_critical() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);
    fs::write(dir.path().join("bad.toml"), "unknown_key = 1\n").unwrap();

    introspector(dir.path())
        .args(["project", "--config", "bad.toml"])
        .assert()
        .code(3);

    assert!(!dir.path().join("project_analysis.json").exists());
}

#[test]
fn test_invalid_exclusion_pattern_is_critical() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);

    introspector(dir.path())
        .args(["project", "--exclude-type", "Bad["])
        .assert()
        .code(3);

    assert!(!dir.path().join("project_analysis.json").exists());
}

#[test]
fn test_verbose_from_config_file_raises_log_level() {
    let dir = tempdir().unwrap();
    write_source(&dir.path().join("project"), "demo/Foo.java", FOO);

    introspector(dir.path())
        .args(["project", "--no-progress"])
        .assert()
        .success()
        .stderr(predicate::str::contains("analyzing").not());

    fs::write(
        dir.path().join(".introspector.toml"),
        "verbose = true\nshow_progress = false\n",
    )
    .unwrap();

    introspector(dir.path())
        .arg("project")
        .assert()
        .success()
        .stderr(predicate::str::contains("analyzing"));
}
