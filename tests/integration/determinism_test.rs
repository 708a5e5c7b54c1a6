//! Repeated runs over an unchanged tree produce identical bytes

use super::fixtures::{create_sample_project, write_source};
use introspector::{
    core::Analyzer,
    models::config::{ReportSchema, Settings},
    output::write_report,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run(root: &Path, output: &Path, parallel: bool, threads: usize) -> Vec<u8> {
    let settings = Settings {
        scan_path: root.to_path_buf(),
        parallel,
        threads,
        show_progress: false,
        ..Settings::default()
    };
    let outcome = Analyzer::new(settings).unwrap().analyze().unwrap();
    write_report(&outcome.report, ReportSchema::Full, output).unwrap();
    fs::read(output).unwrap()
}

fn create_wide_project(root: &Path) {
    for package in 0..6 {
        for class in 0..8 {
            write_source(
                root,
                &format!("src/p{}/C{}.java", package, class),
                &format!(
                    "package p{p};\n\
                     public class C{c} extends Base{p} implements Api, Comparable<C{c}> {{\n\
                     \x20   private int a{c}, b{c};\n\
                     \x20   public int compareTo(C{c} other) {{\n\
                     \x20       return 0;\n\
                     \x20   }}\n\
                     \x20   void touch(String s, java.util.Map<String, Integer> m) {{ }}\n\
                     \x20   interface Listener{c} {{ void on(C{c} source); }}\n\
                     }}\n",
                    p = package,
                    c = class
                ),
            );
        }
    }
}

#[test]
fn test_two_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    create_sample_project(&project);
    create_wide_project(&project);

    let first = run(&project, &dir.path().join("first.json"), true, 4);
    let second = run(&project, &dir.path().join("second.json"), true, 4);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    create_wide_project(&project);

    let sequential = run(&project, &dir.path().join("seq.json"), false, 1);
    let two = run(&project, &dir.path().join("two.json"), true, 2);
    let eight = run(&project, &dir.path().join("eight.json"), true, 8);

    assert_eq!(sequential, two);
    assert_eq!(sequential, eight);
}

#[test]
fn test_output_follows_traversal_order() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    create_wide_project(&project);

    let bytes = run(&project, &dir.path().join("out.json"), true, 4);
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let names: Vec<_> = value["classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names.len(), 96);
    assert_eq!(&names[..4], &["C0", "Listener0", "C1", "Listener1"]);
}
