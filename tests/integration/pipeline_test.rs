//! End-to-end pipeline tests through the library API

use super::fixtures::{create_sample_project, write_source, FOO, FOO_REPORT};
use introspector::{
    core::Analyzer,
    models::config::{ReportSchema, Settings},
    models::report::FailureKind,
    output::{create_formatter, write_report},
    RelationKind,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn settings(root: &Path) -> Settings {
    Settings {
        scan_path: root.to_path_buf(),
        show_progress: false,
        ..Settings::default()
    }
}

fn names(analyzer: &Analyzer) -> Vec<String> {
    analyzer
        .analyze()
        .unwrap()
        .report
        .declarations()
        .iter()
        .map(|d| d.name.clone())
        .collect()
}

#[test]
fn test_foo_scenario_verbatim() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "demo/Foo.java", FOO);

    let outcome = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap();
    let json = create_formatter(ReportSchema::Full).format(&outcome.report).unwrap();

    assert_eq!(json, FOO_REPORT);
}

#[test]
fn test_sample_project_declarations() {
    let dir = tempdir().unwrap();
    create_sample_project(dir.path());

    let outcome = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap();
    let report = &outcome.report;

    let names: Vec<_> = report.declarations().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Order", "Line", "OrderRepository", "Repository"]);

    let order = &report.declarations()[0];
    assert_eq!(order.package, "com.shop");
    assert_eq!(order.modifiers_text(), "public, final");
    let fields: Vec<_> = order
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.declared_type.as_str()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("id", "long"),
            ("customer", "String"),
            ("note", "String"),
            ("quantities", "int[]"),
            ("totals", "int[][]"),
        ]
    );

    // The constructor is not a method
    let methods: Vec<_> = order
        .methods
        .iter()
        .map(|m| (m.name.as_str(), m.lines_of_code))
        .collect();
    assert_eq!(methods, vec![("compareTo", 3), ("addItems", 5)]);
    let add_items: Vec<_> = order.methods[1]
        .parameters
        .iter()
        .map(|p| p.declared_type.as_str())
        .collect();
    assert_eq!(add_items, vec!["List<String>", "int", "String"]);

    let repository = &report.declarations()[2];
    assert_eq!(repository.modifiers_text(), "public, abstract");
    assert_eq!(repository.supertypes, vec!["BaseRepository"]);
    assert_eq!(repository.interfaces, vec!["Repository"]);

    let interface = &report.declarations()[3];
    assert_eq!(interface.kind.as_str(), "interface");
    assert_eq!(interface.supertypes, vec!["AutoCloseable", "Iterable"]);

    assert!(report.is_consistent());
}

#[test]
fn test_edge_counts_match_declarations() {
    let dir = tempdir().unwrap();
    create_sample_project(dir.path());

    let report = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap().report;

    for decl in report.declarations() {
        let count = |kind: RelationKind| {
            report
                .relations()
                .iter()
                .filter(|e| e.source == decl.name && e.kind == kind)
                .count()
        };
        assert_eq!(count(RelationKind::Extends), decl.supertypes.len(), "{}", decl.name);
        assert_eq!(count(RelationKind::Implements), decl.interfaces.len(), "{}", decl.name);
        assert_eq!(count(RelationKind::Uses), decl.parameter_count(), "{}", decl.name);
    }
    assert_eq!(report.relations().len(), 15);
}

#[test]
fn test_excluded_type_contributes_nothing() {
    let dir = tempdir().unwrap();
    create_sample_project(dir.path());

    let report = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap().report;
    assert!(report
        .declarations()
        .iter()
        .all(|d| d.name != "MavenWrapperDownloader"));
    assert!(report
        .relations()
        .iter()
        .all(|e| e.source != "MavenWrapperDownloader"));

    // Without an exclusion list the wrapper class is reported
    let included = Analyzer::new(Settings {
        exclude_types: Vec::new(),
        ..settings(dir.path())
    })
    .unwrap();
    assert_eq!(names(&included)[0], "MavenWrapperDownloader");

    // Exclusion by pattern
    let patterned = Analyzer::new(Settings {
        exclude_types: vec!["Order*".to_string()],
        ..settings(dir.path())
    })
    .unwrap();
    assert_eq!(names(&patterned), vec!["MavenWrapperDownloader", "Line", "Repository"]);
}

#[test]
fn test_failing_file_is_absent_and_others_unaffected() {
    let dir = tempdir().unwrap();
    create_sample_project(dir.path());

    let with_broken = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap();
    assert_eq!(with_broken.summary.files_discovered, 5);
    assert_eq!(with_broken.summary.files_parsed, 4);
    assert_eq!(with_broken.summary.files_failed(), 1);
    assert_eq!(with_broken.summary.failures[0].kind, FailureKind::Syntax);

    fs::remove_file(dir.path().join("src/main/java/com/shop/Broken.java")).unwrap();
    let without_broken = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap();

    assert_eq!(with_broken.report, without_broken.report);
}

#[test]
fn test_undecodable_file_is_skipped() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "A.java", "class A {}\n");
    fs::write(dir.path().join("B.java"), b"class B { String s = \"\xff\"; }\n").unwrap();

    let outcome = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap();

    assert_eq!(outcome.report.declarations().len(), 1);
    assert_eq!(outcome.summary.failures[0].kind, FailureKind::Encoding);
}

#[test]
fn test_empty_project_writes_empty_document() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    fs::create_dir(&project).unwrap();
    let output = dir.path().join("project_analysis.json");

    let outcome = Analyzer::new(settings(&project)).unwrap().analyze().unwrap();
    write_report(&outcome.report, ReportSchema::Full, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "{\n  \"classes\": [],\n  \"relations\": []\n}\n"
    );
}

#[test]
fn test_minimal_schema() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "demo/Foo.java", FOO);

    let outcome = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap();
    let json = create_formatter(ReportSchema::Minimal).format(&outcome.report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("relations").is_none());
    let foo = &value["classes"][0];
    let keys: Vec<_> = foo.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 3);
    assert_eq!(foo["methods"][0]["parameters"][0]["type"], "String");
    assert!(foo["methods"][0].get("linesOfCode").is_none());
}

#[test]
fn test_dedup_mode() {
    let dir = tempdir().unwrap();
    write_source(
        dir.path(),
        "Svc.java",
        "class Svc extends Base {\n  void a(String x, String y) {}\n  void b(int n, String z) {}\n}\n",
    );

    let log = Analyzer::new(settings(dir.path())).unwrap().analyze().unwrap().report;
    assert_eq!(log.relations().len(), 5);

    let dedup = Analyzer::new(Settings {
        dedup_uses: true,
        ..settings(dir.path())
    })
    .unwrap()
    .analyze()
    .unwrap()
    .report;
    let targets: Vec<_> = dedup.relations().iter().map(|e| e.target.as_str()).collect();
    assert_eq!(targets, vec!["Base", "String", "int"]);
}
