//! Output formatting functionality
//!
//! The JSON document is produced from borrowed view structs; their field
//! order is the key order of the document.

use crate::error::Result;
use crate::models::config::ReportSchema;
use crate::models::declaration::{Field, Method, Parameter, TypeDeclaration};
use crate::models::relation::RelationEdge;
use crate::models::report::{AnalysisReport, RunSummary};
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct FullDocument<'a> {
    classes: Vec<FullClass<'a>>,
    relations: Vec<RelationView<'a>>,
}

#[derive(Serialize)]
struct FullClass<'a> {
    name: &'a str,
    package: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    modifiers: String,
    fields: Vec<FieldView<'a>>,
    methods: Vec<FullMethod<'a>>,
}

#[derive(Serialize)]
struct FullMethod<'a> {
    name: &'a str,
    parameters: Vec<FieldView<'a>>,
    #[serde(rename = "linesOfCode")]
    lines_of_code: i64,
}

#[derive(Serialize)]
struct MinimalDocument<'a> {
    classes: Vec<MinimalClass<'a>>,
}

#[derive(Serialize)]
struct MinimalClass<'a> {
    name: &'a str,
    fields: Vec<FieldView<'a>>,
    methods: Vec<MinimalMethod<'a>>,
}

#[derive(Serialize)]
struct MinimalMethod<'a> {
    name: &'a str,
    parameters: Vec<FieldView<'a>>,
}

/// `{name, type}` pair shared by fields and parameters
#[derive(Serialize)]
struct FieldView<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    declared_type: &'a str,
}

#[derive(Serialize)]
struct RelationView<'a> {
    source: &'a str,
    target: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> From<&'a Field> for FieldView<'a> {
    fn from(field: &'a Field) -> Self {
        Self {
            name: &field.name,
            declared_type: &field.declared_type,
        }
    }
}

impl<'a> From<&'a Parameter> for FieldView<'a> {
    fn from(param: &'a Parameter) -> Self {
        Self {
            name: &param.name,
            declared_type: &param.declared_type,
        }
    }
}

fn parameters(method: &Method) -> Vec<FieldView<'_>> {
    method.parameters.iter().map(FieldView::from).collect()
}

fn full_class(decl: &TypeDeclaration) -> FullClass<'_> {
    FullClass {
        name: &decl.name,
        package: &decl.package,
        kind: decl.kind.as_str(),
        modifiers: decl.modifiers_text(),
        fields: decl.fields.iter().map(FieldView::from).collect(),
        methods: decl
            .methods
            .iter()
            .map(|m| FullMethod {
                name: &m.name,
                parameters: parameters(m),
                lines_of_code: m.lines_of_code,
            })
            .collect(),
    }
}

fn minimal_class(decl: &TypeDeclaration) -> MinimalClass<'_> {
    MinimalClass {
        name: &decl.name,
        fields: decl.fields.iter().map(FieldView::from).collect(),
        methods: decl
            .methods
            .iter()
            .map(|m| MinimalMethod {
                name: &m.name,
                parameters: parameters(m),
            })
            .collect(),
    }
}

fn relation(edge: &RelationEdge) -> RelationView<'_> {
    RelationView {
        source: &edge.source,
        target: &edge.target,
        kind: edge.kind.as_str(),
    }
}

/// Pretty JSON (2-space indent) with a trailing newline
pub fn format_report_json(report: &AnalysisReport, schema: ReportSchema) -> Result<String> {
    let mut json = match schema {
        ReportSchema::Full => serde_json::to_string_pretty(&FullDocument {
            classes: report.declarations().iter().map(full_class).collect(),
            relations: report.relations().iter().map(relation).collect(),
        })?,
        ReportSchema::Minimal => serde_json::to_string_pretty(&MinimalDocument {
            classes: report.declarations().iter().map(minimal_class).collect(),
        })?,
    };
    json.push('\n');
    Ok(json)
}

/// End-of-run summary for the terminal
pub fn format_summary_text(
    summary: &RunSummary,
    output_path: &Path,
    use_colors: bool,
    verbose: bool,
) -> String {
    let paint = |style: Style, text: String| {
        if use_colors {
            style.paint(text).to_string()
        } else {
            text
        }
    };

    let mut output = String::new();

    output.push_str(&paint(
        Green.bold(),
        "Analysis complete".to_string(),
    ));
    output.push('\n');

    let failed = summary.files_failed();
    let failed_text = if failed > 0 {
        paint(Red.normal(), format!(" ({} failed)", failed))
    } else {
        String::new()
    };
    output.push_str(&format!(
        "  Files analyzed: {}{}\n",
        summary.files_parsed, failed_text
    ));

    if summary.traversal_failures() > 0 {
        output.push_str(&format!(
            "  Unreadable directories: {}\n",
            paint(Yellow.normal(), summary.traversal_failures().to_string())
        ));
    }

    output.push_str(&format!("  Declarations:   {}\n", summary.declarations));
    output.push_str(&format!("  Relations:      {}\n", summary.relations));
    output.push_str(&format!(
        "  Output:         {}\n",
        paint(Cyan.normal(), output_path.display().to_string())
    ));
    output.push_str(&format!(
        "  Duration:       {:.2}s\n",
        summary.duration.as_secs_f64()
    ));

    if verbose && !summary.failures.is_empty() {
        output.push_str("\nSkipped:\n");
        for failure in &summary.failures {
            output.push_str(&format!(
                "  {} [{}] {}\n",
                paint(Style::new().dimmed(), failure.path.display().to_string()),
                failure.kind,
                failure.message
            ));
        }
    }

    output
}

/// One-line summary for quiet mode
pub fn format_summary_line(summary: &RunSummary, output_path: &Path) -> String {
    format!(
        "{} declaration(s), {} relation(s) -> {}\n",
        summary.declarations,
        summary.relations,
        output_path.display()
    )
}
