//! Pipeline orchestration
//!
//! Discovery runs first and fixes the file order. Each file is then parsed,
//! extracted and related independently (on a rayon pool when enabled) and
//! the per-file results are concatenated in discovery order.

use crate::core::discovery::{discover, DiscoveryOptions};
use crate::core::extractor::{extract, ExclusionList};
use crate::core::parallel::{
    build_pool, parallel_process_with_progress, sequential_process_with_progress, ProgressUpdate,
};
use crate::core::relations::{apply_mode, build_relations};
use crate::error::{handle_error, Result};
use crate::models::config::Settings;
use crate::models::declaration::TypeDeclaration;
use crate::models::relation::{RelationEdge, RelationMode};
use crate::models::report::{AnalysisOutcome, AnalysisReport, FileFailure, RunSummary};
use crate::parsers::JavaParser;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// What a single file contributes to the report
#[derive(Debug, Clone, Default)]
pub struct FileAnalysis {
    pub declarations: Vec<TypeDeclaration>,
    /// Occurrence log of this file's declarations
    pub relations: Vec<RelationEdge>,
}

/// Runs discovery, parsing, extraction and relation building for one root
pub struct Analyzer {
    settings: Settings,
    parser: JavaParser,
    exclusion: ExclusionList,
}

impl Analyzer {
    /// Create an analyzer; fails on an unusable grammar or exclusion list
    pub fn new(settings: Settings) -> Result<Self> {
        let parser = JavaParser::new()?;
        let exclusion = ExclusionList::new(&settings.exclude_types)?;

        Ok(Self {
            settings,
            parser,
            exclusion,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Analyze the configured root
    pub fn analyze(&self) -> Result<AnalysisOutcome> {
        self.analyze_with_progress(|_| {})
    }

    /// Analyze the configured root, reporting each parsed file
    pub fn analyze_with_progress<F>(&self, progress_callback: F) -> Result<AnalysisOutcome>
    where
        F: Fn(ProgressUpdate) + Send + Sync,
    {
        let start_time = Instant::now();
        let root = &self.settings.scan_path;

        tracing::info!(
            "discovering *{} files under {}",
            self.settings.source_suffix,
            root.display()
        );
        let discovery = discover(
            root,
            &DiscoveryOptions {
                suffix: self.settings.source_suffix.clone(),
                follow_links: self.settings.follow_links,
            },
        )?;

        tracing::info!("parsing {} file(s)", discovery.files.len());
        let outcomes = self.analyze_files(&discovery.files, &progress_callback)?;

        let mut summary = RunSummary {
            files_discovered: discovery.files.len(),
            failures: discovery.failures,
            ..RunSummary::default()
        };
        let mut declarations = Vec::new();
        let mut relations = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(file) => {
                    summary.files_parsed += 1;
                    declarations.extend(file.declarations);
                    relations.extend(file.relations);
                }
                Err(failure) => summary.failures.push(failure),
            }
        }

        let mode = RelationMode::from_dedup_flag(self.settings.dedup_uses);
        let relations = apply_mode(relations, mode);

        summary.declarations = declarations.len();
        summary.relations = relations.len();
        summary.duration = start_time.elapsed();

        tracing::info!(
            "extracted {} declaration(s) and {} relation(s) from {} file(s), {} failure(s)",
            summary.declarations,
            summary.relations,
            summary.files_parsed,
            summary.failures.len()
        );

        Ok(AnalysisOutcome {
            report: AnalysisReport::new(declarations, relations),
            summary,
        })
    }

    fn analyze_files<F>(
        &self,
        files: &[PathBuf],
        progress_callback: &F,
    ) -> Result<Vec<std::result::Result<FileAnalysis, FileFailure>>>
    where
        F: Fn(ProgressUpdate) + Send + Sync,
    {
        if self.settings.parallel && files.len() > 1 {
            let pool = build_pool(self.settings.threads)?;
            Ok(pool.install(|| {
                parallel_process_with_progress(files, |path| self.analyze_file(path), progress_callback)
            }))
        } else {
            Ok(sequential_process_with_progress(
                files,
                |path| self.analyze_file(path),
                progress_callback,
            ))
        }
    }

    /// Parse, extract and relate one file
    ///
    /// A file that cannot be read or parsed is logged and returned as a
    /// failure; it contributes nothing to the report.
    pub fn analyze_file(&self, path: &Path) -> std::result::Result<FileAnalysis, FileFailure> {
        let unit = match self.parser.parse(path) {
            Ok(unit) => unit,
            Err(failure) => {
                handle_error(failure.to_error());
                return Err(failure);
            }
        };

        let declarations = extract(&unit, &self.exclusion);
        let relations = build_relations(&declarations, RelationMode::OccurrenceLog);

        tracing::debug!(
            "{}: {} declaration(s), {} relation(s)",
            path.display(),
            declarations.len(),
            relations.len()
        );

        Ok(FileAnalysis {
            declarations,
            relations,
        })
    }
}
