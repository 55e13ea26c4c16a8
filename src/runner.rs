//! Sequential orchestration of the per-file checks

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::integrity::{IntegrityChecker, IntegrityOutcome, DEFAULT_CHECK_PROGRAM};
use crate::core::metadata::{inspect_metadata, MetadataOutcome};
use crate::error::{InspectError, Result};
use crate::reporting::console::Console;
use crate::scanner::file_scanner::resolve_input_with_progress;

/// Settings for one inspection run
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    /// Structural validator, invoked as `<program> --check <path>`
    pub check_program: OsString,
    /// Show a spinner on stderr while a directory is walked
    pub show_progress: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            check_program: OsString::from(DEFAULT_CHECK_PROGRAM),
            show_progress: false,
        }
    }
}

/// Tally of per-file outcomes for the closing summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub sound: usize,
    pub with_issues: usize,
    pub check_errors: usize,
    pub metadata_failures: usize,
}

impl RunSummary {
    fn record(&mut self, integrity: &IntegrityOutcome, metadata: &MetadataOutcome) {
        self.files_processed += 1;
        match integrity {
            IntegrityOutcome::Sound => self.sound += 1,
            IntegrityOutcome::IssuesFound { .. } => self.with_issues += 1,
            IntegrityOutcome::Failed(_) => self.check_errors += 1,
        }
        if let MetadataOutcome::Failed(_) = metadata {
            self.metadata_failures += 1;
        }
    }
}

pub struct Inspector<W: Write> {
    console: Console<W>,
    checker: IntegrityChecker,
    show_progress: bool,
}

impl<W: Write> Inspector<W> {
    pub fn new(config: InspectorConfig, console: Console<W>) -> Self {
        Self {
            console,
            checker: IntegrityChecker::new(config.check_program),
            show_progress: config.show_progress,
        }
    }

    pub fn console_mut(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Inspect every PDF reachable from `input`, then print the completion banner
    ///
    /// An invalid path is reported and still ends with the banner. Traversal
    /// and output errors abort the run.
    pub fn run(&mut self, input: &Path) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        match self.resolve(input) {
            Ok(files) => {
                info!("{} PDF file(s) to inspect", files.len());
                if files.is_empty() {
                    self.console.no_pdfs_found(input)?;
                }
                for path in &files {
                    self.process_pdf_file(path, &mut summary)?;
                }
            }
            Err(err @ InspectError::InvalidPath(_)) => self.console.invalid_path(&err)?,
            Err(err) => return Err(err),
        }

        self.console.analysis_complete()?;
        self.console.summary(&summary)?;
        Ok(summary)
    }

    /// Run both checks on one file, bracketed by start and end banners
    pub fn process_pdf_file(&mut self, path: &Path, summary: &mut RunSummary) -> Result<()> {
        self.console.file_started(path)?;

        self.console.integrity_started(path)?;
        let integrity = self.checker.check(path);
        self.console.integrity_result(&integrity)?;

        self.console.metadata_started(path)?;
        let metadata = inspect_metadata(path);
        self.console.metadata_result(&metadata)?;

        self.console.file_finished(path)?;
        summary.record(&integrity, &metadata);
        Ok(())
    }

    fn resolve(&self, input: &Path) -> Result<Vec<PathBuf>> {
        let progress = if self.show_progress && input.is_dir() {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
                pb.set_style(style);
            }
            pb.set_message(format!("Scanning {}", input.display()));
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        } else {
            ProgressBar::hidden()
        };

        let result = resolve_input_with_progress(input, &progress);
        progress.finish_and_clear();
        result
    }
}
