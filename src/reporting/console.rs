//! Color-coded console reporting
//!
//! All user-visible text goes through a [`Console`]. Colors are decided per
//! instance, so tests can render plain text into a buffer while the binary
//! paints stdout.

use colored::{ColoredString, Colorize};
use std::io::{self, Write};
use std::path::Path;

use crate::core::integrity::IntegrityOutcome;
use crate::core::metadata::MetadataOutcome;
use crate::error::InspectError;
use crate::runner::RunSummary;

const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Prompt,
    Heading,
    Success,
    Alert,
    Entry,
    Banner,
    Complete,
}

pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled: ColoredString = match tone {
            Tone::Prompt => text.bright_cyan().bold(),
            Tone::Heading => text.cyan(),
            Tone::Success => text.green(),
            Tone::Alert => text.red(),
            Tone::Entry => text.yellow(),
            Tone::Banner => text.bright_magenta().bold(),
            Tone::Complete => text.bright_green().bold(),
        };
        styled.to_string()
    }

    fn line(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let painted = self.paint(text, tone);
        writeln!(self.out, "{}", painted)
    }

    /// Print the path prompt without a trailing newline
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        let painted = self.paint(text, Tone::Prompt);
        write!(self.out, "{}", painted)?;
        self.out.flush()
    }

    pub fn file_started(&mut self, path: &Path) -> io::Result<()> {
        self.banner(&format!("Processing file: {}", path.display()))
    }

    pub fn file_finished(&mut self, path: &Path) -> io::Result<()> {
        self.banner(&format!("Finished processing: {}", path.display()))?;
        writeln!(self.out)
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        self.line(&format!("\n{}\n{}\n{}", rule, title, rule), Tone::Banner)
    }

    pub fn integrity_started(&mut self, path: &Path) -> io::Result<()> {
        self.line(&format!("\nRunning QPDF check on: {}", path.display()), Tone::Heading)
    }

    pub fn integrity_result(&mut self, outcome: &IntegrityOutcome) -> io::Result<()> {
        match outcome {
            IntegrityOutcome::Sound => self.line("QPDF: PDF is structurally sound.", Tone::Success),
            IntegrityOutcome::IssuesFound { diagnostics } => {
                self.line("QPDF: Issues found in PDF structure.", Tone::Alert)?;
                self.line(diagnostics.trim_end(), Tone::Alert)
            }
            IntegrityOutcome::Failed(err @ InspectError::ToolMissing { .. }) => {
                self.line(&format!("Error: {}.", err), Tone::Alert)
            }
            IntegrityOutcome::Failed(err) => self.line(
                &format!("An error occurred while checking with QPDF: {}", err),
                Tone::Alert,
            ),
        }
    }

    pub fn metadata_started(&mut self, path: &Path) -> io::Result<()> {
        self.line(&format!("\nAnalyzing metadata for: {}", path.display()), Tone::Heading)
    }

    pub fn metadata_result(&mut self, outcome: &MetadataOutcome) -> io::Result<()> {
        match outcome {
            MetadataOutcome::Found(record) => {
                self.line("Metadata found:", Tone::Entry)?;
                for (key, value) in record.entries() {
                    self.line(&format!("/{}: {}", key, value), Tone::Entry)?;
                }
                Ok(())
            }
            MetadataOutcome::Empty => self.line("No metadata found.", Tone::Alert),
            MetadataOutcome::Failed(err) => self.line(
                &format!("An error occurred while analyzing metadata: {}", err),
                Tone::Alert,
            ),
        }
    }

    pub fn invalid_path(&mut self, err: &InspectError) -> io::Result<()> {
        self.line(&format!("{}", err), Tone::Alert)
    }

    pub fn no_pdfs_found(&mut self, dir: &Path) -> io::Result<()> {
        self.line(&format!("No PDF files found under {}", dir.display()), Tone::Alert)
    }

    pub fn analysis_complete(&mut self) -> io::Result<()> {
        self.line("\nAnalysis complete.", Tone::Complete)
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "Files: {}  Sound: {}  With issues: {}  Check errors: {}  Metadata failures: {}",
            summary.files_processed,
            summary.sound,
            summary.with_issues,
            summary.check_errors,
            summary.metadata_failures,
        )
    }
}
