//! Structural integrity check delegated to `qpdf --check`

use log::{debug, warn};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::process::{Command, Output};

use crate::error::InspectError;

/// Program looked up on `PATH` when no other checker is configured
pub const DEFAULT_CHECK_PROGRAM: &str = "qpdf";

/// Classification of one structural check
#[derive(Debug)]
pub enum IntegrityOutcome {
    /// Checker exited with status 0
    Sound,
    /// Checker exited non-zero; `diagnostics` is its captured output
    IssuesFound { diagnostics: String },
    /// Checker could not be run at all
    Failed(InspectError),
}

impl IntegrityOutcome {
    pub fn is_sound(&self) -> bool {
        matches!(self, IntegrityOutcome::Sound)
    }
}

/// Runs an external structural validator as `<program> --check <path>`
#[derive(Debug, Clone)]
pub struct IntegrityChecker {
    program: OsString,
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new(DEFAULT_CHECK_PROGRAM)
    }
}

impl IntegrityChecker {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Check one file. Blocks until the subprocess exits; the file is never modified.
    pub fn check(&self, path: &Path) -> IntegrityOutcome {
        debug!("running {} --check {}", self.program.to_string_lossy(), path.display());

        let output = match Command::new(&self.program).arg("--check").arg(path).output() {
            Ok(output) => output,
            Err(e) => return IntegrityOutcome::Failed(self.spawn_error(e)),
        };

        debug!("{} exited with {}", self.program.to_string_lossy(), output.status);
        if output.status.success() {
            IntegrityOutcome::Sound
        } else {
            IntegrityOutcome::IssuesFound { diagnostics: diagnostics(&output) }
        }
    }

    fn spawn_error(&self, source: io::Error) -> InspectError {
        warn!("could not start {}: {}", self.program.to_string_lossy(), source);
        if source.kind() == io::ErrorKind::NotFound {
            InspectError::ToolMissing { program: self.program.clone() }
        } else {
            InspectError::ToolInvocation { program: self.program.clone(), source }
        }
    }
}

// qpdf reports most damage on stderr but some findings only on stdout.
fn diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return stderr.into_owned();
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}
