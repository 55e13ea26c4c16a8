//! PDF Inspector Library
//!
//! Resolves a user-supplied path into PDF files and runs two checks on each:
//! a structural check through an external `qpdf --check` and a dump of the
//! document-info dictionary read with lopdf.

pub mod core;
pub mod error;
pub mod reporting;
pub mod runner;
pub mod scanner;

pub use crate::core::{integrity, metadata};
pub use reporting::console;
pub use scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::integrity::{IntegrityChecker, IntegrityOutcome, DEFAULT_CHECK_PROGRAM};
    pub use crate::core::metadata::{inspect_metadata, read_document_info, MetadataOutcome, MetadataRecord};
    pub use crate::error::{InspectError, Result};
    pub use crate::reporting::console::Console;
    pub use crate::runner::{Inspector, InspectorConfig, RunSummary};
    pub use crate::scanner::file_scanner::{collect_pdf_files, has_pdf_suffix, resolve_input};
}
