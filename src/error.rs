//! Error types for the PDF inspector

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, InspectError>;

/// Everything that can go wrong while inspecting PDFs
#[derive(Error, Debug)]
pub enum InspectError {
    /// Input is neither an existing PDF file nor an existing directory
    #[error("The provided path is not a valid PDF file or directory: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The structural-validation executable could not be found
    #[error("{} is not installed or not found in system PATH", .program.to_string_lossy())]
    ToolMissing { program: OsString },

    /// The validation executable exists but could not be run
    #[error("failed to run {}: {source}", .program.to_string_lossy())]
    ToolInvocation {
        program: OsString,
        #[source]
        source: io::Error,
    },

    /// lopdf could not open or read the document-info dictionary
    #[error("cannot read metadata from {}: {source}", .path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// lopdf panicked on a hostile file
    #[error("PDF parser panicked while reading {}", .0.display())]
    ParserPanic(PathBuf),

    /// Directory traversal failed
    #[error("directory traversal failed: {0}")]
    Traversal(#[from] walkdir::Error),

    /// Console or prompt IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
