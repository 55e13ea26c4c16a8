//! PDF file scanning and collection

use indicatif::ProgressBar;
use log::{debug, trace};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{InspectError, Result};

const PDF_SUFFIX: &str = ".pdf";

/// Whether the final component of `path` ends in `.pdf`, ignoring case
pub fn has_pdf_suffix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(PDF_SUFFIX))
        .unwrap_or(false)
}

/// Resolve user input into the list of PDF files to inspect
///
/// # Arguments
/// * `input` - A PDF file or a directory to search recursively
///
/// # Returns
/// The single file, or every PDF under the directory in walk order.
/// `InspectError::InvalidPath` when the input is neither.
pub fn resolve_input(input: &Path) -> Result<Vec<PathBuf>> {
    resolve_input_with_progress(input, &ProgressBar::hidden())
}

/// Same as [`resolve_input`], ticking `progress` while a directory is walked
pub fn resolve_input_with_progress(input: &Path, progress: &ProgressBar) -> Result<Vec<PathBuf>> {
    if input.is_file() && has_pdf_suffix(input) {
        debug!("{} is a PDF file", input.display());
        Ok(vec![input.to_path_buf()])
    } else if input.is_dir() {
        debug!("{} is a directory, walking it", input.display());
        collect_pdf_files_with_progress(input, progress)
    } else {
        debug!("{} is neither a PDF file nor a directory", input.display());
        Err(InspectError::InvalidPath(input.to_path_buf()))
    }
}

/// Collect all PDF files under a directory, at any depth
pub fn collect_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    collect_pdf_files_with_progress(dir, &ProgressBar::hidden())
}

/// Collect all PDF files under a directory, ticking `progress` per entry
pub fn collect_pdf_files_with_progress(dir: &Path, progress: &ProgressBar) -> Result<Vec<PathBuf>> {
    let mut pdf_files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        progress.tick();
        if is_regular_file(&entry) && has_pdf_suffix(entry.path()) {
            trace!("found {}", entry.path().display());
            pdf_files.push(entry.into_path());
        }
    }

    debug!("found {} PDF file(s) under {}", pdf_files.len(), dir.display());
    Ok(pdf_files)
}

// Symlinks to files are listed, symlinked directories are not descended.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
