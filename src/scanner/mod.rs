//! Input path resolution

pub mod file_scanner;

pub use file_scanner::{
    collect_pdf_files, collect_pdf_files_with_progress, has_pdf_suffix, resolve_input,
    resolve_input_with_progress,
};
