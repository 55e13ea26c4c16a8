//! Per-file checks

pub mod integrity;
pub mod metadata;
