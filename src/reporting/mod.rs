//! User-facing console output

pub mod console;

pub use console::Console;
