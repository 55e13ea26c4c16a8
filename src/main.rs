use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use pdf_inspector::prelude::*;

const PROMPT: &str = "Please enter the path to your PDF file or directory: ";

#[derive(Parser)]
#[command(name = "pdf_inspector")]
#[command(about = "Check PDF structure with qpdf and dump document metadata", long_about = None)]
struct Cli {
    /// Structural validator to run as `<PROGRAM> --check <file>`
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_CHECK_PROGRAM)]
    qpdf: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let interactive = io::stdout().is_terminal();
    let console = Console::stdout(interactive && !cli.no_color);
    let config = InspectorConfig {
        check_program: cli.qpdf.into_os_string(),
        show_progress: io::stderr().is_terminal(),
    };
    let mut inspector = Inspector::new(config, console);

    inspector
        .console_mut()
        .prompt(PROMPT)
        .context("Failed to write prompt")?;
    let input = read_path(io::stdin().lock()).context("Failed to read path from stdin")?;

    inspector
        .run(&input)
        .with_context(|| format!("Inspection of {} aborted", input.display()))?;

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Read one line and strip the line ending, keeping any other whitespace
fn read_path(mut reader: impl BufRead) -> io::Result<PathBuf> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_path_strips_line_ending_only() {
        let path = read_path(&b"/data/My Scans /report.pdf\r\n"[..]).unwrap();
        assert_eq!(path, PathBuf::from("/data/My Scans /report.pdf"));
    }

    #[test]
    fn test_read_path_at_eof_is_empty() {
        let path = read_path(&b""[..]).unwrap();
        assert_eq!(path, PathBuf::new());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pdf_inspector"]);
        assert_eq!(cli.qpdf, PathBuf::from("qpdf"));
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_verbosity_counts() {
        let cli = Cli::parse_from(["pdf_inspector", "-vv", "--qpdf", "/opt/qpdf/bin/qpdf"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.qpdf, PathBuf::from("/opt/qpdf/bin/qpdf"));
    }
}
