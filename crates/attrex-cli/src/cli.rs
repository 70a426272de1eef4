//! CLI argument definitions for the attribute extractor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use crate::types::ListMode;

#[derive(Parser)]
#[command(
    name = "attrex",
    version,
    about = "Extract attribute shortnames from oneM2M specification documents",
    long_about = "Extract attribute short and long names, categories, and cross-references\n\
                  from the oneM2M specification .docx documents (TS-0004, TS-0022, TS-0023).\n\
                  Aggregated results are written as JSON, optionally as CSV."
)]
pub struct Cli {
    /// Documents to parse (.docx).
    #[arg(value_name = "DOCUMENT", required = true)]
    pub documents: Vec<PathBuf>,

    /// Output directory for generated files.
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", default_value = "out")]
    pub output_dir: PathBuf,

    /// Additionally generate one shortname CSV per input document.
    #[arg(long = "csv", short = 'c')]
    pub csv: bool,

    /// List all found attributes and write attributes.csv.
    #[arg(long = "list", short = 'l', conflicts_with = "list_duplicates")]
    pub list: bool,

    /// List only duplicate attributes and write duplicates.csv.
    #[arg(long = "list-duplicates")]
    pub list_duplicates: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Console listing / aggregate-CSV mode derived from the two
    /// mutually exclusive list flags.
    pub fn list_mode(&self) -> ListMode {
        if self.list_duplicates {
            ListMode::DuplicatesOnly
        } else if self.list {
            ListMode::All
        } else {
            ListMode::None
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["attrex", "TS-0004.docx"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert!(!cli.csv);
        assert!(matches!(cli.list_mode(), ListMode::None));
        assert_eq!(cli.documents.len(), 1);
    }

    #[test]
    fn at_least_one_document_is_required() {
        assert!(Cli::try_parse_from(["attrex"]).is_err());
    }

    #[test]
    fn list_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["attrex", "--list", "--list-duplicates", "a.docx"]).is_err());
    }

    #[test]
    fn list_modes() {
        let cli = Cli::try_parse_from(["attrex", "-l", "a.docx"]).unwrap();
        assert!(matches!(cli.list_mode(), ListMode::All));
        let cli = Cli::try_parse_from(["attrex", "--list-duplicates", "a.docx"]).unwrap();
        assert!(matches!(cli.list_mode(), ListMode::DuplicatesOnly));
    }
}
