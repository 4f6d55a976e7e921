//! Command-line arguments
//!
//! Parsed once at start-up and passed by value into the run; nothing here lives in
//! global state.

use clap::Parser;
use std::path::PathBuf;

use crate::app::error::{AppError, AppResult};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "git-log-searcher")]
#[command(about = "Search commit messages across several git repositories")]
#[command(
    after_help = "Directories to search are read from the `directories` list in the config file."
)]
pub struct Args {
    /// Regular expression matched against each commit message
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output width in columns (defaults to the terminal width, or 80)
    #[arg(
        short = 'w',
        long = "width",
        value_name = "COLUMNS",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub width: Option<u16>,

    /// Force colored output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(
        short = 'o',
        long = "log-format",
        value_name = "FORMAT",
        value_parser = ["text", "ext", "json"]
    )]
    pub log_format: Option<String>,
}

impl Args {
    /// The single search pattern
    ///
    /// Anything other than exactly one positional argument is a usage error.
    pub fn pattern(&self) -> AppResult<&str> {
        match self.patterns.as_slice() {
            [pattern] => Ok(pattern.as_str()),
            [] => Err(AppError::Usage {
                message: "please specify pattern".to_string(),
            }),
            more => Err(AppError::Usage {
                message: format!(
                    "please specify exactly one pattern (got {}); quote patterns containing spaces",
                    more.len()
                ),
            }),
        }
    }

    /// Colour override from the command line: Some(true/false) or None for auto
    pub fn color_choice(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        }
    }
}
