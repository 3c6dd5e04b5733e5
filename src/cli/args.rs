//! Command line argument parsing for the Verdant CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Verdant - fuzzy correction of plant-care terms in chat messages
#[derive(Parser, Debug, Clone)]
#[command(name = "verdant")]
#[command(about = "Fuzzy dictionary correction for plant-care chat input")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VerdantArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "VERDANT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VerdantArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity.
    ///
    /// `-vvv` turns on per-token decisions, `-vvvv` every scored candidate.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct misspelled terms in a message
    Check(CheckArgs),

    /// Print the edit distance between two strings
    Distance(CompareArgs),

    /// Print the similarity percentage of two strings
    Similarity(CompareArgs),

    /// List or export the domain vocabulary
    Dictionary(DictionaryArgs),
}

/// Arguments for checking a message
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Message to check
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Known term consulted before the domain vocabulary (repeatable)
    #[arg(short, long = "term", value_name = "TERM")]
    pub terms: Vec<String>,

    /// File of known terms, one per line
    #[arg(long, value_name = "TERMS_FILE")]
    pub terms_file: Option<PathBuf>,

    /// Also print the user-facing correction notice
    #[arg(short, long)]
    pub notice: bool,
}

/// Arguments for comparing two strings
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    #[arg(value_name = "A")]
    pub a: String,

    #[arg(value_name = "B")]
    pub b: String,
}

/// Arguments for the dictionary command
#[derive(Parser, Debug, Clone)]
pub struct DictionaryArgs {
    /// Write the terms to this file instead of printing them
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
