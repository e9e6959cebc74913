//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Leakscan using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Leakscan - find and anonymize PII in free text
#[derive(Parser, Debug)]
#[command(name = "leakscan")]
#[command(version, about, long_about = None)]
#[command(author = "Leakscan Contributors")]
pub struct Cli {
    /// Path to configuration file; built-in defaults when omitted
    #[arg(short, long, env = "LEAKSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LEAKSCAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report which rules match anywhere in the input
    Scan(commands::scan::ScanArgs),

    /// List the rules matched by each input line
    Hits(commands::hits::HitsArgs),

    /// Rewrite values matched by anonymizing rules
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Replace every matched word with <MASKED>
    Mask(commands::mask::MaskArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
