//! Scan command implementation
//!
//! Reports, per rule name, whether any line of the input matched.

use super::{build_engine, InputArgs, EXIT_FINDINGS};
use crate::anonymization::ScanEngine;
use crate::config::LeakscanConfig;
use crate::log_scan_complete;
use clap::{Args, ValueEnum};
use std::time::Instant;

/// Output schema of the scan result
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanSchema {
    /// One entry per configured rule name
    #[default]
    Open,
    /// The five default catalog fields, always present
    Default,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Result schema
    #[arg(long, value_enum, default_value_t = ScanSchema::Open)]
    pub schema: ScanSchema,

    /// Exit with code 1 when anything is found
    #[arg(long)]
    pub fail_on_findings: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self, config: &LeakscanConfig) -> anyhow::Result<i32> {
        let engine = build_engine(config)?;
        let text = self.input.read()?;

        let start = Instant::now();
        let (json, found) = scan_text(&engine, &text, self.schema)?;
        log_scan_complete!("scan", usize::from(found), start.elapsed());

        println!("{json}");

        if found && self.fail_on_findings {
            return Ok(EXIT_FINDINGS);
        }
        Ok(0)
    }
}

/// Run detection over every line of `text`, returning the JSON result and
/// whether any rule matched
pub fn scan_text(
    engine: &ScanEngine,
    text: &str,
    schema: ScanSchema,
) -> anyhow::Result<(String, bool)> {
    let lines: Vec<&str> = text.lines().collect();

    match schema {
        ScanSchema::Open => {
            let result = engine.find(&lines);
            Ok((serde_json::to_string_pretty(&result)?, result.any()))
        }
        ScanSchema::Default => {
            let result = engine.find_default_schema(&lines)?;
            Ok((serde_json::to_string_pretty(&result)?, result.any()))
        }
    }
}
