//! Hits command implementation
//!
//! Lists the rules whose filter accepts each input line as a whole.

use super::{build_engine, InputArgs, EXIT_FINDINGS};
use crate::anonymization::ScanEngine;
use crate::config::LeakscanConfig;
use clap::Args;
use serde::Serialize;

/// Arguments for the hits command
#[derive(Args, Debug)]
pub struct HitsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Exit with code 1 when any line hits a rule
    #[arg(long)]
    pub fail_on_findings: bool,
}

/// A rule matched by one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineHit {
    /// 1-based line number
    pub line: usize,
    pub rule: String,
    pub description: String,
    pub severity: u8,
}

impl HitsArgs {
    /// Execute the hits command
    pub fn execute(&self, config: &LeakscanConfig) -> anyhow::Result<i32> {
        let engine = build_engine(config)?;
        let text = self.input.read()?;

        let hits = line_hits(&engine, &text);
        tracing::info!(hits = hits.len(), "Hits computed");
        println!("{}", serde_json::to_string_pretty(&hits)?);

        if !hits.is_empty() && self.fail_on_findings {
            return Ok(EXIT_FINDINGS);
        }
        Ok(0)
    }
}

/// Rules hit by each non-blank line, in rule order
pub fn line_hits(engine: &ScanEngine, text: &str) -> Vec<LineHit> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .flat_map(|(index, line)| {
            engine.hits(line.trim()).into_iter().map(move |rule| LineHit {
                line: index + 1,
                rule: rule.name.clone(),
                description: rule.description.clone(),
                severity: rule.severity,
            })
        })
        .collect()
}
