//! Anonymize command implementation
//!
//! Rewrites the values matched by anonymizing rules and prints the result.
//! In dry-run mode only the report is produced.

use super::{build_engine, InputArgs, EXIT_FINDINGS};
use crate::anonymization::catalog::DEFAULT_REDACT_STRING;
use crate::anonymization::{AnonymizationOutcome, RuleSet, ScanEngine};
use crate::config::LeakscanConfig;
use crate::log_scan_complete;
use clap::{Args, ValueEnum};
use std::time::Duration;

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    None,
    Console,
    Json,
}

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Report findings without printing rewritten text
    #[arg(long)]
    pub dry_run: bool,

    /// Redact with every rule, including detection-only ones
    #[arg(long)]
    pub redact_all: bool,

    /// Report written to stderr (always console in dry-run mode unless set)
    #[arg(long, value_enum)]
    pub report: Option<ReportFormat>,

    /// Exit with code 1 when anything was anonymized
    #[arg(long)]
    pub fail_on_findings: bool,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config: &LeakscanConfig) -> anyhow::Result<i32> {
        let mut engine = build_engine(config)?;
        if self.redact_all {
            engine = redact_all(engine);
        }

        let dry_run = self.dry_run || config.application.dry_run;
        let text = self.input.read()?;
        let outcome = engine.anonymize_with_report(&text);

        log_scan_complete!(
            "anonymize",
            outcome.report.total_findings,
            Duration::from_millis(outcome.report.processing_time_ms)
        );

        let format = self.report.unwrap_or(if dry_run {
            ReportFormat::Console
        } else {
            ReportFormat::None
        });
        emit_report(&outcome, format)?;

        if !dry_run {
            print!("{}", outcome.text);
        }

        if outcome.has_findings && self.fail_on_findings {
            return Ok(EXIT_FINDINGS);
        }
        Ok(0)
    }
}

fn emit_report(outcome: &AnonymizationOutcome, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::None => {}
        ReportFormat::Console => eprint!("{}", outcome.report.format_console()),
        ReportFormat::Json => eprintln!("{}", outcome.report.format_json()?),
    }
    Ok(())
}

/// Turn on redaction for rules that only detect, keeping configured ones
pub fn redact_all(engine: ScanEngine) -> ScanEngine {
    let rules: RuleSet = engine
        .rules()
        .iter()
        .map(|(key, rule)| {
            let rule = if rule.anonymize {
                rule.clone()
            } else {
                rule.clone().redact(DEFAULT_REDACT_STRING)
            };
            (key.to_string(), rule)
        })
        .collect();

    let mut redacting = ScanEngine::new(rules);
    if let Some(logger) = engine.audit_logger() {
        redacting = redacting.with_audit_logger(logger.clone());
    }
    redacting
}
