//! Audit logger for anonymization operations

use crate::anonymization::models::Finding;
use crate::anonymization::report::AnonymizationReport;
use crate::domain::{LeakscanError, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// `tracing` target of audit events
pub const AUDIT_TARGET: &str = "leakscan::audit";

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    rules_evaluated: usize,
    total_findings: usize,
    processing_time_ms: u64,
    findings_by_rule: &'a BTreeMap<String, usize>,
    findings: &'a [Finding],
}

/// Hash a matched value using SHA-256
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Emit a finding as an audit event
pub fn record_finding(finding: &Finding) {
    tracing::info!(
        target: AUDIT_TARGET,
        rule = %finding.rule_name,
        rule_key = %finding.rule_key,
        severity = finding.severity,
        strategy = finding.strategy.as_str(),
        value_hash = %finding.value_hash,
        rewritten = finding.rewritten,
        "PII finding"
    );
}

/// Appends anonymization reports to an audit file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: impl Into<PathBuf>, json_format: bool) -> Result<Self> {
        let log_path = log_path.into();
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LeakscanError::Io(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Append one entry describing an anonymization pass
    pub fn log_report(&self, report: &AnonymizationReport) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: report.timestamp.to_rfc3339(),
            rules_evaluated: report.rules_evaluated,
            total_findings: report.total_findings,
            processing_time_ms: report.processing_time_ms,
            findings_by_rule: &report.findings_by_rule,
            findings: &report.findings,
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry<'_>) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                LeakscanError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)?;
            writeln!(file, "{json_line}")?;
        } else {
            let rules = entry
                .findings_by_rule
                .iter()
                .map(|(rule, count)| format!("{rule}={count}"))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(
                file,
                "[{}] Rules: {} | Findings: {} | By rule: {} | Time: {}ms",
                entry.timestamp,
                entry.rules_evaluated,
                entry.total_findings,
                rules,
                entry.processing_time_ms
            )?;
        }

        Ok(())
    }
}
