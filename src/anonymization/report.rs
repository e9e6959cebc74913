//! Anonymization reporting
//!
//! Summarizes what an anonymization pass found, per rule and per severity,
//! without ever holding plaintext values.

use crate::anonymization::models::Finding;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Report of a single anonymization pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationReport {
    /// When the pass ran
    pub timestamp: DateTime<Utc>,

    /// Number of anonymizing rules evaluated
    pub rules_evaluated: usize,

    /// Distinct values found across all rules
    pub total_findings: usize,

    /// Findings by rule name
    pub findings_by_rule: BTreeMap<String, usize>,

    /// Findings by rule severity
    pub findings_by_severity: BTreeMap<u8, usize>,

    /// Individual findings, hashed
    pub findings: Vec<Finding>,

    /// Wall-clock time of the pass (ms)
    pub processing_time_ms: u64,
}

impl AnonymizationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            rules_evaluated: 0,
            total_findings: 0,
            findings_by_rule: BTreeMap::new(),
            findings_by_severity: BTreeMap::new(),
            findings: Vec::new(),
            processing_time_ms: 0,
        }
    }

    /// Add a finding
    pub fn add_finding(&mut self, finding: Finding) {
        self.total_findings += 1;
        *self
            .findings_by_rule
            .entry(finding.rule_name.clone())
            .or_insert(0) += 1;
        *self
            .findings_by_severity
            .entry(finding.severity)
            .or_insert(0) += 1;
        self.findings.push(finding);
    }

    pub fn has_findings(&self) -> bool {
        self.total_findings > 0
    }

    /// Highest severity among findings
    pub fn max_severity(&self) -> Option<u8> {
        self.findings_by_severity.keys().next_back().copied()
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    ANONYMIZATION REPORT                       \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Rules Evaluated:      {}\n",
            self.rules_evaluated
        ));
        output.push_str(&format!(
            "  Total Findings:       {}\n",
            self.total_findings
        ));
        output.push_str(&format!(
            "  Processing Time:      {} ms\n",
            self.processing_time_ms
        ));
        output.push('\n');

        if !self.findings_by_rule.is_empty() {
            output.push_str("FINDINGS BY RULE\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut rules: Vec<_> = self.findings_by_rule.iter().collect();
            rules.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (rule, count) in rules {
                output.push_str(&format!("  {:30} {:>5}\n", rule, count));
            }
            output.push('\n');
        }

        if !self.findings_by_severity.is_empty() {
            output.push_str("FINDINGS BY SEVERITY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (severity, count) in self.findings_by_severity.iter().rev() {
                output.push_str(&format!("  severity {:<21} {:>5}\n", severity, count));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for AnonymizationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::rules::AnonymizeStrategy;

    fn finding(rule_name: &str, severity: u8) -> Finding {
        Finding {
            rule_key: rule_name.to_lowercase(),
            rule_name: rule_name.to_string(),
            severity,
            strategy: AnonymizeStrategy::Redact,
            value_hash: "00".repeat(32),
            value_length: 12,
            rewritten: true,
        }
    }

    #[test]
    fn test_report_creation() {
        let report = AnonymizationReport::new();
        assert_eq!(report.total_findings, 0);
        assert!(!report.has_findings());
        assert!(report.findings_by_rule.is_empty());
        assert_eq!(report.max_severity(), None);
    }

    #[test]
    fn test_add_finding() {
        let mut report = AnonymizationReport::new();
        report.add_finding(finding("brazilian_CPF", 3));
        report.add_finding(finding("brazilian_CPF", 3));
        report.add_finding(finding("credit_card", 5));

        assert_eq!(report.total_findings, 3);
        assert_eq!(report.findings_by_rule.get("brazilian_CPF"), Some(&2));
        assert_eq!(report.findings_by_severity.get(&5), Some(&1));
        assert_eq!(report.max_severity(), Some(5));
    }

    #[test]
    fn test_format_console() {
        let mut report = AnonymizationReport::new();
        report.rules_evaluated = 5;
        report.add_finding(finding("email_address", 3));

        let output = report.format_console();
        assert!(output.contains("ANONYMIZATION REPORT"));
        assert!(output.contains("Rules Evaluated:      5"));
        assert!(output.contains("email_address"));
    }

    #[test]
    fn test_format_json() {
        let mut report = AnonymizationReport::new();
        report.add_finding(finding("ip_address", 2));

        let json = report.format_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_findings"], 1);
        assert_eq!(value["findings_by_severity"]["2"], 1);
    }
}
