//! Scan engine
//!
//! This module provides the [`ScanEngine`] that runs a [`RuleSet`] over
//! free text, either to report which rules matched or to rewrite the matched
//! values.
//!
//! # Rule ordering
//!
//! Rules are evaluated in ascending order of name, ties broken by key. When
//! anonymizing, every rule sees the text as rewritten by the rules before it,
//! so on overlapping matches the rule whose name sorts first wins.
//!
//! # Examples
//!
//! ```
//! use leakscan::anonymization::{Rule, RuleSet, ScanEngine};
//! use leakscan::detector::builtin;
//!
//! let rules = RuleSet::new().with_rule(
//!     "cpf_number",
//!     Rule::new("brazilian_CPF", builtin::cpf())
//!         .with_severity(3)
//!         .redact("[CPF_REDACTED]"),
//! );
//! let engine = ScanEngine::new(rules);
//!
//! let (text, has_findings) =
//!     engine.anonymize_findings(r#"{"content":"my cpf is 111444777-35"}"#);
//! assert_eq!(text, r#"{"content":"my cpf is [CPF_REDACTED]"}"#);
//! assert!(has_findings);
//! ```

use crate::anonymization::{
    anonymizer::strategy_for,
    audit::{self, AuditLogger},
    catalog::{self, DEFAULT_MASK_STRING},
    models::{AnonymizationOutcome, DefaultCatalogResult, DetectionResult, Finding},
    report::AnonymizationReport,
    rules::{Rule, RuleSet},
    tokenizer::{extended_tokens, line_tokens, strip_wrapping},
};
use crate::domain::{LeakscanError, Result};
use std::collections::HashSet;
use std::time::Instant;

/// Detection and anonymization over a rule set
///
/// # Thread Safety
///
/// The engine holds no mutable state. One instance can serve many
/// concurrent calls, for example behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ScanEngine {
    rules: RuleSet,
    audit_logger: Option<AuditLogger>,
}

impl ScanEngine {
    /// Create an engine over `rules`
    pub fn new(rules: RuleSet) -> Self {
        tracing::debug!(rules = rules.len(), "Scan engine created");
        Self {
            rules,
            audit_logger: None,
        }
    }

    /// Engine over [`catalog::default_rule_set`]
    pub fn with_default_rules() -> Self {
        Self::new(catalog::default_rule_set())
    }

    /// Engine with no rules; finds nothing
    pub fn empty() -> Self {
        Self::new(RuleSet::new())
    }

    /// Append a report entry to `logger` after each anonymization pass
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit_logger = Some(logger);
        self
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit_logger.as_ref()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Which rules match anywhere in `lines`.
    ///
    /// Every line is split on whitespace and each word tested on its own. A
    /// rule is found as soon as one word of any line matches.
    pub fn find<S: AsRef<str>>(&self, lines: &[S]) -> DetectionResult {
        let mut result = DetectionResult::new();

        for (_, rule) in self.rules.ordered_rules() {
            let found = lines
                .iter()
                .any(|line| line_tokens(line.as_ref()).any(|token| rule.filter.matches(token)));
            result.record(rule.name.as_str(), found);
        }

        tracing::debug!(
            lines = lines.len(),
            found = result.found_rules().count(),
            "Detection pass complete"
        );
        result
    }

    /// [`find`](Self::find) over text split on newlines
    pub fn find_text(&self, text: &str) -> DetectionResult {
        let lines: Vec<&str> = text.split('\n').collect();
        self.find(&lines)
    }

    /// [`find`](Self::find) projected onto the default catalog schema.
    ///
    /// Results for rule names outside the default catalog are dropped
    /// without notice.
    ///
    /// # Errors
    ///
    /// Returns [`LeakscanError::InvariantViolation`] if the projection
    /// itself fails, which never happens in a correct build.
    pub fn find_default_schema<S: AsRef<str>>(&self, lines: &[S]) -> Result<DefaultCatalogResult> {
        let result = self.find(lines);

        let value = serde_json::to_value(&result).map_err(|e| {
            LeakscanError::InvariantViolation(format!("Failed to serialize detection result: {e}"))
        })?;
        serde_json::from_value(value).map_err(|e| {
            LeakscanError::InvariantViolation(format!(
                "Failed to project detection result onto default schema: {e}"
            ))
        })
    }

    /// Rules whose filter accepts `s` as a single token
    pub fn hits(&self, s: &str) -> Vec<&Rule> {
        self.rules.hits(s)
    }

    /// Rewrite every value matched by an anonymizing rule.
    ///
    /// Returns the rewritten text and whether any anonymizing rule matched.
    pub fn anonymize_findings(&self, s: &str) -> (String, bool) {
        let outcome = self.anonymize_with_report(s);
        (outcome.text, outcome.has_findings)
    }

    /// Like [`anonymize_findings`](Self::anonymize_findings), also returning
    /// a report of the findings
    pub fn anonymize_with_report(&self, s: &str) -> AnonymizationOutcome {
        let start = Instant::now();
        let mut report = AnonymizationReport::new();
        let mut text = s.to_string();

        for (key, rule) in self.rules.ordered_rules() {
            if !rule.anonymize {
                continue;
            }
            report.rules_evaluated += 1;

            let strategy = strategy_for(&rule.anonymize_options);
            let mut seen = HashSet::new();

            for token in extended_tokens(&text) {
                if !rule.filter.matches(&token) {
                    continue;
                }

                let value = strip_wrapping(&token);
                if value.is_empty() || !seen.insert(value.to_string()) {
                    continue;
                }

                let rewritten = strategy.rewrite(&text, value);
                let finding = Finding {
                    rule_key: key.to_string(),
                    rule_name: rule.name.clone(),
                    severity: rule.severity,
                    strategy: rule.anonymize_options.strategy,
                    value_hash: audit::hash_value(value),
                    value_length: value.chars().count(),
                    rewritten: rewritten.is_some(),
                };
                audit::record_finding(&finding);
                report.add_finding(finding);

                if let Some(rewritten) = rewritten {
                    text = rewritten;
                }
            }
        }

        report.processing_time_ms = start.elapsed().as_millis() as u64;

        if let Some(ref logger) = self.audit_logger {
            if let Err(e) = logger.log_report(&report) {
                tracing::warn!(error = %e, "Failed to write audit log entry");
            }
        }

        tracing::debug!(
            findings = report.total_findings,
            elapsed_ms = report.processing_time_ms,
            "Anonymization pass complete"
        );

        AnonymizationOutcome {
            text,
            has_findings: report.has_findings(),
            report,
        }
    }

    /// Replace every whitespace-separated word matched by any rule with
    /// [`DEFAULT_MASK_STRING`].
    ///
    /// Per-rule anonymization options are ignored and words are not
    /// stripped of punctuation.
    pub fn mask_findings(&self, s: &str) -> String {
        let mut words: Vec<&str> = Vec::new();
        for (_, rule) in self.rules.ordered_rules() {
            words.extend(line_tokens(s).filter(|token| rule.filter.matches(token)));
        }

        // Longest first so a word contained in another doesn't split it
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words.dedup();

        words
            .into_iter()
            .fold(s.to_string(), |text, word| text.replace(word, DEFAULT_MASK_STRING))
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
