//! Anonymization finding models

use crate::anonymization::report::AnonymizationReport;
use crate::anonymization::rules::AnonymizeStrategy;
use serde::{Deserialize, Serialize};

/// A value matched by an anonymizing rule.
///
/// Only a SHA-256 hash of the value is kept, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Key of the rule in its rule set
    pub rule_key: String,
    pub rule_name: String,
    pub severity: u8,
    pub strategy: AnonymizeStrategy,
    /// Hex-encoded SHA-256 of the matched value
    pub value_hash: String,
    /// Length of the matched value in characters
    pub value_length: usize,
    /// Whether the text was changed. A zero-length mask matches without rewriting.
    pub rewritten: bool,
}

/// Anonymized text plus what was found along the way
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationOutcome {
    pub text: String,
    pub has_findings: bool,
    pub report: AnonymizationReport,
}
