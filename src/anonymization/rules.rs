//! Rules and rule sets
//!
//! A [`Rule`] names a [`Matcher`] and attaches metadata plus an optional
//! anonymization policy. A [`RuleSet`] maps arbitrary keys to rules.

use crate::anonymization::catalog::DEFAULT_REDACT_STRING;
use crate::anonymization::tokenizer::extended_tokens;
use crate::detector::Matcher;
use crate::domain::RuleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a matched value is rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnonymizeStrategy {
    /// Replace every occurrence with a fixed string
    #[default]
    Redact,
    /// Overwrite a prefix of the first occurrence with filler
    Mask,
}

impl AnonymizeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnonymizeStrategy::Redact => "redact",
            AnonymizeStrategy::Mask => "mask",
        }
    }
}

/// Anonymization policy of a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizeOptions {
    pub strategy: AnonymizeStrategy,

    /// Replacement text for REDACT, filler repeated per character for MASK
    pub anonymize_string: String,

    /// Number of leading characters masked. Ignored by REDACT.
    pub anonymize_length: usize,
}

impl Default for AnonymizeOptions {
    fn default() -> Self {
        Self {
            strategy: AnonymizeStrategy::Redact,
            anonymize_string: DEFAULT_REDACT_STRING.to_string(),
            anonymize_length: 0,
        }
    }
}

/// A named detector with metadata and an optional anonymization policy
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub description: String,
    /// 1 (informational) to 5 (critical)
    pub severity: u8,
    pub filter: Matcher,
    pub anonymize: bool,
    pub anonymize_options: AnonymizeOptions,
}

impl Rule {
    /// Detection-only rule with severity 1
    pub fn new(name: impl Into<String>, filter: Matcher) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            severity: 1,
            filter,
            anonymize: false,
            anonymize_options: AnonymizeOptions::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_severity(mut self, severity: u8) -> Self {
        self.severity = severity;
        self
    }

    /// Enable anonymization, replacing every match with `replacement`
    pub fn redact(mut self, replacement: impl Into<String>) -> Self {
        self.anonymize = true;
        self.anonymize_options = AnonymizeOptions {
            strategy: AnonymizeStrategy::Redact,
            anonymize_string: replacement.into(),
            anonymize_length: 0,
        };
        self
    }

    /// Enable anonymization, masking the first `length` characters of a match
    pub fn mask(mut self, filler: impl Into<String>, length: usize) -> Self {
        self.anonymize = true;
        self.anonymize_options = AnonymizeOptions {
            strategy: AnonymizeStrategy::Mask,
            anonymize_string: filler.into(),
            anonymize_length: length,
        };
        self
    }

    /// Check the rule is internally consistent.
    ///
    /// `key` is only used to identify the rule in errors when its name is
    /// empty.
    pub fn validate(&self, key: &str) -> Result<(), RuleError> {
        if self.name.trim().is_empty() {
            return Err(RuleError::EmptyName {
                key: key.to_string(),
            });
        }

        if !(1..=5).contains(&self.severity) {
            return Err(RuleError::InvalidSeverity {
                rule: self.name.clone(),
                severity: self.severity,
            });
        }

        // A replacement the filter detects would be redacted again on the next pass
        if self.anonymize && self.anonymize_options.strategy == AnonymizeStrategy::Redact {
            let replacement = &self.anonymize_options.anonymize_string;
            let self_matching = self.filter.matches(replacement)
                || extended_tokens(replacement)
                    .iter()
                    .any(|token| self.filter.matches(token));
            if self_matching {
                return Err(RuleError::SelfMatchingReplacement {
                    rule: self.name.clone(),
                    replacement: replacement.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Rules keyed by an arbitrary identifier.
///
/// Keys need not equal rule names, and several keys may share one name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, returning the rule previously stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, rule: Rule) -> Option<Rule> {
        self.rules.insert(key.into(), rule)
    }

    /// Builder-style insert
    pub fn with_rule(mut self, key: impl Into<String>, rule: Rule) -> Self {
        self.insert(key, rule);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Rule> {
        self.rules.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Add every rule of `other`, overriding rules stored under the same key
    pub fn extend(&mut self, other: RuleSet) {
        self.rules.extend(other.rules);
    }

    /// Validate every rule, stopping at the first problem
    pub fn validate(&self) -> Result<(), RuleError> {
        for (key, rule) in &self.rules {
            rule.validate(key)?;
        }
        Ok(())
    }

    /// Rules in evaluation order: ascending by name, ties broken by key
    pub fn ordered_rules(&self) -> Vec<(&str, &Rule)> {
        let mut ordered: Vec<_> = self.iter().collect();
        ordered.sort_by(|(ka, a), (kb, b)| a.name.cmp(&b.name).then_with(|| ka.cmp(kb)));
        ordered
    }

    /// Every rule whose filter accepts `s` as a whole
    pub fn hits(&self, s: &str) -> Vec<&Rule> {
        self.ordered_rules()
            .into_iter()
            .filter(|(_, rule)| rule.filter.matches(s))
            .map(|(_, rule)| rule)
            .collect()
    }
}

impl FromIterator<(String, Rule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (String, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::builtin;

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new("brazilian_CPF", builtin::cpf())
            .with_description("Brazilian CPF")
            .with_severity(3)
            .mask("*", 3);

        assert_eq!(rule.name, "brazilian_CPF");
        assert_eq!(rule.severity, 3);
        assert!(rule.anonymize);
        assert_eq!(rule.anonymize_options.strategy, AnonymizeStrategy::Mask);
        assert_eq!(rule.anonymize_options.anonymize_length, 3);
    }

    #[test]
    fn test_default_options_redact() {
        let rule = Rule::new("email_address", builtin::email());
        assert!(!rule.anonymize);
        assert_eq!(rule.anonymize_options.strategy, AnonymizeStrategy::Redact);
        assert_eq!(rule.anonymize_options.anonymize_string, "<REDACTED>");
    }

    #[test]
    fn test_validate_empty_name() {
        let rule = Rule::new("  ", builtin::email());
        assert_eq!(
            rule.validate("email"),
            Err(RuleError::EmptyName {
                key: "email".to_string()
            })
        );
    }

    #[test]
    fn test_validate_severity_bounds() {
        let rule = Rule::new("email_address", builtin::email()).with_severity(0);
        assert!(matches!(
            rule.validate("email"),
            Err(RuleError::InvalidSeverity { severity: 0, .. })
        ));

        let rule = Rule::new("email_address", builtin::email()).with_severity(6);
        assert!(rule.validate("email").is_err());

        let rule = Rule::new("email_address", builtin::email()).with_severity(5);
        assert!(rule.validate("email").is_ok());
    }

    #[test]
    fn test_validate_self_matching_replacement() {
        let rule = Rule::new("email_address", builtin::email()).redact("redacted@example.com");
        assert!(matches!(
            rule.validate("email"),
            Err(RuleError::SelfMatchingReplacement { .. })
        ));

        let rule = Rule::new("email_address", builtin::email()).redact("[EMAIL_REDACTED]");
        assert!(rule.validate("email").is_ok());
    }

    #[test]
    fn test_mask_filler_is_not_checked() {
        // Masking only ever shortens the match, so the filler can be anything
        let rule = Rule::new("ip_address", builtin::ipv4()).mask("1", 3);
        assert!(rule.validate("ip").is_ok());
    }

    #[test]
    fn test_ordered_rules_by_name_then_key() {
        let set = RuleSet::new()
            .with_rule("z_key", Rule::new("alpha", builtin::email()))
            .with_rule("b_key", Rule::new("beta", builtin::email()))
            .with_rule("a_key", Rule::new("beta", builtin::email()));

        let order: Vec<_> = set.ordered_rules().into_iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["z_key", "a_key", "b_key"]);
    }

    #[test]
    fn test_hits() {
        let set = RuleSet::new()
            .with_rule("cpf_number", Rule::new("brazilian_CPF", builtin::cpf()))
            .with_rule("email_address", Rule::new("email_address", builtin::email()))
            .with_rule("ip", Rule::new("ip_address", builtin::ipv4()));

        let hits = set.hits("111.444.777-35");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "brazilian_CPF");

        assert!(set.hits("nothing to see").is_empty());
    }

    #[test]
    fn test_insert_replaces_by_key() {
        let mut set = RuleSet::new();
        assert!(set
            .insert("k", Rule::new("first", builtin::email()))
            .is_none());
        let previous = set.insert("k", Rule::new("second", builtin::email()));
        assert_eq!(previous.map(|r| r.name), Some("first".to_string()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("k").map(|r| r.name.as_str()), Some("second"));
    }
}
