//! Redaction anonymization strategy

use super::Anonymizer;

/// Redaction strategy - replaces every occurrence with a fixed string
#[derive(Debug, Clone)]
pub struct RedactionStrategy {
    replacement: String,
}

impl RedactionStrategy {
    /// Create a new redaction strategy
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }
}

impl Anonymizer for RedactionStrategy {
    fn rewrite(&self, text: &str, value: &str) -> Option<String> {
        if value.is_empty() || !text.contains(value) {
            return None;
        }
        Some(text.replace(value, &self.replacement))
    }
}

impl Default for RedactionStrategy {
    fn default() -> Self {
        Self::new(crate::anonymization::catalog::DEFAULT_REDACT_STRING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction_replaces_every_occurrence() {
        let strategy = RedactionStrategy::new("[CPF_REDACTED]");
        let result = strategy
            .rewrite("111444777-35 and again 111444777-35", "111444777-35")
            .unwrap();
        assert_eq!(result, "[CPF_REDACTED] and again [CPF_REDACTED]");
    }

    #[test]
    fn test_redaction_missing_value() {
        let strategy = RedactionStrategy::default();
        assert_eq!(strategy.rewrite("nothing here", "111444777-35"), None);
        assert_eq!(strategy.rewrite("nothing here", ""), None);
    }

    #[test]
    fn test_redaction_default_string() {
        let strategy = RedactionStrategy::default();
        assert_eq!(
            strategy.rewrite("ip 10.0.0.1", "10.0.0.1"),
            Some("ip <REDACTED>".to_string())
        );
    }
}
