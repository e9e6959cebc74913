//! Domain error types
//!
//! This module defines the error hierarchy for Leakscan.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Leakscan error type
///
/// This is the primary error type used throughout the library.
/// Scanning and anonymization never fail on malformed input; errors only
/// come from configuration, catalog validation, or broken internal invariants.
#[derive(Debug, Error)]
pub enum LeakscanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rule catalog errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// An internal invariant was violated. Never expected in correct builds.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// Rule-specific errors
///
/// Raised when a rule or rule set is internally inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// Rule has an empty name
    #[error("Rule under key '{key}' has an empty name")]
    EmptyName { key: String },

    /// Severity outside of 1..=5
    #[error("Rule '{rule}' has severity {severity}, must be between 1 and 5")]
    InvalidSeverity { rule: String, severity: u8 },

    /// The REDACT replacement would itself be detected by the rule
    #[error("Rule '{rule}' redacts with '{replacement}' which its own filter matches")]
    SelfMatchingReplacement { rule: String, replacement: String },

    /// Configuration references a detector that doesn't exist
    #[error("Unknown detector '{0}'")]
    UnknownDetector(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for LeakscanError {
    fn from(err: std::io::Error) -> Self {
        LeakscanError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LeakscanError {
    fn from(err: serde_json::Error) -> Self {
        LeakscanError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LeakscanError {
    fn from(err: toml::de::Error) -> Self {
        LeakscanError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leakscan_error_display() {
        let err = LeakscanError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_rule_error_conversion() {
        let rule_err = RuleError::InvalidSeverity {
            rule: "email_address".to_string(),
            severity: 9,
        };
        let err: LeakscanError = rule_err.into();
        assert!(matches!(err, LeakscanError::Rule(_)));
        assert!(err.to_string().contains("severity 9"));
    }

    #[test]
    fn test_invariant_violation_display() {
        let err = LeakscanError::InvariantViolation("projection failed".to_string());
        assert_eq!(
            err.to_string(),
            "Internal invariant violated: projection failed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: LeakscanError = io_err.into();
        assert!(matches!(err, LeakscanError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LeakscanError = json_err.into();
        assert!(matches!(err, LeakscanError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: LeakscanError = toml_err.into();
        assert!(matches!(err, LeakscanError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_every_variant_names_its_category() {
        let errors = [
            LeakscanError::Configuration("x".to_string()),
            LeakscanError::Validation("x".to_string()),
            LeakscanError::Serialization("x".to_string()),
            LeakscanError::Io("x".to_string()),
            LeakscanError::InvariantViolation("x".to_string()),
        ];
        for err in errors {
            let message = err.to_string();
            assert_ne!(message, "x");
            assert!(message.ends_with(": x"), "unexpected message: {}", message);
        }
    }

    #[test]
    fn test_leakscan_error_implements_std_error() {
        let err = LeakscanError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
