//! Configuration schema types
//!
//! This module defines the configuration structure for Leakscan. Every
//! section is optional: an empty file yields the default catalog with
//! console logging.

use crate::anonymization::catalog::{self, DEFAULT_REDACT_STRING};
use crate::anonymization::rules::{AnonymizeStrategy, Rule, RuleSet};
use crate::detector::DetectorKind;
use crate::domain::RuleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main Leakscan configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeakscanConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Rule catalog
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl LeakscanConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.logging.validate()?;
        self.audit.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Report findings without rewriting text
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// JSON-formatted console output
    #[serde(default)]
    pub json: bool,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Append a report entry per anonymization pass to `log_path`
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path is required when audit is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

/// Rule catalog configuration
///
/// ```toml
/// [catalog]
/// include_defaults = true
///
/// [catalog.rules.cpf_number]
/// detector = "cpf"
/// name = "brazilian_CPF"
/// severity = 3
/// anonymize = true
/// strategy = "redact"
/// anonymize_string = "[CPF_REDACTED]"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Start from the default five-rule catalog
    #[serde(default = "default_true")]
    pub include_defaults: bool,

    /// Also include the extended built-in rules
    #[serde(default)]
    pub extended: bool,

    /// Custom rules by key. A key already in the catalog replaces that rule.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl CatalogConfig {
    fn validate(&self) -> Result<(), String> {
        for (key, rule) in &self.rules {
            rule.validate(key)?;
        }
        self.build_rule_set().map(|_| ()).map_err(|e| e.to_string())
    }

    /// Assemble and validate the configured rule set
    pub fn build_rule_set(&self) -> Result<RuleSet, RuleError> {
        let mut rules = RuleSet::new();
        if self.include_defaults {
            rules.extend(catalog::default_rule_set());
        }
        if self.extended {
            rules.extend(catalog::extended_rule_set());
        }
        for (key, rule) in &self.rules {
            rules.insert(key.clone(), rule.to_rule(key));
        }

        rules.validate()?;
        Ok(rules)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            extended: false,
            rules: BTreeMap::new(),
        }
    }
}

/// A rule defined in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Built-in detector used as the rule filter
    pub detector: DetectorKind,

    /// Rule name; defaults to the rule key
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_severity")]
    pub severity: u8,

    #[serde(default)]
    pub anonymize: bool,

    #[serde(default)]
    pub strategy: AnonymizeStrategy,

    /// Replacement (redact) or filler (mask). Defaults to `<REDACTED>` and `*`.
    #[serde(default)]
    pub anonymize_string: Option<String>,

    /// Masked prefix length
    #[serde(default)]
    pub anonymize_length: usize,
}

impl RuleConfig {
    fn validate(&self, key: &str) -> Result<(), String> {
        if self.anonymize
            && self.strategy == AnonymizeStrategy::Mask
            && self.anonymize_string.as_deref() == Some("")
        {
            return Err(format!(
                "catalog.rules.{key}: anonymize_string must not be empty for the mask strategy"
            ));
        }
        Ok(())
    }

    /// Build the rule stored under `key`
    pub fn to_rule(&self, key: &str) -> Rule {
        let name = self.name.clone().unwrap_or_else(|| key.to_string());
        let rule = Rule::new(name, self.detector.matcher())
            .with_description(self.description.clone())
            .with_severity(self.severity);

        if !self.anonymize {
            return rule;
        }

        match self.strategy {
            AnonymizeStrategy::Redact => rule.redact(
                self.anonymize_string
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REDACT_STRING.to_string()),
            ),
            AnonymizeStrategy::Mask => rule.mask(
                self.anonymize_string
                    .clone()
                    .unwrap_or_else(|| "*".to_string()),
                self.anonymize_length,
            ),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_severity() -> u8 {
    1
}

fn default_local_path() -> String {
    "/var/log/leakscan".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/leakscan_audit.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: LeakscanConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert!(!config.logging.local_enabled);
        assert!(!config.audit.enabled);
        assert!(config.catalog.include_defaults);
        assert!(config.validate().is_ok());

        let rules = config.catalog.build_rule_set().unwrap();
        assert_eq!(rules.len(), 5);
    }

    #[test]
    fn test_custom_rule_overrides_default() {
        let config: LeakscanConfig = toml::from_str(
            r##"
[catalog.rules.cpf_number]
detector = "cpf"
name = "brazilian_CPF"
severity = 3
anonymize = true
strategy = "mask"
anonymize_string = "#"
anonymize_length = 4
"##,
        )
        .unwrap();

        let rules = config.catalog.build_rule_set().unwrap();
        assert_eq!(rules.len(), 5);
        let cpf = rules.get("cpf_number").unwrap();
        assert!(cpf.anonymize);
        assert_eq!(cpf.anonymize_options.strategy, AnonymizeStrategy::Mask);
        assert_eq!(cpf.anonymize_options.anonymize_string, "#");
        assert_eq!(cpf.anonymize_options.anonymize_length, 4);
    }

    #[test]
    fn test_rule_name_defaults_to_key() {
        let config: LeakscanConfig = toml::from_str(
            r#"
[catalog]
include_defaults = false

[catalog.rules.phone_number]
detector = "phone"
anonymize = true
"#,
        )
        .unwrap();

        let rules = config.catalog.build_rule_set().unwrap();
        assert_eq!(rules.len(), 1);
        let phone = rules.get("phone_number").unwrap();
        assert_eq!(phone.name, "phone_number");
        assert_eq!(phone.severity, 1);
        assert_eq!(phone.anonymize_options.anonymize_string, DEFAULT_REDACT_STRING);
    }

    #[test]
    fn test_unknown_detector_is_rejected() {
        let result: Result<LeakscanConfig, _> = toml::from_str(
            r#"
[catalog.rules.passport]
detector = "passport"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_severity_fails_validation() {
        let config: LeakscanConfig = toml::from_str(
            r#"
[catalog.rules.email]
detector = "email"
severity = 9
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
        assert!(matches!(
            config.catalog.build_rule_set(),
            Err(RuleError::InvalidSeverity { severity: 9, .. })
        ));
    }

    #[test]
    fn test_self_matching_replacement_fails_validation() {
        let config: LeakscanConfig = toml::from_str(
            r#"
[catalog.rules.email]
detector = "email"
anonymize = true
anonymize_string = "nobody@example.com"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_mask_filler_fails_validation() {
        let config: LeakscanConfig = toml::from_str(
            r#"
[catalog.rules.email]
detector = "email"
anonymize = true
strategy = "mask"
anonymize_string = ""
anonymize_length = 3
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extended_catalog() {
        let config: LeakscanConfig = toml::from_str(
            r#"
[catalog]
extended = true
"#,
        )
        .unwrap();
        let rules = config.catalog.build_rule_set().unwrap();
        assert!(rules.len() > 5);
        assert!(rules.get("us_ssn").is_some());
    }
}
