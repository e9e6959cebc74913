//! Validate config command implementation
//!
//! Builds the configured rule catalog and prints a summary of it.

use super::build_engine;
use crate::config::LeakscanConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config: &LeakscanConfig, config_source: &str) -> anyhow::Result<i32> {
        tracing::info!(config = %config_source, "Validating configuration");

        let engine = match build_engine(config) {
            Ok(engine) => engine,
            Err(e) => {
                println!("Configuration validation failed");
                println!("   Error: {e:#}");
                return Ok(super::EXIT_CONFIG_ERROR);
            }
        };

        println!("Configuration is valid: {config_source}");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        } else {
            println!("  Audit Log: disabled");
        }
        println!("  Rules: {}", engine.rules().len());
        for (key, rule) in engine.rules().ordered_rules() {
            let mode = if rule.anonymize {
                rule.anonymize_options.strategy.as_str()
            } else {
                "detect"
            };
            println!(
                "    {:24} {:32} severity {}  {}",
                key, rule.name, rule.severity, mode
            );
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let args = ValidateArgs {};
        let code = args
            .execute(&LeakscanConfig::default(), "built-in defaults")
            .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_validate_rejects_bad_rule() {
        let config: LeakscanConfig = toml::from_str(
            r#"
[catalog.rules.email_address]
detector = "email"
severity = 7
"#,
        )
        .unwrap();
        let code = ValidateArgs {}.execute(&config, "inline").unwrap();
        assert_eq!(code, 2);
    }
}
