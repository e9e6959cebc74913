//! Configuration management for Leakscan.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Leakscan uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LEAKSCAN_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//! - Custom rules built from the built-in detectors
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use leakscan::anonymization::ScanEngine;
//! use leakscan::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("leakscan.toml")?;
//! let engine = ScanEngine::new(config.catalog.build_rule_set()?);
//! let (clean, found) = engine.anonymize_findings("reach me at joao@ifood.com.br");
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/leakscan"
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/leakscan_audit.log"
//!
//! [catalog]
//! include_defaults = true
//! extended = false
//!
//! [catalog.rules.email_address]
//! detector = "email"
//! severity = 3
//! anonymize = true
//! strategy = "mask"
//! anonymize_string = "*"
//! anonymize_length = 3
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_str, load_default_config};
pub use schema::{
    ApplicationConfig, AuditConfig, CatalogConfig, LeakscanConfig, LoggingConfig, RuleConfig,
};
