//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LeakscanConfig;
use crate::domain::errors::LeakscanError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env placeholder is a valid regex")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LeakscanConfig
/// 4. Applies environment variable overrides (LEAKSCAN_* prefix)
/// 5. Validates the configuration, including every catalog rule
///
/// # Errors
///
/// Returns [`LeakscanError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, the TOML is malformed, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use leakscan::config::loader::load_config;
///
/// let config = load_config("leakscan.toml").expect("Failed to load config");
/// let rules = config.catalog.build_rule_set().expect("invalid catalog");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LeakscanConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LeakscanError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LeakscanError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Loads configuration from TOML text
pub fn load_config_str(contents: &str) -> Result<LeakscanConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: LeakscanConfig = toml::from_str(&contents)
        .map_err(|e| LeakscanError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);
    finish(config)
}

/// Built-in defaults with `LEAKSCAN_*` overrides, for runs without a file
pub fn load_default_config() -> Result<LeakscanConfig> {
    let mut config = LeakscanConfig::default();
    apply_env_overrides(&mut config);
    finish(config)
}

fn finish(config: LeakscanConfig) -> Result<LeakscanConfig> {
    config.validate().map_err(|e| {
        LeakscanError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            continue;
        }

        let processed = ENV_PLACEHOLDER.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
    }

    if !missing_vars.is_empty() {
        return Err(LeakscanError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_bool(name: &str, fallback: bool) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|val| val.parse().unwrap_or(fallback))
}

/// Applies environment variable overrides using LEAKSCAN_* prefix
///
/// Environment variables follow the pattern: LEAKSCAN_<SECTION>_<KEY>
/// For example: LEAKSCAN_APPLICATION_LOG_LEVEL, LEAKSCAN_AUDIT_ENABLED
fn apply_env_overrides(config: &mut LeakscanConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("LEAKSCAN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_bool("LEAKSCAN_APPLICATION_DRY_RUN", false) {
        config.application.dry_run = val;
    }

    // Logging overrides
    if let Some(val) = env_bool("LEAKSCAN_LOGGING_JSON", false) {
        config.logging.json = val;
    }
    if let Some(val) = env_bool("LEAKSCAN_LOGGING_LOCAL_ENABLED", true) {
        config.logging.local_enabled = val;
    }
    if let Ok(val) = std::env::var("LEAKSCAN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("LEAKSCAN_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    // Audit overrides
    if let Some(val) = env_bool("LEAKSCAN_AUDIT_ENABLED", false) {
        config.audit.enabled = val;
    }
    if let Ok(val) = std::env::var("LEAKSCAN_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }
    if let Some(val) = env_bool("LEAKSCAN_AUDIT_JSON_FORMAT", true) {
        config.audit.json_format = val;
    }

    // Catalog overrides
    if let Some(val) = env_bool("LEAKSCAN_CATALOG_INCLUDE_DEFAULTS", true) {
        config.catalog.include_defaults = val;
    }
    if let Some(val) = env_bool("LEAKSCAN_CATALOG_EXTENDED", false) {
        config.catalog.extended = val;
    }
}
