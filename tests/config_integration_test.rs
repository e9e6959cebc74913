//! Configuration loading through to an audited anonymization pass

use leakscan::anonymization::AnonymizeStrategy;
use leakscan::cli::commands::build_engine;
use leakscan::config::{load_config, load_config_str};
use leakscan::domain::LeakscanError;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_configured_catalog_anonymizes() {
    let file = write_config(
        r#"
[catalog.rules.cpf_number]
detector = "cpf"
name = "brazilian_CPF"
severity = 3
anonymize = true
anonymize_string = "[CPF_REDACTED]"

[catalog.rules.email_address]
detector = "email"
severity = 3
anonymize = true
strategy = "mask"
anonymize_string = "*"
anonymize_length = 3
"#,
    );

    let config = load_config(file.path()).unwrap();
    let rules = config.catalog.build_rule_set().unwrap();
    assert_eq!(rules.len(), 5);
    assert_eq!(
        rules.get("email_address").unwrap().anonymize_options.strategy,
        AnonymizeStrategy::Mask
    );

    let engine = build_engine(&config).unwrap();
    let (text, found) = engine.anonymize_findings("cpf 111.444.777-35 mail joao@ifood.com.br");
    assert!(found);
    assert_eq!(text, "cpf [CPF_REDACTED] mail ***o@ifood.com.br");
}

#[test]
fn test_audit_log_receives_report() {
    let dir = TempDir::new().unwrap();
    let audit_path = dir.path().join("audit").join("leakscan_audit.log");
    let config = load_config_str(&format!(
        r#"
[audit]
enabled = true
log_path = "{}"

[catalog]
include_defaults = false

[catalog.rules.ip_address]
detector = "ipv4"
severity = 2
anonymize = true
"#,
        audit_path.display()
    ))
    .unwrap();

    let engine = build_engine(&config).unwrap();
    let outcome = engine.anonymize_with_report("from 10.0.0.1 to 10.0.0.2");
    assert_eq!(outcome.text, "from <REDACTED> to <REDACTED>");
    assert_eq!(outcome.report.total_findings, 2);

    let contents = std::fs::read_to_string(&audit_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);

    let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(entry["total_findings"], 2);
    assert_eq!(entry["findings_by_rule"]["ip_address"], 2);
    assert!(!contents.contains("10.0.0.1"));
}

#[test]
fn test_env_substitution_in_replacement() {
    std::env::set_var("LEAKSCAN_IT_CARD_MASK", "[CARD]");
    let config = load_config_str(
        r#"
[catalog.rules.credit_card]
detector = "credit_card"
severity = 5
anonymize = true
anonymize_string = "${LEAKSCAN_IT_CARD_MASK}"
"#,
    )
    .unwrap();
    std::env::remove_var("LEAKSCAN_IT_CARD_MASK");

    let engine = build_engine(&config).unwrap();
    let (text, _) = engine.anonymize_findings("paid with 5425233430109903.");
    assert_eq!(text, "paid with [CARD].");
}

#[test]
fn test_invalid_catalog_is_configuration_error() {
    let result = load_config_str(
        r#"
[catalog.rules.broken]
detector = "email"
name = ""
"#,
    );
    assert!(matches!(result, Err(LeakscanError::Configuration(_))));
}

#[test]
fn test_missing_file_is_configuration_error() {
    let result = load_config("/nonexistent/leakscan.toml");
    assert!(matches!(result, Err(LeakscanError::Configuration(_))));
}
