//! Built-in rule catalogs
//!
//! Catalogs are built fresh on every call; callers own the returned
//! [`RuleSet`] and may extend or override it freely.

use crate::anonymization::rules::{Rule, RuleSet};
use crate::detector::builtin;

/// Replacement used by [`crate::anonymization::ScanEngine::mask_findings`]
pub const DEFAULT_MASK_STRING: &str = "<MASKED>";

/// Replacement used by redacting rules unless configured otherwise
pub const DEFAULT_REDACT_STRING: &str = "<REDACTED>";

/// Rule names of the default catalog, as exposed by the fixed-schema result
pub const DEFAULT_RULE_NAMES: [&str; 5] = [
    "brazilian_CNPJ",
    "brazilian_CPF",
    "credit_card",
    "email_address",
    "ip_address",
];

fn cpf_rule() -> Rule {
    Rule::new("brazilian_CPF", builtin::cpf())
        .with_description("Brazilian CPF")
        .with_severity(3)
}

fn cnpj_rule() -> Rule {
    Rule::new("brazilian_CNPJ", builtin::cnpj())
        .with_description("Brazilian CNPJ")
        .with_severity(3)
}

fn email_rule() -> Rule {
    Rule::new("email_address", builtin::email())
        .with_description("valid email address")
        .with_severity(3)
}

fn ip_rule() -> Rule {
    Rule::new("ip_address", builtin::ipv4())
        .with_description("valid IPv4 address")
        .with_severity(2)
}

fn credit_card_rule() -> Rule {
    Rule::new("credit_card", builtin::credit_card())
        .with_description("valid credit card number")
        .with_severity(5)
}

/// The five default detection-only rules
pub fn default_rule_set() -> RuleSet {
    RuleSet::new()
        .with_rule("cpf_number", cpf_rule())
        .with_rule("cnpj_number", cnpj_rule())
        .with_rule("email_address", email_rule())
        .with_rule("ip_address", ip_rule())
        .with_rule("credit_card", credit_card_rule())
}

/// Default rules with redaction enabled
pub fn default_redacting_rule_set() -> RuleSet {
    default_rule_set()
        .iter()
        .map(|(key, rule)| (key.to_string(), rule.clone().redact(DEFAULT_REDACT_STRING)))
        .collect()
}

/// Default rules plus the remaining built-in token detectors
pub fn extended_rule_set() -> RuleSet {
    default_rule_set()
        .with_rule(
            "ipv6_address",
            Rule::new("ipv6_address", builtin::ipv6())
                .with_description("valid IPv6 address")
                .with_severity(2),
        )
        .with_rule(
            "phone_number",
            Rule::new("phone_number", builtin::phone())
                .with_description("phone number")
                .with_severity(3),
        )
        .with_rule(
            "us_ssn",
            Rule::new("us_ssn", builtin::ssn())
                .with_description("US social security number")
                .with_severity(5),
        )
        .with_rule(
            "link",
            Rule::new("link", builtin::link())
                .with_description("web link")
                .with_severity(1),
        )
        .with_rule(
            "uuid",
            Rule::new("uuid", builtin::uuid())
                .with_description("UUID or GUID")
                .with_severity(1),
        )
        .with_rule(
            "vin",
            Rule::new("vehicle_identification_number", builtin::vin())
                .with_description("vehicle identification number")
                .with_severity(2),
        )
        .with_rule(
            "bank_info",
            Rule::new("bank_info", builtin::bank_info())
                .with_description("IBAN or ABA routing number")
                .with_severity(4),
        )
        .with_rule(
            "address",
            Rule::new("postal_address", builtin::address())
                .with_description("postal address with ZIP code")
                .with_severity(3),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::rules::AnonymizeStrategy;

    #[test]
    fn test_default_rule_set_shape() {
        let set = default_rule_set();
        assert_eq!(set.len(), 5);

        let expected = [
            ("cpf_number", "brazilian_CPF", 3),
            ("cnpj_number", "brazilian_CNPJ", 3),
            ("email_address", "email_address", 3),
            ("ip_address", "ip_address", 2),
            ("credit_card", "credit_card", 5),
        ];
        for (key, name, severity) in expected {
            let rule = set.get(key).unwrap();
            assert_eq!(rule.name, name);
            assert_eq!(rule.severity, severity);
            assert!(!rule.anonymize);
        }
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_default_names_match_catalog() {
        let mut names: Vec<_> = default_rule_set()
            .iter()
            .map(|(_, rule)| rule.name.clone())
            .collect();
        names.sort();
        assert_eq!(names, DEFAULT_RULE_NAMES.to_vec());
    }

    #[test]
    fn test_redacting_rule_set() {
        let set = default_redacting_rule_set();
        assert_eq!(set.len(), 5);
        for (_, rule) in set.iter() {
            assert!(rule.anonymize);
            assert_eq!(rule.anonymize_options.strategy, AnonymizeStrategy::Redact);
            assert_eq!(rule.anonymize_options.anonymize_string, DEFAULT_REDACT_STRING);
        }
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_catalogs_are_independent_values() {
        let mut first = default_rule_set();
        first.remove("cpf_number");
        assert_eq!(default_rule_set().len(), 5);
    }

    #[test]
    fn test_extended_rule_set() {
        let set = extended_rule_set();
        assert_eq!(set.len(), 13);
        assert!(set.get("us_ssn").is_some());
        assert!(set.validate().is_ok());
    }
}
