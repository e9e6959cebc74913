//! Built-in composite detectors
//!
//! Each detector pairs a positive shape match with exclusions for the shapes
//! it is most often confused with.

use super::{and, any, not, patterns, Matcher};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phone number that is not an email, filename or repeating digit run
pub fn phone() -> Matcher {
    and(
        any(vec![patterns::phone(), patterns::phone_with_extension()]),
        not(any(vec![
            patterns::email(),
            patterns::filename(),
            patterns::repeating_number(),
        ])),
    )
}

/// URL that is not an email address
pub fn link() -> Matcher {
    and(patterns::url(), not(patterns::email()))
}

pub fn ssn() -> Matcher {
    and(
        patterns::ssn(),
        not(any(vec![
            phone(),
            patterns::filename(),
            patterns::repeating_number(),
        ])),
    )
}

pub fn email() -> Matcher {
    patterns::email()
}

pub fn ipv4() -> Matcher {
    patterns::ipv4()
}

pub fn ipv6() -> Matcher {
    patterns::ipv6()
}

/// Either IP family
pub fn ip() -> Matcher {
    any(vec![patterns::ipv4(), patterns::ipv6()])
}

/// Visa or Mastercard number passing Luhn, excluding known test cards
pub fn credit_card() -> Matcher {
    and(
        any(vec![
            patterns::visa_credit_card(),
            patterns::mastercard_credit_card(),
        ]),
        and(
            not(any(vec![
                patterns::uuid_shape(),
                patterns::repeating_number(),
                patterns::test_credit_card(),
            ])),
            patterns::luhn(),
        ),
    )
}

/// Street or PO box line together with a ZIP code.
///
/// Unlike the token detectors this searches inside the string, so it is only
/// useful for whole-string classification with [`crate::anonymization::ScanEngine::hits`].
pub fn address() -> Matcher {
    and(
        any(vec![patterns::street_address(), patterns::po_box()]),
        patterns::zip_code(),
    )
}

/// IBAN or ABA routing number
pub fn bank_info() -> Matcher {
    and(
        any(vec![patterns::iban(), patterns::routing_number()]),
        not(patterns::repeating_number()),
    )
}

pub fn uuid() -> Matcher {
    and(
        any(vec![
            patterns::uuid_shape(),
            patterns::guid(),
            patterns::uuid3(),
            patterns::uuid4(),
            patterns::uuid5(),
        ]),
        not(patterns::filename()),
    )
}

pub fn vin() -> Matcher {
    and(
        patterns::vin(),
        not(any(vec![
            patterns::filename(),
            patterns::repeating_number(),
            patterns::email(),
        ])),
    )
}

/// Structured identifiers that make natural-language heuristics pointless
pub fn halt_lang_detect() -> Matcher {
    any(vec![uuid(), link(), email(), credit_card()])
}

pub fn cpf() -> Matcher {
    patterns::cpf()
}

pub fn cnpj() -> Matcher {
    patterns::cnpj()
}

/// CPF or CNPJ
pub fn brazilian_pii() -> Matcher {
    any(vec![patterns::cpf(), patterns::cnpj()])
}

/// Name of a built-in detector, as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    Phone,
    Link,
    Ssn,
    Email,
    Ip,
    Ipv4,
    Ipv6,
    CreditCard,
    Address,
    BankInfo,
    Uuid,
    Vin,
    HaltLangDetect,
    Cpf,
    Cnpj,
    BrazilianPii,
}

impl DetectorKind {
    pub const ALL: [DetectorKind; 16] = [
        DetectorKind::Phone,
        DetectorKind::Link,
        DetectorKind::Ssn,
        DetectorKind::Email,
        DetectorKind::Ip,
        DetectorKind::Ipv4,
        DetectorKind::Ipv6,
        DetectorKind::CreditCard,
        DetectorKind::Address,
        DetectorKind::BankInfo,
        DetectorKind::Uuid,
        DetectorKind::Vin,
        DetectorKind::HaltLangDetect,
        DetectorKind::Cpf,
        DetectorKind::Cnpj,
        DetectorKind::BrazilianPii,
    ];

    /// Build the matcher for this detector
    pub fn matcher(self) -> Matcher {
        match self {
            DetectorKind::Phone => phone(),
            DetectorKind::Link => link(),
            DetectorKind::Ssn => ssn(),
            DetectorKind::Email => email(),
            DetectorKind::Ip => ip(),
            DetectorKind::Ipv4 => ipv4(),
            DetectorKind::Ipv6 => ipv6(),
            DetectorKind::CreditCard => credit_card(),
            DetectorKind::Address => address(),
            DetectorKind::BankInfo => bank_info(),
            DetectorKind::Uuid => uuid(),
            DetectorKind::Vin => vin(),
            DetectorKind::HaltLangDetect => halt_lang_detect(),
            DetectorKind::Cpf => cpf(),
            DetectorKind::Cnpj => cnpj(),
            DetectorKind::BrazilianPii => brazilian_pii(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DetectorKind::Phone => "phone",
            DetectorKind::Link => "link",
            DetectorKind::Ssn => "ssn",
            DetectorKind::Email => "email",
            DetectorKind::Ip => "ip",
            DetectorKind::Ipv4 => "ipv4",
            DetectorKind::Ipv6 => "ipv6",
            DetectorKind::CreditCard => "credit_card",
            DetectorKind::Address => "address",
            DetectorKind::BankInfo => "bank_info",
            DetectorKind::Uuid => "uuid",
            DetectorKind::Vin => "vin",
            DetectorKind::HaltLangDetect => "halt_lang_detect",
            DetectorKind::Cpf => "cpf",
            DetectorKind::Cnpj => "cnpj",
            DetectorKind::BrazilianPii => "brazilian_pii",
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectorKind {
    type Err = crate::domain::RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetectorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::domain::RuleError::UnknownDetector(s.to_string()))
    }
}
