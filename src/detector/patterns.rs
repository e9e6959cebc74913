//! Primitive shape and checksum predicates
//!
//! Each function returns a [`Matcher`] testing a single token. Tokens are
//! usually harvested from JSON text, so numeric identifiers tolerate wrapping
//! punctuation: leading and trailing characters that can't belong to the
//! identifier are trimmed before the anchored pattern is applied.

use super::checksum::{
    aba_routing_is_valid, cnpj_is_valid, cpf_is_valid, digits_only, iban_is_valid, luhn_is_valid,
};
use super::Matcher;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

static CPF_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{3}\.?\d{3}\.?\d{3}-?\d{2}$").expect("CPF pattern is a valid regex")
});

static CNPJ_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}$").expect("CNPJ pattern is a valid regex")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("Email pattern is a valid regex")
});

static VISA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^4\d{3}(?:-?\d{4}){3}$").expect("Visa pattern is a valid regex")
});

static MASTERCARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^5[1-5]\d{2}(?:-?\d{4}){3}$").expect("Mastercard pattern is a valid regex")
});

/// Card numbers published by payment processors for integration testing
const TEST_CARD_NUMBERS: [&str; 6] = [
    "4242424242424242",
    "4012888888881881",
    "4000056655665556",
    "5555555555554444",
    "5200828282828210",
    "5105105105105100",
];

const PHONE_BODY: &str = r"(?:\+?\d{1,3}[\s.\-]?)?\(?\d{2,4}\)?[\s.\-]?\d{3,5}[\s.\-]?\d{4}";

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{PHONE_BODY}$")).expect("Phone pattern is a valid regex")
});

static PHONE_WITH_EXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^{PHONE_BODY}\s*(?:#|x\.?|ext\.?|extension)\s*\d{{1,6}}$"
    ))
    .expect("Phone extension pattern is a valid regex")
});

static FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[\w\-. ~]+\.(?:txt|log|csv|tsv|json|xml|ya?ml|toml|ini|cfg|conf|pdf|docx?|xlsx?|pptx?|odt|rtf|png|jpe?g|gif|bmp|svg|webp|ico|zip|tar|gz|tgz|bz2|rar|7z|exe|dll|so|bin|iso|sh|bat|ps1|py|rs|go|js|ts|java|kt|rb|php|c|cpp|h|hpp|cs|html?|css|md|mp3|mp4|wav|avi|mov|mkv)$",
    )
    .expect("Filename pattern is a valid regex")
});

// Seven or more copies of one digit, optionally separated
static REPEATING_NUMBER: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(\d)(?:[\s.\-/]?\1){6,}")
        .expect("Repeating number pattern is a valid regex")
});

// Area 000, 666 and 9xx, group 00 and serial 0000 are never issued
static SSN: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"^(?!000|666|9\d\d)\d{3}-(?!00)\d{2}-(?!0000)\d{4}$")
        .expect("SSN pattern is a valid regex")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:https?|ftp)://|www\.)[^\s/$.?#][^\s]*$")
        .expect("URL pattern is a valid regex")
});

static STREET_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d{1,5}\s+(?:[A-Za-z0-9.\-']+\s+){0,4}(?:street|st|avenue|ave|road|rd|boulevard|blvd|drive|dr|lane|ln|way|court|ct|place|pl|square|sq|parkway|pkwy|circle|cir|trail|trl|highway|hwy)\b",
    )
    .expect("Street address pattern is a valid regex")
});

static PO_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bp\.?\s*o\.?\s*box\s+\d+\b").expect("PO box pattern is a valid regex")
});

static ZIP_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{5}(?:-\d{4})?\b").expect("ZIP code pattern is a valid regex")
});

static IBAN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}\d{2}[A-Z0-9]{11,30}$").expect("IBAN pattern is a valid regex")
});

static ROUTING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0\d|1[0-2]|2[1-9]|3[0-2]|6[1-9]|7[0-2]|80)\d{7}$")
        .expect("Routing number pattern is a valid regex")
});

static UUID_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("UUID pattern is a valid regex")
});

static GUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\{[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\}$")
        .expect("GUID pattern is a valid regex")
});

static UUID3: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("UUIDv3 pattern is a valid regex")
});

static UUID4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("UUIDv4 pattern is a valid regex")
});

static UUID5: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("UUIDv5 pattern is a valid regex")
});

static VIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("VIN pattern is a valid regex")
});

/// Trim characters rejected by `keep` from both ends
fn trim_edges(s: &str, keep: fn(char) -> bool) -> &str {
    s.trim_matches(|c: char| !keep(c))
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_ipv6_edge(c: char) -> bool {
    c.is_ascii_hexdigit() || c == ':'
}

fn is_uuid_edge(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '{' || c == '}'
}

/// Brazilian CPF with valid check digits, separators `.` and `-` optional
pub fn cpf() -> Matcher {
    Matcher::new(|s| {
        let candidate = trim_edges(s, is_digit);
        CPF_SHAPE.is_match(candidate) && cpf_is_valid(&digits_only(candidate))
    })
}

/// Brazilian CNPJ with valid check digits, separators `.`, `/` and `-` optional
pub fn cnpj() -> Matcher {
    Matcher::new(|s| {
        let candidate = trim_edges(s, is_digit);
        CNPJ_SHAPE.is_match(candidate) && cnpj_is_valid(&digits_only(candidate))
    })
}

/// Email address with a single `@` and a top-level domain
pub fn email() -> Matcher {
    Matcher::new(|s| EMAIL.is_match(trim_edges(s, is_alnum)))
}

/// Dotted-quad IPv4 address, each octet 0-255
pub fn ipv4() -> Matcher {
    Matcher::new(|s| trim_edges(s, is_digit).parse::<Ipv4Addr>().is_ok())
}

/// Colon-hex IPv6 address, `::` compression allowed
///
/// Runs of three or more colons (`2001:::::0370:7334`) are not valid IPv6 and
/// never match.
pub fn ipv6() -> Matcher {
    Matcher::new(|s| {
        let candidate = trim_edges(s, is_ipv6_edge);
        let groups = candidate.split(':').filter(|g| !g.is_empty()).count();
        groups >= 2 && candidate.parse::<Ipv6Addr>().is_ok()
    })
}

fn card_candidate(s: &str) -> &str {
    trim_edges(s, is_digit)
}

/// 16-digit Visa number
pub fn visa_credit_card() -> Matcher {
    Matcher::new(|s| VISA.is_match(card_candidate(s)))
}

/// 16-digit Mastercard number (51-55 range)
pub fn mastercard_credit_card() -> Matcher {
    Matcher::new(|s| MASTERCARD.is_match(card_candidate(s)))
}

/// Passes the Luhn check
pub fn luhn() -> Matcher {
    Matcher::new(|s| luhn_is_valid(&digits_only(card_candidate(s))))
}

/// Publicly documented test card numbers
pub fn test_credit_card() -> Matcher {
    Matcher::new(|s| {
        let digits = digits_only(card_candidate(s));
        TEST_CARD_NUMBERS.contains(&digits.as_str())
    })
}

/// Phone number, optionally with country and area codes
pub fn phone() -> Matcher {
    Matcher::new(|s| PHONE.is_match(s))
}

/// Phone number followed by an extension (`x123`, `ext. 12`, `#4`)
pub fn phone_with_extension() -> Matcher {
    Matcher::new(|s| PHONE_WITH_EXT.is_match(s))
}

/// Token naming a file with a common extension
pub fn filename() -> Matcher {
    Matcher::new(|s| FILENAME.is_match(trim_edges(s, is_alnum)))
}

/// Contains a run of seven or more copies of the same digit
pub fn repeating_number() -> Matcher {
    Matcher::new(|s| REPEATING_NUMBER.is_match(s).unwrap_or(false))
}

/// US social security number in `AAA-GG-SSSS` form
pub fn ssn() -> Matcher {
    Matcher::new(|s| SSN.is_match(trim_edges(s, is_digit)).unwrap_or(false))
}

/// URL with a scheme or a `www.` prefix
pub fn url() -> Matcher {
    Matcher::new(|s| URL.is_match(s.trim_matches(|c: char| "\"'()[]{}<>,;".contains(c))))
}

/// Contains a street address
pub fn street_address() -> Matcher {
    Matcher::new(|s| STREET_ADDRESS.is_match(s))
}

/// Contains a PO box
pub fn po_box() -> Matcher {
    Matcher::new(|s| PO_BOX.is_match(s))
}

/// Contains a US ZIP or ZIP+4 code
pub fn zip_code() -> Matcher {
    Matcher::new(|s| ZIP_CODE.is_match(s))
}

/// IBAN with a valid mod-97 checksum
pub fn iban() -> Matcher {
    Matcher::new(|s| {
        let candidate = trim_edges(s, is_alnum);
        IBAN_SHAPE.is_match(candidate) && iban_is_valid(candidate)
    })
}

/// ABA routing transit number with a valid checksum
pub fn routing_number() -> Matcher {
    Matcher::new(|s| {
        let candidate = trim_edges(s, is_digit);
        ROUTING_NUMBER.is_match(candidate) && aba_routing_is_valid(candidate)
    })
}

/// Any 8-4-4-4-12 hex identifier
pub fn uuid_shape() -> Matcher {
    Matcher::new(|s| UUID_SHAPE.is_match(trim_edges(s, is_uuid_edge)))
}

/// Brace-wrapped GUID
pub fn guid() -> Matcher {
    Matcher::new(|s| GUID.is_match(trim_edges(s, is_uuid_edge)))
}

/// Version 3 (MD5 name-based) UUID
pub fn uuid3() -> Matcher {
    Matcher::new(|s| UUID3.is_match(trim_edges(s, is_uuid_edge)))
}

/// Version 4 (random) UUID
pub fn uuid4() -> Matcher {
    Matcher::new(|s| UUID4.is_match(trim_edges(s, is_uuid_edge)))
}

/// Version 5 (SHA-1 name-based) UUID
pub fn uuid5() -> Matcher {
    Matcher::new(|s| UUID5.is_match(trim_edges(s, is_uuid_edge)))
}

/// 17-character vehicle identification number mixing letters and digits
pub fn vin() -> Matcher {
    Matcher::new(|s| {
        let candidate = trim_edges(s, is_alnum);
        VIN.is_match(candidate)
            && candidate.chars().any(|c| c.is_ascii_digit())
            && candidate.chars().any(|c| c.is_ascii_uppercase())
    })
}
