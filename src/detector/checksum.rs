//! Check-digit validators for structured identifiers
//!
//! Every validator returns `false` for anything it can't validate, including
//! input of the wrong length. There is no diagnostic output: an invalid check
//! digit is indistinguishable from "not this kind of identifier".

/// CPF first check digit weights (10 down to 2)
const CPF_WEIGHTS_FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
/// CPF second check digit weights (11 down to 2)
const CPF_WEIGHTS_SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
/// CNPJ weights cycle 2..=9 counting from the rightmost digit
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Sum of each digit multiplied by the weight at the same position.
///
/// Returns 0 when `digits` and `weights` differ in length. Characters that
/// are not ASCII digits contribute nothing.
pub fn weighted_sum(digits: &str, weights: &[u32]) -> u32 {
    if digits.chars().count() != weights.len() {
        return 0;
    }

    digits
        .chars()
        .zip(weights)
        .filter_map(|(c, w)| c.to_digit(10).map(|d| d * w))
        .sum()
}

/// Modulo-11 check digit: remainder 0 or 1 gives 0, otherwise `11 - remainder`
pub fn mod11_check_digit(sum: u32) -> u32 {
    match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    }
}

/// Keep only ASCII digits
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

fn digit_at(digits: &str, index: usize) -> Option<u32> {
    digits.as_bytes().get(index).map(|b| u32::from(b - b'0'))
}

fn two_check_digits(digits: &str, first: &[u32], second: &[u32]) -> bool {
    let len = second.len() + 1;
    if digits.len() != len || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let d1 = mod11_check_digit(weighted_sum(&digits[..first.len()], first));
    if digit_at(digits, first.len()) != Some(d1) {
        return false;
    }

    let d2 = mod11_check_digit(weighted_sum(&digits[..second.len()], second));
    digit_at(digits, second.len()) == Some(d2)
}

/// Validate the two check digits of an 11-digit Brazilian CPF
pub fn cpf_is_valid(digits: &str) -> bool {
    two_check_digits(digits, &CPF_WEIGHTS_FIRST, &CPF_WEIGHTS_SECOND)
}

/// Validate the two check digits of a 14-digit Brazilian CNPJ
pub fn cnpj_is_valid(digits: &str) -> bool {
    two_check_digits(digits, &CNPJ_WEIGHTS_FIRST, &CNPJ_WEIGHTS_SECOND)
}

/// Luhn (mod 10) check used by payment card numbers
pub fn luhn_is_valid(digits: &str) -> bool {
    if digits.len() < 12 || digits.len() > 19 {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;
    for c in digits.chars().rev() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        let value = if double {
            let d = digit * 2;
            if d > 9 {
                d - 9
            } else {
                d
            }
        } else {
            digit
        };
        sum += value;
        double = !double;
    }

    sum % 10 == 0
}

/// ISO 13616 IBAN check: rearranged number modulo 97 must equal 1
pub fn iban_is_valid(iban: &str) -> bool {
    let compact: String = iban.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() < 15 || compact.len() > 34 || !compact.is_ascii() {
        return false;
    }

    let (head, tail) = compact.split_at(4);
    let mut remainder = 0u32;
    for c in tail.chars().chain(head.chars()) {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'A'..='Z' => c as u32 - 'A' as u32 + 10,
            'a'..='z' => c as u32 - 'a' as u32 + 10,
            _ => return false,
        };
        // Letters expand to two decimal digits
        remainder = if value >= 10 {
            (remainder * 100 + value) % 97
        } else {
            (remainder * 10 + value) % 97
        };
    }

    remainder == 1
}

/// ABA routing transit number check (weights 3, 7, 1 modulo 10)
pub fn aba_routing_is_valid(digits: &str) -> bool {
    if digits.len() != 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum = weighted_sum(digits, &[3, 7, 1, 3, 7, 1, 3, 7, 1]);
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("123", &[1, 2, 3], 14 ; "all digits")]
    #[test_case("12a", &[1, 2, 3], 5 ; "non digit ignored")]
    #[test_case("123", &[1, 2], 0 ; "length mismatch")]
    fn test_weighted_sum(digits: &str, weights: &[u32], expected: u32) {
        assert_eq!(weighted_sum(digits, weights), expected);
    }

    #[test_case(0, 0)]
    #[test_case(11, 0)]
    #[test_case(12, 0 ; "remainder one")]
    #[test_case(178, 9)]
    #[test_case(214, 6)]
    fn test_mod11_check_digit(sum: u32, expected: u32) {
        assert_eq!(mod11_check_digit(sum), expected);
    }

    #[test_case("11144477735", true)]
    #[test_case("21618721097", true)]
    #[test_case("38341371030", true)]
    #[test_case("11144477734", false ; "bad second digit")]
    #[test_case("11144477725", false ; "bad first digit")]
    #[test_case("1114447773", false ; "too short")]
    #[test_case("111444777351", false ; "too long")]
    #[test_case("1114447773a", false ; "non digit")]
    fn test_cpf(digits: &str, expected: bool) {
        assert_eq!(cpf_is_valid(digits), expected);
    }

    #[test]
    fn test_cpf_single_check_digit_corruption() {
        let valid = "11144477735";
        for pos in [9usize, 10] {
            for replacement in b'0'..=b'9' {
                let mut bytes = valid.as_bytes().to_vec();
                if bytes[pos] == replacement {
                    continue;
                }
                bytes[pos] = replacement;
                let corrupted = String::from_utf8(bytes).unwrap();
                assert!(!cpf_is_valid(&corrupted), "{corrupted} should be rejected");
            }
        }
    }

    #[test_case("11444777000161", true)]
    #[test_case("14380200000121", true)]
    #[test_case("11444777000160", false)]
    #[test_case("14380200000122", false)]
    #[test_case("1438020000012", false ; "too short")]
    fn test_cnpj(digits: &str, expected: bool) {
        assert_eq!(cnpj_is_valid(digits), expected);
    }

    #[test_case("4111111111111111", true)]
    #[test_case("5500000000000004", true)]
    #[test_case("4532015112830366", true)]
    #[test_case("1234567890123456", false)]
    #[test_case("4111111111111112", false)]
    #[test_case("123", false ; "too short")]
    fn test_luhn(digits: &str, expected: bool) {
        assert_eq!(luhn_is_valid(digits), expected);
    }

    #[test_case("GB82WEST12345698765432", true)]
    #[test_case("DE89370400440532013000", true)]
    #[test_case("GB82 WEST 1234 5698 7654 32", true ; "grouped")]
    #[test_case("GB82WEST12345698765433", false)]
    #[test_case("GB82", false ; "too short")]
    fn test_iban(iban: &str, expected: bool) {
        assert_eq!(iban_is_valid(iban), expected);
    }

    #[test_case("011000015", true)]
    #[test_case("021000021", true)]
    #[test_case("021000022", false)]
    #[test_case("02100002", false ; "too short")]
    fn test_aba_routing(digits: &str, expected: bool) {
        assert_eq!(aba_routing_is_valid(digits), expected);
    }
}
