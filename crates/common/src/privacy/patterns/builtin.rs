//! Built-in PII categories.
//!
//! The patterns keep byte-oriented ASCII semantics under the Unicode-aware
//! `regex` engine: digits are `[0-9]`, word boundaries are `(?-u:\b)` and
//! separators only accept ASCII whitespace. A non-ASCII letter is therefore
//! never a word character, so `電話555-123-4567` still yields a phone number.

use once_cell::sync::Lazy;
use regex::Regex;

/// `NNN-NN-NNNN` social security numbers.
pub const SSN: &str = "SSN";
/// `local@domain.tld` addresses.
pub const EMAIL: &str = "EMAIL";
/// North-American phone numbers with optional `+1`, parens and separators.
pub const PHONE: &str = "PHONE";
/// Four groups of four digits, optionally separated by space or hyphen.
pub const CREDIT_CARD: &str = "CREDIT_CARD";
/// Dotted-quad IPv4 shapes (no range validation).
pub const IP_ADDRESS: &str = "IP_ADDRESS";

const SSN_PATTERN: &str = r"(?-u:\b)[0-9]{3}-[0-9]{2}-[0-9]{4}(?-u:\b)";
const EMAIL_PATTERN: &str =
    r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}(?-u:\b)";
const PHONE_PATTERN: &str = r"(?-u:\b)(?:\+1[-.\t\n\x0B\x0C\r ]?)?\(?[0-9]{3}\)?[-.\t\n\x0B\x0C\r ]?[0-9]{3}[-.\t\n\x0B\x0C\r ]?[0-9]{4}(?-u:\b)";
const CREDIT_CARD_PATTERN: &str =
    r"(?-u:\b)(?:[0-9]{4}[-\t\n\x0B\x0C\r ]?){3}[0-9]{4}(?-u:\b)";
const IP_ADDRESS_PATTERN: &str = r"(?-u:\b)(?:[0-9]{1,3}\.){3}[0-9]{1,3}(?-u:\b)";

/// Built-in `(category, pattern source)` pairs in registry order.
pub const BUILTIN_PATTERNS: [(&str, &str); 5] = [
    (SSN, SSN_PATTERN),
    (EMAIL, EMAIL_PATTERN),
    (PHONE, PHONE_PATTERN),
    (CREDIT_CARD, CREDIT_CARD_PATTERN),
    (IP_ADDRESS, IP_ADDRESS_PATTERN),
];

/// Compiled once per process; registries clone the (reference-counted)
/// `Regex` handles instead of recompiling.
pub(crate) static BUILTIN_REGEXES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    BUILTIN_PATTERNS
        .iter()
        .map(|(name, source)| {
            let regex = Regex::new(source)
                .unwrap_or_else(|e| panic!("built-in pattern {name} should compile: {e}"));
            (*name, regex)
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(name: &str, text: &str) -> Vec<String> {
        let (_, regex) = BUILTIN_REGEXES
            .iter()
            .find(|(n, _)| *n == name)
            .expect("built-in should exist");
        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    #[test]
    fn all_builtins_compile_in_order() {
        let names: Vec<&str> = BUILTIN_REGEXES.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![SSN, EMAIL, PHONE, CREDIT_CARD, IP_ADDRESS]);
    }

    #[test]
    fn ssn_requires_dashed_grouping() {
        assert_eq!(matches(SSN, "My SSN is 123-45-6789."), vec!["123-45-6789"]);
        assert!(matches(SSN, "123456789").is_empty());
    }

    #[test]
    fn email_matches_standard_shape() {
        assert_eq!(matches(EMAIL, "Contact john.doe+x@mail.example.com now"), vec![
            "john.doe+x@mail.example.com"
        ]);
    }

    #[test]
    fn phone_accepts_common_layouts() {
        assert_eq!(matches(PHONE, "Call 555-123-4567"), vec!["555-123-4567"]);
        assert_eq!(matches(PHONE, "Call 555.123.4567"), vec!["555.123.4567"]);
        assert_eq!(matches(PHONE, "id:x+1-555-123-4567"), vec!["+1-555-123-4567"]);
        assert_eq!(matches(PHONE, "Call (555) 123-4567"), vec!["555) 123-4567"]);
    }

    #[test]
    fn credit_card_accepts_separators() {
        assert_eq!(matches(CREDIT_CARD, "Card: 4111-1111-1111-1111"), vec!["4111-1111-1111-1111"]);
        assert_eq!(matches(CREDIT_CARD, "Card: 4111 1111 1111 1111"), vec!["4111 1111 1111 1111"]);
        assert_eq!(matches(CREDIT_CARD, "Card: 4111111111111111"), vec!["4111111111111111"]);
        assert_eq!(matches(CREDIT_CARD, "Card:\t4111\t1111\t1111\t1111"), vec![
            "4111\t1111\t1111\t1111"
        ]);
    }

    #[test]
    fn separators_are_ascii_whitespace_only() {
        // No-break space and ideographic space are not separators.
        assert!(matches(CREDIT_CARD, "4111\u{a0}1111\u{a0}1111\u{a0}1111").is_empty());
        assert!(matches(CREDIT_CARD, "4111\u{3000}1111\u{3000}1111\u{3000}1111").is_empty());
        assert!(matches(PHONE, "555\u{a0}123\u{a0}4567").is_empty());
        assert_eq!(matches(PHONE, "555\x0B123\x0C4567"), vec!["555\x0B123\x0C4567"]);
    }

    #[test]
    fn non_ascii_letters_are_word_boundaries() {
        assert_eq!(matches(PHONE, "電話555-123-4567"), vec!["555-123-4567"]);
        assert_eq!(matches(SSN, "社保号123-45-6789"), vec!["123-45-6789"]);
        assert_eq!(matches(EMAIL, "naïvejane@example.com"), vec!["vejane@example.com"]);
        assert_eq!(matches(IP_ADDRESS, "地址10.0.0.1です"), vec!["10.0.0.1"]);
        assert_eq!(matches(CREDIT_CARD, "カード4111-1111-1111-1111"), vec![
            "4111-1111-1111-1111"
        ]);
    }

    #[test]
    fn ascii_letters_still_block_a_match() {
        assert!(matches(SSN, "x123-45-6789").is_empty());
        assert!(matches(PHONE, "555-123-4567z").is_empty());
    }

    #[test]
    fn ip_address_has_no_range_validation() {
        assert_eq!(matches(IP_ADDRESS, "Server 999.999.999.999"), vec!["999.999.999.999"]);
        assert_eq!(matches(IP_ADDRESS, "Server IP: 192.168.1.1"), vec!["192.168.1.1"]);
    }

    #[test]
    fn redaction_tokens_are_not_pii() {
        let tokens = "[SSN_REDACTED] [EMAIL_REDACTED] [PHONE_REDACTED] \
                      [CREDIT_CARD_REDACTED] [IP_ADDRESS_REDACTED]";
        for (name, regex) in BUILTIN_REGEXES.iter() {
            assert!(!regex.is_match(tokens), "{name} matched a redaction token");
        }
    }
}
