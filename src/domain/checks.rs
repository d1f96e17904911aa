//! Validation and normalization rules applied to raw candidates.
//!
//! Every check here is a pure predicate or transform. A failed check is a
//! rejected hypothesis, never an error: callers simply drop the candidate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted digit counts for phone numbers (national and international).
pub const PHONE_DIGIT_COUNTS: [usize; 4] = [10, 11, 12, 13];

/// Minimum digit count of a payment card number.
pub const CARD_MIN_DIGITS: usize = 13;

/// Maximum digit count of a payment card number.
pub const CARD_MAX_DIGITS: usize = 19;

/// Strips every character that is not an ASCII digit.
pub fn normalize_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Removes all whitespace, e.g. `"$ 12.50"` becomes `"$12.50"`.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Standard Luhn (mod 10) checksum.
///
/// Starting from the rightmost digit, every second digit is doubled and
/// reduced by 9 when it exceeds 9. Returns `false` for empty input or any
/// non-digit character.
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut d) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}

pub fn is_phone_length(digits: &str) -> bool {
    PHONE_DIGIT_COUNTS.contains(&digits.len())
}

pub fn is_card_length(digits: &str) -> bool {
    (CARD_MIN_DIGITS..=CARD_MAX_DIGITS).contains(&digits.len())
}

/// Card acceptance: 13 to 19 digits and a valid Luhn checksum.
pub fn is_valid_card(digits: &str) -> bool {
    is_card_length(digits) && luhn_check(digits)
}

/// Only `http://` and `https://` are accepted, in any case.
pub fn is_safe_url(url: &str) -> bool {
    let head: String = url.chars().take(8).collect::<String>().to_ascii_lowercase();
    head.starts_with("http://") || head.starts_with("https://")
}

fn event_handler_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\son\w+\s*=").expect("Valid event handler regex"));
    &PATTERN
}

/// Heuristic classification of an HTML tag.
///
/// A tag is unsafe when it opens a script element, carries an `on*=` event
/// handler attribute, or references the `javascript:` scheme. Obfuscated
/// payloads can slip through; this is not a sanitizer.
pub fn is_safe_html(tag: &str) -> bool {
    let lowered = tag.to_lowercase();
    if lowered.contains("<script") {
        return false;
    }
    if event_handler_pattern().is_match(&lowered) {
        return false;
    }
    !lowered.contains("javascript:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_digits() {
        assert_eq!(normalize_digits("(415) 555-0199"), "4155550199");
        assert_eq!(normalize_digits("no digits"), "");
    }

    #[test]
    fn test_luhn_known_vectors() {
        assert!(luhn_check("4539148803436467"));
        assert!(!luhn_check("4539148803436468"));
        assert!(luhn_check("4111111111111111"));
        assert!(luhn_check("378282246310005"));
    }

    #[test]
    fn test_luhn_rejects_garbage() {
        assert!(!luhn_check(""));
        assert!(!luhn_check("4539-1488"));
    }

    #[test]
    fn test_card_gate() {
        assert!(is_valid_card("4111111111111111"));
        // Luhn-valid but too short
        assert!(!is_valid_card("0000000000"));
        assert!(!is_valid_card("41111111111111111111"));
    }

    #[test]
    fn test_phone_lengths() {
        assert!(is_phone_length("4155550199"));
        assert!(is_phone_length("14155550199"));
        assert!(!is_phone_length("555019"));
        assert!(!is_phone_length("12345678901234"));
    }

    #[test]
    fn test_url_schemes() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("HTTP://EXAMPLE.COM"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("ftp://example.com"));
    }

    #[test]
    fn test_html_safety() {
        assert!(is_safe_html("<b>"));
        assert!(is_safe_html("<a href=\"https://x.io\">"));
        assert!(!is_safe_html("<SCRIPT src=x>"));
        assert!(!is_safe_html("<img src=x onerror=alert(1)>"));
        assert!(!is_safe_html("<a href=\"JavaScript:void(0)\">"));
    }
}
