//! Payment card detection: a permissive candidate pattern narrowed by
//! length and Luhn validation.

use super::checks::{is_valid_card, normalize_digits};
use super::masking::{last_four, mask_card};
use super::{anchored, Boundary, Category, CreditCardFinding, MatchSpan, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

// Separators are only allowed among the first 13 digits; past that the
// candidate ends at the first non-digit.
const CARD_PATTERN: &str = r"[0-9](?:[ -]*[0-9]){12}[0-9]{0,6}";

/// Credit card candidate matcher.
///
/// Candidates are 13-19 digits, optionally separated by spaces or dashes,
/// not adjacent to other digits. Once 13 digits are in, only directly
/// adjacent digits extend the candidate. Only Luhn-valid candidates are reported and
/// only in masked form.
#[derive(Debug, Clone, Default)]
pub struct CreditCardMatcher;

impl CreditCardMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(CARD_PATTERN).expect("Valid credit card regex"));
        &PATTERN
    }

    fn whole() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(CARD_PATTERN));
        &PATTERN
    }
}

impl PatternMatcher for CreditCardMatcher {
    type Finding = CreditCardFinding;

    fn category(&self) -> Category {
        Category::CreditCard
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn boundary(&self) -> Boundary<'_> {
        Boundary::Digits(Self::whole())
    }

    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<CreditCardFinding> {
        let digits = normalize_digits(span.as_str());
        if !is_valid_card(&digits) {
            return None;
        }
        Some(CreditCardFinding {
            masked: mask_card(&digits),
            last4: last_four(&digits),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_with_separators() {
        let matcher = CreditCardMatcher::new();
        let findings = matcher.findings("card 4539 1488 0343 6467 exp 09/29");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].masked, "************6467");
        assert_eq!(findings[0].last4, "6467");
    }

    #[test]
    fn test_luhn_failure_rejected() {
        let matcher = CreditCardMatcher::new();
        assert_eq!(matcher.extract_all("4539148803436468").len(), 1);
        assert!(matcher.findings("4539148803436468").is_empty());
    }

    #[test]
    fn test_overlong_digit_run_rejected() {
        let matcher = CreditCardMatcher::new();
        assert!(matcher.extract_all("41111111111111111111111").is_empty());
    }

    #[test]
    fn test_trailing_digit_group_not_absorbed() {
        let matcher = CreditCardMatcher::new();
        for text in ["Card 4539 1488 0343 6467 12 on file", "4539148803436467-99"] {
            let findings = matcher.findings(text);
            assert_eq!(findings.len(), 1, "text {}", text);
            assert_eq!(findings[0].last4, "6467");
        }
    }

    #[test]
    fn test_dashed_amex() {
        let matcher = CreditCardMatcher::new();
        let findings = matcher.findings("amex 3782-822463-10005.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].last4, "0005");
        assert_eq!(findings[0].masked.len(), 15);
    }
}
