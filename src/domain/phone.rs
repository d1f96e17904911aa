//! Phone number domain logic.
//!
//! This module encapsulates the rules for phone number detection and the
//! digit-count gate applied after normalization.

use super::checks::{is_phone_length, normalize_digits};
use super::{anchored, Boundary, Category, MatchSpan, PatternMatcher, PhoneFinding};
use once_cell::sync::Lazy;
use regex::Regex;

const PHONE_PATTERN: &str =
    r"(?:\+?[0-9]{1,3}[\s.-]?)?(?:\([0-9]{3}\)|[0-9]{3})[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}";

/// Phone number pattern matcher.
///
/// Supports national and international formats:
/// - (415) 555-0199
/// - 415-555-0199
/// - 415.555.0199
/// - +1 415 555 0199
///
/// A candidate touching another digit on either side is not a phone number.
#[derive(Debug, Clone)]
pub struct PhoneNumberMatcher;

impl PhoneNumberMatcher {
    /// Creates a new phone number matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(PHONE_PATTERN).expect("Valid phone number regex"));
        &PATTERN
    }

    fn whole() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(PHONE_PATTERN));
        &PATTERN
    }

    /// Normalizes a candidate to its digits, or `None` if the count is not
    /// 10, 11, 12 or 13.
    pub fn normalize(&self, text: &str) -> Option<String> {
        let digits = normalize_digits(text);
        is_phone_length(&digits).then_some(digits)
    }
}

impl Default for PhoneNumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for PhoneNumberMatcher {
    type Finding = PhoneFinding;

    fn category(&self) -> Category {
        Category::Phone
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn boundary(&self) -> Boundary<'_> {
        Boundary::Digits(Self::whole())
    }

    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<PhoneFinding> {
        let raw = span.as_str();
        self.normalize(raw).map(|digits| PhoneFinding {
            raw: raw.to_string(),
            digits,
        })
    }
}
