//! Dollar amount detection.

use super::checks::strip_whitespace;
use super::{Category, CurrencyFinding, MatchSpan, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matcher for dollar amounts: "$19.99", "$1,234.56", "$ 12", "$0.99".
///
/// The grouped form (`d{1,3}` then any number of `,ddd`) is tried first, so
/// an ungrouped "$1234.56" is read as "$123". Findings have their whitespace
/// removed.
#[derive(Debug, Clone, Default)]
pub struct CurrencyMatcher;

impl CurrencyMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\$\s?[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})?|\$\s?[0-9]+(?:\.[0-9]{2})?")
                .expect("Valid currency regex pattern")
        });
        &PATTERN
    }
}

impl PatternMatcher for CurrencyMatcher {
    type Finding = CurrencyFinding;

    fn category(&self) -> Category {
        Category::Currency
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<CurrencyFinding> {
        Some(CurrencyFinding {
            value: strip_whitespace(span.as_str()),
        })
    }
}
