//! Clock time detection (24-hour and 12-hour forms).

use super::{Category, MatchSpan, PatternMatcher, TimeFinding};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matcher for times like "23:59", "09:05" or "3:45 PM".
///
/// The 24-hour form is tried first, so "10:30 PM" is reported as "10:30".
/// The AM/PM marker is matched in any case.
#[derive(Debug, Clone, Default)]
pub struct TimeMatcher;

impl TimeMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"(?x)
                \b(?:
                    (?:[01][0-9]|2[0-3]):[0-5][0-9]              # 24-hour
                    |
                    (?:1[0-2]|0?[1-9]):[0-5][0-9]\s?(?i:AM|PM)   # 12-hour
                )\b
            ",
            )
            .expect("Valid time regex pattern")
        });
        &PATTERN
    }
}

impl PatternMatcher for TimeMatcher {
    type Finding = TimeFinding;

    fn category(&self) -> Category {
        Category::Time
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<TimeFinding> {
        Some(TimeFinding {
            value: span.as_str().to_string(),
        })
    }
}
