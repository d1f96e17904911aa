//! Email address detection and masking.

use super::masking::mask_email;
use super::{Category, EmailFinding, MatchSpan, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Email address matcher.
///
/// Local part of 1-64 characters from `[A-Za-z0-9._%+-]`, then one or more
/// dot-terminated domain labels (the first may not start with `-`) and a
/// final alphabetic label of 2-24 letters. Only the masked form ever leaves
/// this matcher.
#[derive(Debug, Clone, Default)]
pub struct EmailMatcher;

impl EmailMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"\b[a-zA-Z0-9._%+-]{1,64}@[a-zA-Z0-9][a-zA-Z0-9-]*\.(?:[a-zA-Z0-9-]+\.)*[a-zA-Z]{2,24}\b",
            )
            .expect("Valid email regex")
        });
        &PATTERN
    }
}

impl PatternMatcher for EmailMatcher {
    type Finding = EmailFinding;

    fn category(&self) -> Category {
        Category::Email
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<EmailFinding> {
        Some(EmailFinding {
            masked: mask_email(span.as_str()),
        })
    }
}
