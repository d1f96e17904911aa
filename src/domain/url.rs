//! URL detection restricted to web schemes.

use super::checks::is_safe_url;
use super::{Category, MatchSpan, PatternMatcher, UrlFinding};
use once_cell::sync::Lazy;
use regex::Regex;

/// `http`/`https` URL matcher.
///
/// Other schemes never match the pattern; accepted spans are checked again
/// with [`is_safe_url`] before they become findings.
#[derive(Debug, Clone, Default)]
pub struct UrlMatcher;

impl UrlMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r#"(?i)\bhttps?://[^\s<>"]+\b"#).expect("Valid URL regex")
        });
        &PATTERN
    }
}

impl PatternMatcher for UrlMatcher {
    type Finding = UrlFinding;

    fn category(&self) -> Category {
        Category::Url
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<UrlFinding> {
        let url = span.as_str();
        is_safe_url(url).then(|| UrlFinding {
            value: url.to_string(),
        })
    }
}
