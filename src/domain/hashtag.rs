//! Hashtag detection.

use super::{Boundary, Category, HashtagFinding, MatchSpan, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Hashtag matcher.
///
/// `#` not preceded by a word character, a letter, then up to 49 letters,
/// digits or underscores ending at a word boundary. "#123abc" is not a tag.
#[derive(Debug, Clone, Default)]
pub struct HashtagMatcher;

impl HashtagMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"#[A-Za-z][A-Za-z0-9_]{0,49}\b").expect("Valid hashtag regex")
        });
        &PATTERN
    }
}

impl PatternMatcher for HashtagMatcher {
    type Finding = HashtagFinding;

    fn category(&self) -> Category {
        Category::Hashtag
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn boundary(&self) -> Boundary<'_> {
        Boundary::WordBefore
    }

    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<HashtagFinding> {
        Some(HashtagFinding {
            value: span.as_str().to_string(),
        })
    }
}
