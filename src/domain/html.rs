//! HTML tag detection and safety classification.

use super::checks::is_safe_html;
use super::{Category, HtmlTagFinding, MatchSpan, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matcher for opening, closing and self-closing HTML tags.
#[derive(Debug, Clone, Default)]
pub struct HtmlTagMatcher;

impl HtmlTagMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"<\s*/?\s*[a-zA-Z][a-zA-Z0-9-]*(?:\s+[^<>]*?)?\s*/?\s*>")
                .expect("Valid HTML tag regex")
        });
        &PATTERN
    }
}

impl PatternMatcher for HtmlTagMatcher {
    type Finding = HtmlTagFinding;

    fn category(&self) -> Category {
        Category::HtmlTag
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<HtmlTagFinding> {
        let tag = span.as_str();
        Some(HtmlTagFinding {
            value: tag.to_string(),
            safe: is_safe_html(tag),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_classified() {
        let matcher = HtmlTagMatcher::new();
        let findings = matcher.findings("<b>hello</b> <img src=x onerror=alert(1)> <br/>");
        let summary: Vec<_> = findings.iter().map(|f| (f.value.as_str(), f.safe)).collect();
        assert_eq!(
            summary,
            vec![
                ("<b>", true),
                ("</b>", true),
                ("<img src=x onerror=alert(1)>", false),
                ("<br/>", true),
            ]
        );
    }

    #[test]
    fn test_script_tag_unsafe() {
        let matcher = HtmlTagMatcher::new();
        let findings = matcher.findings("<script>evil()</script>");
        assert_eq!(findings.len(), 2);
        assert!(!findings[0].safe);
        assert!(findings[1].safe);
    }

    #[test]
    fn test_not_a_tag() {
        let matcher = HtmlTagMatcher::new();
        assert!(matcher.extract_all("1 < 2 and 3 > 2, <123>").is_empty());
    }
}
