//! Domain models and business logic for pattern extraction.
//!
//! Each category has a matcher that owns its compiled pattern, finds raw
//! candidate spans, and turns accepted candidates into findings. Validation
//! and masking rules live in [`checks`] and [`masking`].

pub mod card;
pub mod checks;
pub mod currency;
pub mod email;
pub mod findings;
pub mod hashtag;
pub mod html;
pub mod masking;
pub mod phone;
pub mod span;
pub mod time;
pub mod url;

pub use card::CreditCardMatcher;
pub use currency::CurrencyMatcher;
pub use email::EmailMatcher;
pub use findings::{
    Category, CreditCardFinding, CurrencyFinding, EmailFinding, HashtagFinding, HtmlTagFinding,
    PhoneFinding, TimeFinding, UrlFinding,
};
pub use hashtag::HashtagMatcher;
pub use html::HtmlTagMatcher;
pub use phone::PhoneNumberMatcher;
pub use span::{Boundary, MatchSpan, Spans};
pub use time::TimeMatcher;
pub use url::UrlMatcher;

use regex::Regex;

/// Trait for per-category extraction strategies.
pub trait PatternMatcher: Send + Sync {
    /// Record produced for an accepted candidate.
    type Finding;

    fn category(&self) -> Category;

    fn pattern(&self) -> &Regex;

    /// Context rule applied around raw pattern matches.
    fn boundary(&self) -> Boundary<'_> {
        Boundary::None
    }

    /// Lazily yields candidate spans, left to right, without overlap.
    fn find_spans<'t>(&self, text: &'t str) -> Spans<'_, 't> {
        Spans::new(self.pattern(), self.boundary(), text)
    }

    fn extract_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.find_spans(text).map(|span| span.as_str()).collect()
    }

    /// Validates, normalizes and masks a candidate.
    ///
    /// `None` means the candidate was rejected.
    fn evaluate(&self, span: &MatchSpan<'_>) -> Option<Self::Finding>;

    /// Runs the matcher over `text` and keeps every accepted candidate.
    fn findings(&self, text: &str) -> Vec<Self::Finding> {
        self.find_spans(text)
            .filter_map(|span| {
                let finding = self.evaluate(&span);
                if finding.is_none() {
                    log::debug!(
                        "rejected {} candidate at bytes {}..{}",
                        self.category(),
                        span.start,
                        span.end
                    );
                }
                finding
            })
            .collect()
    }
}

/// Compiles the anchored whole-candidate form of a pattern.
pub(crate) fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("Valid anchored regex pattern")
}
