//! Pattern-based extraction of sensitive and structured data from text.
//!
//! This library scans unstructured text for eight categories of data:
//! email addresses, URLs, phone numbers, credit card numbers, times, currency
//! amounts, hashtags and HTML tags. Each category applies a pattern match, a
//! validation/normalization step and, for sensitive data, a mask so raw
//! values never appear in the output.
//!
//! # Features
//!
//! - **Linear-time matching**: all patterns run on the `regex` crate
//! - **Masking**: emails keep their domain and edge characters, cards keep
//!   their last four digits
//! - **Validation**: Luhn checksum, digit-count gates, URL scheme allow-list
//! - **HTML safety**: tags flagged when they carry scripts, event handlers or
//!   `javascript:` references
//!
//! # Architecture
//!
//! - [`domain`]: Matchers, validators and maskers per category
//! - [`extraction`]: Scan orchestration, configuration and the result record
//! - [`error`]: Boundary error handling
//!
//! # Quick Start
//!
//! ```
//! use extractor::ExtractionService;
//!
//! let service = ExtractionService::with_defaults();
//! let result = service.scan_unbounded("Mail jane@example.com, call 415-555-0199");
//!
//! assert_eq!(result.emails[0].masked, "j**e@example.com");
//! assert_eq!(result.phones[0].digits, "4155550199");
//! ```
//!
//! # Pattern Matching
//!
//! ```
//! use extractor::domain::{PatternMatcher, PhoneNumberMatcher};
//!
//! let matcher = PhoneNumberMatcher::new();
//! let text = "Call (415) 555-0199 or 415.555.0199";
//! let phones = matcher.extract_all(text);
//! assert_eq!(phones.len(), 2);
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod extraction;

// Re-exports for convenient access
pub use domain::{
    Category, CreditCardMatcher, CurrencyMatcher, EmailMatcher, HashtagMatcher, HtmlTagMatcher,
    MatchSpan, PatternMatcher, PhoneNumberMatcher, TimeMatcher, UrlMatcher,
};
pub use error::{ExtractorError, ExtractorResult};
pub use extraction::{read_text, to_json, ExtractionService, Matchers, ScanConfig, ScanResult};

/// Scans `text` with every category enabled.
pub fn extract_all(text: &str) -> ScanResult {
    ExtractionService::with_defaults().scan_unbounded(text)
}
