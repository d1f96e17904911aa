//! Extraction service and its result types.
//!
//! The service runs every enabled matcher once over the same immutable text,
//! in fixed category order, and collects the accepted findings into a
//! [`ScanResult`]. Categories are independent: overlapping spans across
//! categories are all reported.

pub mod config;
pub mod result;

pub use config::ScanConfig;
pub use result::ScanResult;

use crate::domain::{
    Category, CreditCardMatcher, CurrencyMatcher, EmailMatcher, HashtagMatcher, HtmlTagMatcher,
    PatternMatcher, PhoneNumberMatcher, TimeMatcher, UrlMatcher,
};
use crate::error::{ExtractorError, ExtractorResult};
use std::path::Path;

/// The full set of category matchers, built once and shared by every scan.
#[derive(Debug, Clone, Default)]
pub struct Matchers {
    pub email: EmailMatcher,
    pub url: UrlMatcher,
    pub phone: PhoneNumberMatcher,
    pub credit_card: CreditCardMatcher,
    pub time: TimeMatcher,
    pub currency: CurrencyMatcher,
    pub hashtag: HashtagMatcher,
    pub html_tag: HtmlTagMatcher,
}

impl Matchers {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Extraction service coordinating the matchers.
#[derive(Debug, Clone, Default)]
pub struct ExtractionService {
    matchers: Matchers,
    config: ScanConfig,
}

impl ExtractionService {
    /// Creates a service from prepared matchers and a configuration.
    pub fn new(matchers: Matchers, config: ScanConfig) -> Self {
        Self { matchers, config }
    }

    /// Creates a service scanning every category with no input limit.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans `text`, enforcing the configured input size limit.
    ///
    /// # Errors
    /// [`ExtractorError::InputTooLarge`] when the text exceeds the limit.
    /// Candidates that fail validation are never errors.
    pub fn scan(&self, text: &str) -> ExtractorResult<ScanResult> {
        if let Some(limit) = self.config.max_input_bytes() {
            if text.len() > limit {
                return Err(ExtractorError::InputTooLarge {
                    size: text.len(),
                    limit,
                });
            }
        }
        Ok(self.scan_unbounded(text))
    }

    /// Scans `text` regardless of its size.
    pub fn scan_unbounded(&self, text: &str) -> ScanResult {
        let m = &self.matchers;
        let mut result = ScanResult::default();

        for category in self.config.enabled() {
            match category {
                Category::Email => result.emails = m.email.findings(text),
                Category::Url => result.urls = m.url.findings(text),
                Category::Phone => result.phones = m.phone.findings(text),
                Category::CreditCard => result.credit_cards = m.credit_card.findings(text),
                Category::Time => result.times = m.time.findings(text),
                Category::Currency => result.currency = m.currency.findings(text),
                Category::Hashtag => result.hashtags = m.hashtag.findings(text),
                Category::HtmlTag => result.html_tags = m.html_tag.findings(text),
            }
        }

        log::info!(
            "scanned {} bytes, {} finding(s)",
            text.len(),
            result.total()
        );
        result
    }

    /// Reads a UTF-8 text file and scans it.
    pub fn scan_file(&self, path: &Path) -> ExtractorResult<ScanResult> {
        let text = read_text(path)?;
        self.scan(&text)
    }
}

/// Reads a file that must contain UTF-8 text.
pub fn read_text(path: &Path) -> ExtractorResult<String> {
    let bytes = std::fs::read(path).map_err(|source| ExtractorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| ExtractorError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes a scan result as JSON, indented by two spaces when `pretty`.
pub fn to_json(result: &ScanResult, pretty: bool) -> ExtractorResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = ExtractionService::with_defaults();
        assert!(service.scan("").unwrap().is_empty());
    }

    #[test]
    fn test_input_limit() {
        let service =
            ExtractionService::new(Matchers::new(), ScanConfig::new().with_max_input_bytes(Some(4)));
        assert!(service.scan("1234").is_ok());
        assert!(matches!(
            service.scan("12345"),
            Err(ExtractorError::InputTooLarge { size: 5, limit: 4 })
        ));
    }

    #[test]
    fn test_disabled_categories_stay_empty() {
        let service = ExtractionService::new(
            Matchers::new(),
            ScanConfig::new().only([Category::Hashtag]),
        );
        let result = service.scan_unbounded("#tag bob@example.com");
        assert_eq!(result.hashtags.len(), 1);
        assert!(result.emails.is_empty());
    }

    #[test]
    fn test_categories_do_not_deduplicate() {
        let service = ExtractionService::with_defaults();
        let result = service.scan_unbounded("<a href=\"https://x.io/p\">");
        assert_eq!(result.urls.len(), 1);
        assert_eq!(result.html_tags.len(), 1);
    }
}
