//! The fixed-shape aggregate produced by one scan.

use crate::domain::{
    Category, CreditCardFinding, CurrencyFinding, EmailFinding, HashtagFinding, HtmlTagFinding,
    PhoneFinding, TimeFinding, UrlFinding,
};
use serde::{Deserialize, Serialize};

/// Findings of one scan, one sequence per category.
///
/// Each sequence is in left-to-right order of appearance in the input.
/// Serializes to an object with exactly the keys `emails`, `urls`, `phones`,
/// `credit_cards`, `times`, `currency`, `hashtags` and `html_tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanResult {
    pub emails: Vec<EmailFinding>,
    pub urls: Vec<UrlFinding>,
    pub phones: Vec<PhoneFinding>,
    pub credit_cards: Vec<CreditCardFinding>,
    pub times: Vec<TimeFinding>,
    pub currency: Vec<CurrencyFinding>,
    pub hashtags: Vec<HashtagFinding>,
    pub html_tags: Vec<HtmlTagFinding>,
}

impl ScanResult {
    /// Number of findings in one category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Email => self.emails.len(),
            Category::Url => self.urls.len(),
            Category::Phone => self.phones.len(),
            Category::CreditCard => self.credit_cards.len(),
            Category::Time => self.times.len(),
            Category::Currency => self.currency.len(),
            Category::Hashtag => self.hashtags.len(),
            Category::HtmlTag => self.html_tags.len(),
        }
    }

    /// Per-category counts in scan order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.count(category)))
            .collect()
    }

    pub fn total(&self) -> usize {
        Category::ALL.into_iter().map(|c| self.count(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Tags flagged as unsafe.
    pub fn unsafe_tags(&self) -> impl Iterator<Item = &HtmlTagFinding> {
        self.html_tags.iter().filter(|tag| !tag.safe)
    }
}
