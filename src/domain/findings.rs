//! Validated findings, one record type per category.
//!
//! Findings are plain values: they are produced during a scan and handed to
//! the serialization boundary. Sensitive categories only ever hold masked
//! data.

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight extraction categories, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Email,
    Url,
    Phone,
    CreditCard,
    Time,
    Currency,
    Hashtag,
    HtmlTag,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Email,
        Category::Url,
        Category::Phone,
        Category::CreditCard,
        Category::Time,
        Category::Currency,
        Category::Hashtag,
        Category::HtmlTag,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Phone => "phone",
            Self::CreditCard => "credit-card",
            Self::Time => "time",
            Self::Currency => "currency",
            Self::Hashtag => "hashtag",
            Self::HtmlTag => "html-tag",
        }
    }

    /// Key of this category in the serialized scan result.
    pub fn result_key(self) -> &'static str {
        match self {
            Self::Email => "emails",
            Self::Url => "urls",
            Self::Phone => "phones",
            Self::CreditCard => "credit_cards",
            Self::Time => "times",
            Self::Currency => "currency",
            Self::Hashtag => "hashtags",
            Self::HtmlTag => "html_tags",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted || c.result_key().replace('_', "-") == wanted)
            .ok_or_else(|| ExtractorError::InvalidInput {
                parameter: "category".to_string(),
                reason: format!("unknown category '{}'", s),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFinding {
    pub masked: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlFinding {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneFinding {
    pub raw: String,
    pub digits: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardFinding {
    pub masked: String,
    pub last4: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFinding {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFinding {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagFinding {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlTagFinding {
    pub value: String,
    pub safe: bool,
}
