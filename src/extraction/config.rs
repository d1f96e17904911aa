//! Scan configuration.

use crate::domain::Category;
use std::collections::BTreeSet;

/// Which categories to scan and how much input to accept.
///
/// Disabled categories still appear in the result, empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    categories: BTreeSet<Category>,
    max_input_bytes: Option<usize>,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self {
            categories: Category::ALL.into_iter().collect(),
            max_input_bytes: None,
        }
    }

    /// Restricts the scan to the given categories. An empty selection keeps
    /// every category enabled.
    pub fn only<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        let selected: BTreeSet<Category> = categories.into_iter().collect();
        if !selected.is_empty() {
            self.categories = selected;
        }
        self
    }

    pub fn with_max_input_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_input_bytes = limit;
        self
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    pub fn max_input_bytes(&self) -> Option<usize> {
        self.max_input_bytes
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
