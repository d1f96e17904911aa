//! Test fixtures and sample text builders.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Luhn-valid card numbers of several lengths.
pub const VALID_CARDS: &[&str] = &[
    "4539148803436467",
    "4111111111111111",
    "5555555555554444",
    "378282246310005",
    "6011111111111117",
    "4222222222222",
];

/// The sample from the project brief.
pub const BRIEF_SAMPLE: &str =
    "Contact me at jo@x.com, call 415-555-0199, pay $12.50 at 3:45 PM #deal <script>x</script>";

/// Builder for sample documents mixing prose with extractable values.
///
/// # Example
///
/// ```no_run
/// let text = SampleTextBuilder::new()
///     .with_email("jane@example.com")
///     .with_phone("(415) 555-0199")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleTextBuilder {
    lines: Vec<String>,
}

impl SampleTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.lines.push(format!("Reach me at {} any time.", email));
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.lines.push(format!("Phone: {} (evenings)", phone));
        self
    }

    pub fn with_card(mut self, card: &str) -> Self {
        self.lines.push(format!("Card on file: {} exp soon", card));
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.lines.push(format!("Docs live at {} for now", url));
        self
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.lines.push(content.to_string());
        self
    }

    pub fn build(&self) -> String {
        self.lines.join("\n")
    }

    /// Writes the sample to `path` and returns the path.
    pub fn write(&self, path: &Path) -> Result<PathBuf> {
        fs::write(path, self.build())?;
        Ok(path.to_path_buf())
    }
}

/// Appends the Luhn check digit to a digit string.
pub fn with_check_digit(payload: &str) -> String {
    let sum: u32 = payload
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            let d = c.to_digit(10).expect("payload must be digits");
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    format!("{}{}", payload, (10 - sum % 10) % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let text = SampleTextBuilder::new()
            .with_email("a@b.co")
            .with_content("plain")
            .build();
        assert_eq!(text.lines().count(), 2);
    }
}
