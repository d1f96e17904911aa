//! Match spans and the lazy span iterator shared by every matcher.
//!
//! The `regex` crate guarantees linear-time matching but has no look-around.
//! Patterns that need "not preceded/followed by a digit" or "not preceded by
//! a word character" express those rules as a [`Boundary`] guard that the
//! iterator applies around each raw match.

use regex::Regex;
use std::ops::Range;

/// A matched region of the input text.
///
/// Offsets are byte offsets into the scanned text; `end > start` always holds
/// for spans produced by [`Spans`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan<'t> {
    pub start: usize,
    pub end: usize,
    text: &'t str,
}

impl<'t> MatchSpan<'t> {
    /// Builds a span over `haystack[start..end]`.
    ///
    /// Returns `None` for empty or out-of-bounds ranges.
    pub fn new(haystack: &'t str, start: usize, end: usize) -> Option<Self> {
        if end <= start {
            return None;
        }
        haystack.get(start..end).map(|text| Self { start, end, text })
    }

    pub fn as_str(&self) -> &'t str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Context rule applied around a raw regex match.
#[derive(Debug, Clone, Copy)]
pub enum Boundary<'r> {
    /// Accept matches as the regex reports them.
    None,
    /// The span must not touch another ASCII digit on either side.
    ///
    /// The regex is the anchored whole-candidate form of the pattern, used to
    /// retry shorter ends when the preferred match runs into a digit.
    Digits(&'r Regex),
    /// The span must not be preceded by a word character.
    WordBefore,
}

/// Lazy iterator over non-overlapping, left-to-right spans of one pattern.
///
/// Each call to `PatternMatcher::find_spans` yields a fresh iterator, so a
/// sequence can be restarted simply by asking for it again.
#[derive(Debug)]
pub struct Spans<'r, 't> {
    pattern: &'r Regex,
    boundary: Boundary<'r>,
    text: &'t str,
    pos: usize,
}

impl<'r, 't> Spans<'r, 't> {
    pub fn new(pattern: &'r Regex, boundary: Boundary<'r>, text: &'t str) -> Self {
        Self {
            pattern,
            boundary,
            text,
            pos: 0,
        }
    }

    /// Position one character after `at`, or the end of the text.
    fn step_past(&self, at: usize) -> usize {
        self.text[at..]
            .chars()
            .next()
            .map_or(self.text.len(), |c| at + c.len_utf8())
    }

    /// First position after `start` that is not preceded by an ASCII digit.
    fn skip_digit_run(&self, start: usize) -> usize {
        let run = self.text[start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        self.step_past(start + run)
    }

    fn digit_before(&self, at: usize) -> bool {
        self.text[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit())
    }

    fn digit_at(&self, at: usize) -> bool {
        self.text.as_bytes().get(at).is_some_and(u8::is_ascii_digit)
    }

    fn word_before(&self, at: usize) -> bool {
        self.text[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
    }

    /// Longest end in `(start, end]` that closes on a digit, is not followed
    /// by one, and still matches the whole-candidate pattern.
    fn shorter_end(&self, whole: &Regex, start: usize, end: usize) -> Option<usize> {
        (start + 1..end).rev().find(|&e| {
            self.text.is_char_boundary(e)
                && self.digit_at(e - 1)
                && !self.digit_at(e)
                && whole.is_match(&self.text[start..e])
        })
    }
}

impl<'r, 't> Iterator for Spans<'r, 't> {
    type Item = MatchSpan<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let m = self.pattern.find_at(self.text, self.pos)?;
            let (start, mut end) = (m.start(), m.end());

            if end == start {
                if start >= self.text.len() {
                    return None;
                }
                self.pos = self.step_past(start);
                continue;
            }

            match self.boundary {
                Boundary::None => {}
                Boundary::WordBefore => {
                    if self.word_before(start) {
                        self.pos = self.step_past(start);
                        continue;
                    }
                }
                Boundary::Digits(whole) => {
                    if self.digit_before(start) {
                        self.pos = self.skip_digit_run(start);
                        continue;
                    }
                    if self.digit_at(end) {
                        match self.shorter_end(whole, start, end) {
                            Some(e) => end = e,
                            None => {
                                self.pos = self.step_past(start);
                                continue;
                            }
                        }
                    }
                }
            }

            self.pos = end;
            return MatchSpan::new(self.text, start, end);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_pattern() -> (Regex, Regex) {
        (
            Regex::new(r"[0-9]{3}(?:-[0-9]{2})?").unwrap(),
            Regex::new(r"^(?:[0-9]{3}(?:-[0-9]{2})?)$").unwrap(),
        )
    }

    #[test]
    fn test_span_bounds() {
        assert!(MatchSpan::new("abc", 1, 1).is_none());
        assert!(MatchSpan::new("abc", 1, 4).is_none());
        let span = MatchSpan::new("abc", 1, 3).unwrap();
        assert_eq!(span.as_str(), "bc");
        assert_eq!(span.len(), 2);
        assert_eq!(span.range(), 1..3);
    }

    #[test]
    fn test_plain_iteration_is_left_to_right() {
        let re = Regex::new(r"[a-z]+").unwrap();
        let spans: Vec<_> = Spans::new(&re, Boundary::None, "ab 12 cd")
            .map(|s| s.as_str())
            .collect();
        assert_eq!(spans, vec!["ab", "cd"]);
    }

    #[test]
    fn test_digit_boundary_rejects_embedded_runs() {
        let (re, whole) = digits_pattern();
        let spans: Vec<_> = Spans::new(&re, Boundary::Digits(&whole), "1234 567")
            .map(|s| s.as_str())
            .collect();
        assert_eq!(spans, vec!["567"]);
    }

    #[test]
    fn test_digit_boundary_retries_shorter_end() {
        let (re, whole) = digits_pattern();
        // Preferred "123-45" runs into a digit; "123" is the fallback.
        let spans: Vec<_> = Spans::new(&re, Boundary::Digits(&whole), "123-456")
            .map(|s| s.as_str())
            .collect();
        assert_eq!(spans, vec!["123", "456"]);
    }

    #[test]
    fn test_word_boundary_before() {
        let re = Regex::new(r"#[a-z]+").unwrap();
        let spans: Vec<_> = Spans::new(&re, Boundary::WordBefore, "a#no #yes")
            .map(|s| s.as_str())
            .collect();
        assert_eq!(spans, vec!["#yes"]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let re = Regex::new(r"x").unwrap();
        let first = Spans::new(&re, Boundary::None, "x x").count();
        let second = Spans::new(&re, Boundary::None, "x x").count();
        assert_eq!(first, 2);
        assert_eq!(first, second);
    }
}
