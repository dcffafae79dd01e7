//! Contains the [`Pattern`] trait, the matching capability the scanner is
//! built around.

use std::fmt::Debug;

use regex::Regex;

/// Represents a single match of a [`Pattern`] anchored at the start of a
/// text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'t> {
    text: &'t str,
    named_captures: Vec<(String, &'t str)>,
}

impl<'t> PatternMatch<'t> {
    /// Creates a new [`PatternMatch`] from the full matched text and the
    /// named capture groups present in the match.
    #[must_use]
    pub fn new(text: &'t str, named_captures: Vec<(String, &'t str)>) -> Self {
        Self {
            text,
            named_captures,
        }
    }

    /// Gets the full matched text.
    #[must_use]
    pub fn text(&self) -> &'t str { self.text }

    /// Gets the length of the full match in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    /// Checks if the match is zero-length.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Gets the value of the given named capture group, or [`None`] if the
    /// group did not participate in the match.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&'t str> {
        self.named_captures
            .iter()
            .find_map(|(captured, value)| (captured == name).then_some(*value))
    }
}

/// Represents the pattern-matching capability a rule is built around.
///
/// The scanner only ever asks one question of a pattern: does it match
/// anchored at offset 0 of the remaining input, and what are its named
/// captures. Any engine able to answer that can back a rule; the provided
/// implementation is [`regex::Regex`].
pub trait Pattern: Debug + Send + Sync {
    /// Attempts to match this pattern at the very start of `text`.
    ///
    /// A match that begins past offset 0 is not a match: the scanner never
    /// searches ahead of its cursor.
    fn find_at_start<'t>(&self, text: &'t str) -> Option<PatternMatch<'t>>;

    /// Gets the textual form of the pattern, used to compare rules by value.
    fn as_str(&self) -> &str;
}

impl Pattern for Regex {
    fn find_at_start<'t>(&self, text: &'t str) -> Option<PatternMatch<'t>> {
        let captures = self.captures(text)?;
        let full = captures.get(0)?;

        if full.start() != 0 {
            return None;
        }

        let named_captures = self
            .capture_names()
            .flatten()
            .filter_map(|name| {
                captures
                    .name(name)
                    .map(|capture| (name.to_owned(), capture.as_str()))
            })
            .collect();

        Some(PatternMatch::new(full.as_str(), named_captures))
    }

    fn as_str(&self) -> &str { Regex::as_str(self) }
}

#[cfg(test)]
mod tests;
