//! Contains the code related to the text input being scanned.

use std::{cmp::Ordering, ops::Range};

/// Is an unsigned integer that represents a byte index in the scanned text.
pub type ByteIndex = usize;

/// Is a struct pointing to a particular location in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1).
    pub column: usize,
}

/// Represents the text input for one parse, with a precomputed line index.
///
/// The scanner owns one of these for the duration of a parse and uses it to
/// resolve byte offsets into human-readable [`Location`]s when reporting
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceText {
    text: String,
    lines: Vec<Range<ByteIndex>>,
}

impl SourceText {
    /// Creates a new [`SourceText`] from the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = line_byte_ranges(&text);

        Self { text, lines }
    }

    /// Gets the full text.
    #[must_use]
    pub fn content(&self) -> &str { &self.text }

    /// Gets the length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    /// Checks if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Gets the number of lines in the text.
    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Gets the line of the text at the given line number.
    ///
    /// The line number starts at 1. The returned slice includes the line
    /// terminator, if any.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| &self.text[range.clone()])
    }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// Returns [`None`] if the byte index does not lie on a character
    /// boundary of the text.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.text.is_char_boundary(byte_index) {
            return None;
        }

        // finds the line containing the byte index by binary searching the
        // precomputed line ranges
        let line = self
            .lines
            .binary_search_by(|range| {
                if range.contains(&byte_index) {
                    Ordering::Equal
                } else if byte_index < range.start {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
            .ok()?;

        // the column number counts characters, not bytes (starts at 1)
        let column = self.text[self.lines[line].start..byte_index]
            .chars()
            .count()
            + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

fn line_byte_ranges(text: &str) -> Vec<Range<ByteIndex>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut line_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            // ordinary lf
            b'\n' => {
                ranges.push(line_start..index + 1);

                index += 1;
                line_start = index;
            }

            // cr or crlf
            b'\r' => {
                let end = if bytes.get(index + 1) == Some(&b'\n') {
                    index + 2
                } else {
                    index + 1
                };
                ranges.push(line_start..end);

                index = end;
                line_start = end;
            }

            _ => index += 1,
        }
    }

    ranges.push(line_start..text.len());

    ranges
}
