//! Contains the [`Token`] type emitted by the scanner and its value
//! variants.

use std::fmt::Display;

use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use runic_base::source_text::ByteIndex;

/// Is an enumeration of the two shapes a token's value can take.
///
/// A token produced by a rule without a transform carries the raw extracted
/// text; a rule with a transform carries whatever the transform returned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum Value<T = String> {
    /// The raw text extracted from the match.
    Text(String),

    /// The result of the rule's value transform.
    Other(T),
}

impl<T> Value<T> {
    /// Gets the raw extracted text as a `&str`, if this value was not
    /// transformed.
    #[must_use]
    pub fn as_text_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other(_) => None,
        }
    }
}

impl<T: Display> Display for Value<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => Display::fmt(text, f),
            Self::Other(other) => Display::fmt(other, f),
        }
    }
}

/// Represents a single typed token produced by the scanner.
///
/// Tokens are pure data: once constructed they are never mutated and hold
/// no reference back to the scanner that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, new)]
pub struct Token<T = String> {
    /// Gets the byte offset into the original input where the match began.
    #[get_copy = "pub"]
    start_index: ByteIndex,

    /// Gets the tag identifying the kind of the token.
    #[get = "pub"]
    kind: String,

    /// Gets the extracted (and possibly transformed) value of the token.
    #[get = "pub"]
    value: Value<T>,
}

impl<T> Token<T> {
    /// Consumes the token and returns its value.
    #[must_use]
    pub fn into_value(self) -> Value<T> { self.value }
}
