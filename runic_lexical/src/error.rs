//! Contains all kinds of errors that can occur while scanning an input.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use runic_base::{
    log::{Message, Severity, SourceLineDisplay},
    source_text::{ByteIndex, Location},
};

use crate::specification::TransformError;

/// No rule of the specification matched the input at the scanner's cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedInput {
    /// The byte offset at which no rule matched.
    pub position: ByteIndex,

    /// The character found at the offending position.
    pub character: char,

    /// The resolved line/column of the offending position.
    pub location: Location,

    /// The line of input containing the offending position.
    pub line: String,
}

impl Display for UnrecognizedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("unrecognized character `{}`", self.character)
            ),
            SourceLineDisplay::new(&self.line, self.location)
        )
    }
}

impl std::error::Error for UnrecognizedInput {}

/// The scanner was asked to consume a token while no lookahead remained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedEndOfInput {
    /// The token kind the caller expected.
    pub expected: String,
}

impl Display for UnexpectedEndOfInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format!("unexpected end of input, expected `{}`", self.expected)
            )
        )
    }
}

impl std::error::Error for UnexpectedEndOfInput {}

/// The lookahead token's kind did not match what the caller expected.
///
/// The scanner is left untouched by this failure, so the caller may retry
/// the consumption with a different expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedToken {
    /// The display form of the lookahead token's value.
    pub actual: String,

    /// The token kind the caller expected.
    pub expected: String,
}

impl Display for UnexpectedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format!(
                    "unexpected token `{}`, expected `{}`",
                    self.actual, self.expected
                )
            )
        )
    }
}

impl std::error::Error for UnexpectedToken {}

/// A rule's value transform failed; the parse aborted and no token was
/// emitted.
#[derive(Debug)]
pub struct TransformFailure {
    /// The underlying cause, propagated unmodified.
    pub cause: TransformError,
}

impl Display for TransformFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format!("a value transform failed: {}", self.cause)
            )
        )
    }
}

impl std::error::Error for TransformFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

/// Is an enumeration containing all kinds of errors that can abort the
/// current parse.
///
/// Every variant is fatal: the scanner performs no retries, no backtracking
/// to a different rule, and no partial recovery.
#[derive(Debug, EnumAsInner, thiserror::Error, From)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    UnrecognizedInput(UnrecognizedInput),

    #[error(transparent)]
    UnexpectedEndOfInput(UnexpectedEndOfInput),

    #[error(transparent)]
    UnexpectedToken(UnexpectedToken),

    #[error(transparent)]
    TransformFailure(TransformFailure),
}
