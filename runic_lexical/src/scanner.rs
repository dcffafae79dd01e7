#![allow(clippy::future_not_send)]

//! Contains the [`Scanner`] driving a [`Specification`] against an input.

use std::{fmt::Display, sync::Arc};

use getset::CopyGetters;
use runic_base::source_text::{ByteIndex, SourceText};

use crate::{
    error::{Error, TransformFailure, UnexpectedEndOfInput, UnexpectedToken, UnrecognizedInput},
    pattern::PatternMatch,
    specification::{Rule, Specification, Transform},
    token::{Token, Value},
};

/// Is the stateful driver that turns an input text into a stream of
/// [`Token`]s by repeatedly applying a [`Specification`].
///
/// A scanner keeps exactly one token of lookahead, established once per
/// parse and refreshed on every consumption, which is what gives a
/// downstream parser its `peek`/`consume` protocol.
///
/// A scanner is reusable across independent inputs (each [`Self::begin`] or
/// [`Self::parse`] resets it from scratch) but is not reentrant within one
/// parse; inputs scanned concurrently each need their own scanner. The
/// specification itself is shared through an [`Arc`] and may safely back
/// several scanners at once, as long as nobody mutates it mid-parse.
#[derive(Debug, CopyGetters)]
pub struct Scanner<T = String> {
    specification: Arc<Specification<T>>,
    input: SourceText,
    cursor: ByteIndex,

    /// Gets the cursor offset recorded before the most recently consumed
    /// token of an eager parse, for the caller's diagnostics.
    #[get_copy = "pub"]
    previous_cursor_position: Option<ByteIndex>,

    lookahead: Option<Token<T>>,
}

/// The owned outcome of resolving the first matching rule at some cursor,
/// decoupled from the borrows of the input slice.
enum ScanStep<T> {
    Discard {
        length: usize,
    },
    Emit {
        length: usize,
        kind: String,
        raw: String,
        transform: Option<Transform<T>>,
    },
}

impl<T> Scanner<T> {
    /// Creates a new [`Scanner`] driven by the given specification.
    #[must_use]
    pub fn new(specification: Arc<Specification<T>>) -> Self {
        Self {
            specification,
            input: SourceText::default(),
            cursor: 0,
            previous_cursor_position: None,
            lookahead: None,
        }
    }

    /// Gets the specification currently driving the scanner.
    #[must_use]
    pub fn specification(&self) -> &Arc<Specification<T>> { &self.specification }

    /// Swaps the specification used for subsequent parses.
    ///
    /// Swapping while a parse is being driven interactively is undefined and
    /// must be avoided by the caller.
    pub fn set_specification(&mut self, specification: Arc<Specification<T>>) {
        self.specification = specification;
    }

    /// Gets the current cursor offset into the input.
    #[must_use]
    pub fn cursor_position(&self) -> ByteIndex { self.cursor }

    /// Checks if there is still unscanned text left.
    ///
    /// This reflects *text* exhaustion, not lookahead exhaustion: once the
    /// last match consumes the remaining text exactly, this turns `false`
    /// while the final token still waits in the lookahead.
    #[must_use]
    pub fn has_more_tokens(&self) -> bool { self.cursor < self.input.len() }

    /// Checks if the cursor has reached the end of the input.
    #[must_use]
    pub fn is_at_end(&self) -> bool { self.cursor == self.input.len() }

    /// Returns the current lookahead token without advancing the scanner.
    #[must_use]
    pub fn peek(&self) -> Option<&Token<T>> { self.lookahead.as_ref() }

    /// Begins a new parse over the given input: resets the cursor, then
    /// computes the initial lookahead.
    ///
    /// After this, the scanner can be driven interactively through
    /// [`Self::peek`] and [`Self::consume`]; [`Self::parse`] is the eager
    /// equivalent that owns the loop.
    ///
    /// # Errors
    /// Any [`Error`] produced while computing the initial lookahead.
    pub async fn begin(&mut self, input: impl Into<String>) -> Result<(), Error> {
        self.input = SourceText::new(input);
        self.cursor = 0;
        self.previous_cursor_position = None;
        self.lookahead = None;

        self.lookahead = self.next_token().await?;

        Ok(())
    }

    /// Produces the next token starting from the current cursor.
    ///
    /// This is one self-contained scan step: it walks the specification in
    /// list order against the remaining input, skips through discard-rule
    /// matches iteratively, and stops at the first rule that yields an
    /// emittable token or at the end of the input. The scanner's state is
    /// committed only once the whole step, any value transform included,
    /// has resolved.
    async fn next_token(&mut self) -> Result<Option<Token<T>>, Error> {
        let specification = self.specification.clone();
        let mut cursor = self.cursor;

        loop {
            if cursor >= self.input.len() {
                // commits the offsets consumed by trailing discard matches
                self.cursor = cursor;
                return Ok(None);
            }

            let start_index = cursor;
            let step = {
                let remaining = &self.input.content()[cursor..];

                let Some((rule, matched)) = first_match(&specification, remaining) else {
                    return Err(self.unrecognized_input(cursor));
                };

                // a zero-length match can never advance the cursor and
                // would retry the same position forever
                if matched.is_empty() {
                    return Err(self.unrecognized_input(cursor));
                }

                match rule.kind() {
                    None => ScanStep::Discard {
                        length: matched.len(),
                    },
                    Some(kind) => ScanStep::Emit {
                        length: matched.len(),
                        kind: kind.to_owned(),
                        raw: extract_value(rule, &matched),
                        transform: rule.transform().cloned(),
                    },
                }
            };

            match step {
                ScanStep::Discard { length } => cursor += length,
                ScanStep::Emit {
                    length,
                    kind,
                    raw,
                    transform,
                } => {
                    let value = match transform {
                        Some(transform) => Value::Other(
                            transform.as_ref()(raw)
                                .await
                                .map_err(|cause| TransformFailure { cause })?,
                        ),
                        None => Value::Text(raw),
                    };

                    // the cursor advances by the full matched length, not
                    // by the captured-group length
                    self.cursor = cursor + length;
                    return Ok(Some(Token::new(start_index, kind, value)));
                }
            }
        }
    }

    /// Builds the [`UnrecognizedInput`] error for the given position.
    fn unrecognized_input(&self, position: ByteIndex) -> Error {
        let character = self.input.content()[position..]
            .chars()
            .next()
            .unwrap_or_default();
        let location = self.input.get_location(position).unwrap_or_default();
        let line = self
            .input
            .get_line(location.line)
            .unwrap_or_default()
            .trim_end_matches(['\r', '\n'])
            .to_owned();

        UnrecognizedInput {
            position,
            character,
            location,
            line,
        }
        .into()
    }
}

impl<T: Display> Scanner<T> {
    /// Consumes the current lookahead token, expecting it to be of the
    /// given kind, and refreshes the lookahead with the next scan step.
    ///
    /// On a kind mismatch the scanner is left untouched, so the caller may
    /// retry with a different expectation or abort cleanly.
    ///
    /// # Errors
    /// - [`Error::UnexpectedEndOfInput`] - no lookahead remains.
    /// - [`Error::UnexpectedToken`] - the lookahead's kind differs from
    ///   `expected`; the scanner state is unchanged.
    /// - Any [`Error`] produced while computing the replacement lookahead.
    pub async fn consume(&mut self, expected: &str) -> Result<Token<T>, Error> {
        let Some(token) = self.lookahead.take() else {
            return Err(UnexpectedEndOfInput {
                expected: expected.to_owned(),
            }
            .into());
        };

        if token.kind() != expected {
            let error = UnexpectedToken {
                actual: token.value().to_string(),
                expected: expected.to_owned(),
            };
            self.lookahead = Some(token);

            return Err(error.into());
        }

        self.lookahead = self.next_token().await?;

        Ok(token)
    }

    /// Scans the whole input eagerly and returns the ordered list of
    /// produced tokens, discard-rule matches excluded.
    ///
    /// This is equivalent to driving [`Self::peek`]/[`Self::consume`]
    /// externally, but owns the loop: before every consumption the current
    /// cursor is recorded into [`Self::previous_cursor_position`].
    ///
    /// # Errors
    /// Any [`Error`] raised by a scan step; the parse aborts at the first
    /// failure and no tokens are returned.
    pub async fn parse(&mut self, input: impl Into<String>) -> Result<Vec<Token<T>>, Error> {
        self.begin(input).await?;

        let mut tokens = Vec::new();
        while let Some(lookahead) = self.lookahead.as_ref() {
            let kind = lookahead.kind().clone();

            self.previous_cursor_position = Some(self.cursor);
            tokens.push(self.consume(&kind).await?);
        }

        Ok(tokens)
    }

    /// Swaps in the given specification and scans the input with it; the
    /// specification stays in place for subsequent parses.
    ///
    /// # Errors
    /// Same as [`Self::parse`].
    pub async fn parse_with(
        &mut self,
        input: impl Into<String>,
        specification: Arc<Specification<T>>,
    ) -> Result<Vec<Token<T>>, Error> {
        self.set_specification(specification);
        self.parse(input).await
    }
}

/// Walks the specification in list order and returns the first rule whose
/// pattern matches anchored at the start of `remaining`, together with its
/// match.
///
/// Priority is positional: later rules are not tried once one matches, even
/// if they would match more input.
fn first_match<'s, 't, T>(
    specification: &'s Specification<T>,
    remaining: &'t str,
) -> Option<(&'s Rule<T>, PatternMatch<'t>)> {
    specification.iter().find_map(|rule| {
        rule.pattern()
            .find_at_start(remaining)
            .map(|matched| (rule, matched))
    })
}

/// Computes the raw extracted value of a typed rule's match: the full match
/// text, or the joined present capture-group values when the rule requests
/// them.
fn extract_value<T>(rule: &Rule<T>, matched: &PatternMatch<'_>) -> String {
    let Some(groups) = rule.capture_groups() else {
        return matched.text().to_owned();
    };

    let mut combined = String::new();
    let mut first = true;
    for name in groups {
        let Some(value) = matched.named(name) else {
            continue;
        };

        // the separator goes between present values only, never trailing
        if !first {
            if let Some(separator) = rule.group_join() {
                combined.push_str(separator);
            }
        }
        combined.push_str(value);
        first = false;
    }

    combined
}
