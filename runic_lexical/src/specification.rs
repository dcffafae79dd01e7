//! Contains the [`Rule`] and [`Specification`] types describing what the
//! scanner should match.

use std::{error::Error, fmt::Debug, future::Future, pin::Pin, sync::Arc};

use derive_more::{Deref, DerefMut, From};

use crate::pattern::Pattern;

/// Is the error type a value transform may fail with; the cause is
/// propagated to the caller unmodified.
pub type TransformError = Box<dyn Error + Send + Sync>;

/// Is the result of awaiting a value transform.
pub type TransformResult<T> = Result<T, TransformError>;

/// Is the future returned by a value transform.
///
/// Transforms are awaited sequentially inside the scan step that invoked
/// them; the scanner never spawns them elsewhere.
pub type TransformFuture<T> = Pin<Box<dyn Future<Output = TransformResult<T>> + Send>>;

/// Is the boxed operation mapping a rule's raw extracted text to the final
/// token value.
pub type Transform<T> = Arc<dyn Fn(String) -> TransformFuture<T> + Send + Sync>;

/// Represents one matching directive of a [`Specification`].
///
/// A rule pairs an anchored [`Pattern`] with the tag of the tokens it
/// produces. A rule without a tag is a *discard* rule: its matches consume
/// input but never yield a token (whitespace, comments, and the like).
///
/// When `capture_groups` is set, the emitted value is built from the named
/// sub-matches listed there instead of the whole match; `group_join` is
/// inserted between consecutive present values. A rule may also carry an
/// asynchronous `transform` mapping the raw extracted text to the final
/// token value.
pub struct Rule<T = String> {
    pattern: Box<dyn Pattern>,
    kind: Option<String>,
    capture_groups: Option<Vec<String>>,
    group_join: Option<String>,
    transform: Option<Transform<T>>,
}

impl<T> Rule<T> {
    /// Creates a new rule producing tokens tagged with `kind`.
    #[must_use]
    pub fn new(pattern: impl Pattern + 'static, kind: impl Into<String>) -> Self {
        Self {
            pattern: Box::new(pattern),
            kind: Some(kind.into()),
            capture_groups: None,
            group_join: None,
            transform: None,
        }
    }

    /// Creates a discard rule: its matches consume input but never yield a
    /// token.
    #[must_use]
    pub fn discard(pattern: impl Pattern + 'static) -> Self {
        Self {
            pattern: Box::new(pattern),
            kind: None,
            capture_groups: None,
            group_join: None,
            transform: None,
        }
    }

    /// Sets the ordered list of named capture groups the emitted value is
    /// built from.
    ///
    /// Names absent from the pattern are legal; they simply extract nothing.
    #[must_use]
    pub fn with_capture_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capture_groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the separator inserted between consecutive present captured
    /// group values.
    #[must_use]
    pub fn with_group_join(mut self, separator: impl Into<String>) -> Self {
        self.group_join = Some(separator.into());
        self
    }

    /// Sets the value transform applied to the raw extracted text before
    /// the token is produced.
    ///
    /// The transform may suspend; the scanner awaits it inside the scan
    /// step, strictly sequentially.
    #[must_use]
    pub fn with_transform<F, Fut>(mut self, transform: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TransformResult<T>> + Send + 'static,
    {
        self.transform = Some(Arc::new(move |value| -> TransformFuture<T> {
            Box::pin(transform(value))
        }));
        self
    }

    /// Gets the anchored pattern of the rule.
    #[must_use]
    pub fn pattern(&self) -> &dyn Pattern { self.pattern.as_ref() }

    /// Gets the tag of the tokens this rule produces, or [`None`] for a
    /// discard rule.
    #[must_use]
    pub fn kind(&self) -> Option<&str> { self.kind.as_deref() }

    /// Checks if this is a discard rule.
    #[must_use]
    pub fn is_discard(&self) -> bool { self.kind.is_none() }

    /// Gets the ordered list of named capture groups the emitted value is
    /// built from, if any.
    #[must_use]
    pub fn capture_groups(&self) -> Option<&[String]> { self.capture_groups.as_deref() }

    /// Gets the separator inserted between consecutive present captured
    /// group values, if any.
    #[must_use]
    pub fn group_join(&self) -> Option<&str> { self.group_join.as_deref() }

    /// Gets the value transform of the rule, if any.
    #[must_use]
    pub fn transform(&self) -> Option<&Transform<T>> { self.transform.as_ref() }
}

impl<T> Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("kind", &self.kind)
            .field("capture_groups", &self.capture_groups)
            .field("group_join", &self.group_join)
            .field("transform", &self.transform.as_ref().map(|_| "<function>"))
            .finish()
    }
}

impl<T> PartialEq for Rule<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.pattern.as_str() == other.pattern.as_str()
            && self.capture_groups == other.capture_groups
            && self.group_join == other.group_join
            && match (&self.transform, &other.transform) {
                // transforms are opaque; compare them by identity
                (Some(lhs), Some(rhs)) => {
                    std::ptr::eq(Arc::as_ptr(lhs).cast::<()>(), Arc::as_ptr(rhs).cast::<()>())
                }
                (None, None) => true,
                _ => false,
            }
    }
}

/// Is an ordered, mutable sequence of [`Rule`]s; list order is the only
/// match-priority mechanism the scanner honors.
///
/// The sequence dereferences to its underlying [`Vec`], so the whole
/// standard ordered-collection surface (indexing, `insert`, `remove`,
/// `contains`, `clear`, `len`, iteration) is available. Duplicate rules are
/// allowed and nothing validates a rule on mutation: a rule made
/// unreachable by an earlier one is accepted silently, as a caller
/// responsibility.
#[derive(Debug, Deref, DerefMut, From)]
pub struct Specification<T = String> {
    rules: Vec<Rule<T>>,
}

impl<T> Specification<T> {
    /// Creates a new empty [`Specification`].
    #[must_use]
    pub fn new() -> Self { Self { rules: Vec::new() } }

    /// Appends a rule at the end of the sequence, giving it the lowest
    /// match priority so far.
    pub fn add(&mut self, rule: Rule<T>) { self.rules.push(rule); }

    /// Removes the first rule equal to the given one, returning `true` if
    /// one was removed.
    pub fn remove_rule(&mut self, rule: &Rule<T>) -> bool {
        self.rules
            .iter()
            .position(|candidate| candidate == rule)
            .map(|index| self.rules.remove(index))
            .is_some()
    }

    /// Consumes the specification and returns the underlying vector of
    /// rules.
    #[must_use]
    pub fn into_rules(self) -> Vec<Rule<T>> { self.rules }
}

impl<T> Default for Specification<T> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
pub(crate) mod tests;
