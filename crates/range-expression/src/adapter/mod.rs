//! Per-type parsing capabilities used by the range compiler.
//!
//! A [`ValueAdapter`] bundles everything the compiler needs to know about a
//! value type: how to parse a literal, how to step to the next value, and
//! which literal grammar to enforce before parsing. Adapters for the common
//! numeric and `chrono` types are built lazily and memoised by the
//! [`registry`].

mod builtin;
pub mod literal;
pub mod registry;

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::errors::LiteralError;

pub(crate) use builtin::builtin_adapter;

type ParseFn<T> = Arc<dyn Fn(&str) -> Result<T, LiteralError> + Send + Sync>;
type SuccessorFn<T> = Arc<dyn Fn(&T) -> Option<T> + Send + Sync>;

/// Parsing and stepping behaviour for one value type.
///
/// Cloning is cheap: the parser, successor and grammar are shared.
///
/// # Examples
/// ```
/// use range_expression::{RangeSet, ValueAdapter};
///
/// let grades = ValueAdapter::new(|text: &str| match text {
///     "A" => Ok(1),
///     "B" => Ok(2),
///     "C" => Ok(3),
///     other => Err(format!("unknown grade {other}")),
/// });
/// let set = RangeSet::with_adapter("A..C", grades).expect("grades compile");
/// assert!(set.contains(&1));
/// assert!(!set.contains(&4));
/// ```
pub struct ValueAdapter<T> {
    parse: ParseFn<T>,
    successor: Option<SuccessorFn<T>>,
    literal: Option<Regex>,
    type_name: &'static str,
}

impl<T> ValueAdapter<T> {
    /// Create an adapter from a parser. The parser is trusted to reject
    /// malformed literals itself, so no grammar check precedes it.
    pub fn new<F, E>(parse: F) -> Self
    where
        T: 'static,
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
        E: Into<LiteralError>,
    {
        Self {
            parse: Arc::new(move |text: &str| -> Result<T, LiteralError> {
                parse(text).map_err(Into::into)
            }),
            successor: None,
            literal: None,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Attach a successor function, returning `None` when `value` has no
    /// representable successor.
    #[must_use]
    pub fn with_successor<F>(mut self, successor: F) -> Self
    where
        F: Fn(&T) -> Option<T> + Send + Sync + 'static,
    {
        self.successor = Some(Arc::new(successor));
        self
    }

    /// Require literals to match `fragment` (a regular expression, anchored
    /// implicitly) before they reach the parser.
    ///
    /// # Errors
    /// Returns [`regex::Error`] when `fragment` is not a valid expression.
    pub fn with_literal(mut self, fragment: &str) -> Result<Self, regex::Error> {
        self.literal = Some(literal::compile_literal(fragment)?);
        Ok(self)
    }

    pub(crate) fn with_literal_regex(mut self, regex: &Regex) -> Self {
        self.literal = Some(regex.clone());
        self
    }

    pub(crate) fn replace_successor(mut self, successor: Option<SuccessorFn<T>>) -> Self {
        if successor.is_some() {
            self.successor = successor;
        }
        self
    }

    pub(crate) fn successor_fn(&self) -> Option<SuccessorFn<T>> {
        self.successor.clone()
    }

    /// Parse `text` without consulting the literal grammar.
    ///
    /// # Errors
    /// Propagates the parser's error.
    pub fn parse(&self, text: &str) -> Result<T, LiteralError> {
        (self.parse)(text)
    }

    /// Returns `true` when `text` satisfies the literal grammar, or when the
    /// adapter has none.
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        self.literal.as_ref().is_none_or(|regex| regex.is_match(text))
    }

    /// Step to the next representable value.
    ///
    /// Returns `None` when the adapter has no successor function or `value`
    /// is the largest representable value.
    #[must_use]
    pub fn successor(&self, value: &T) -> Option<T> {
        self.successor.as_ref().and_then(|next| next(value))
    }

    /// Returns `true` when a successor function is configured.
    #[must_use]
    pub fn has_successor(&self) -> bool {
        self.successor.is_some()
    }

    /// The literal grammar, or [`literal::FALLBACK`] when the parser alone
    /// decides what is valid.
    #[must_use]
    pub fn literal_pattern(&self) -> &str {
        self.literal
            .as_ref()
            .map_or(literal::FALLBACK, literal::fragment_of)
    }

    /// Name of the value type, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<T> Clone for ValueAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            parse: Arc::clone(&self.parse),
            successor: self.successor.clone(),
            literal: self.literal.clone(),
            type_name: self.type_name,
        }
    }
}

impl<T> fmt::Debug for ValueAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueAdapter")
            .field("type_name", &self.type_name)
            .field("literal", &self.literal_pattern())
            .field("has_successor", &self.has_successor())
            .finish_non_exhaustive()
    }
}
