//! Compiled range sets and their builder.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::adapter::ValueAdapter;
use crate::errors::{LiteralError, RangeError, unsupported_type};
use crate::mode::CompatibilityMode;
use crate::pattern::compile_ranges;
use crate::range::{Range, RangeValue};
use crate::registry::lookup_adapter;

/// An immutable, compiled range pattern.
///
/// A value is contained when any of the compiled ranges matches it. The set
/// keeps the pattern text verbatim for display and the ranges in pattern
/// order for inspection.
///
/// # Examples
/// ```
/// use range_expression::RangeSet;
///
/// let set = RangeSet::<i32>::new("1..5,7..10,15..20").expect("pattern compiles");
/// assert!(set.contains(&3));
/// assert!(!set.contains(&6));
/// assert!(set.contains(&20));
/// assert_eq!(set.to_string(), "1..5,7..10,15..20");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSet<T> {
    pattern: String,
    ranges: Vec<Range<T>>,
    mode: CompatibilityMode,
}

impl<T: RangeValue> RangeSet<T> {
    /// Compile `pattern` in [`CompatibilityMode::Typed`] using the registered
    /// adapter for `T`.
    ///
    /// # Errors
    /// Returns [`RangeError`] when the pattern is malformed, a bounded part is
    /// reversed, or `T` has no adapter.
    pub fn new(pattern: impl Into<String>) -> Result<Self, RangeError> {
        Self::builder(pattern).build()
    }

    /// Compile `pattern` in [`CompatibilityMode::Typed`] with an explicit
    /// adapter, bypassing the registry.
    ///
    /// # Errors
    /// Returns [`RangeError`] when the pattern is malformed or a bounded part
    /// is reversed.
    pub fn with_adapter(
        pattern: impl Into<String>,
        adapter: ValueAdapter<T>,
    ) -> Result<Self, RangeError> {
        Self::builder(pattern).adapter(adapter).build()
    }

    /// Start configuring the compilation of `pattern`.
    pub fn builder(pattern: impl Into<String>) -> RangeSetBuilder<T> {
        RangeSetBuilder::new(pattern.into())
    }

    /// Returns `true` when any compiled range contains `value`.
    ///
    /// Ranges are checked in pattern order and the first match wins.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.ranges.iter().any(|range| range.contains(value))
    }
}

impl<T> RangeSet<T> {
    /// View the compiled ranges as `(start, end)` pairs in pattern order,
    /// with `None` for an open side.
    ///
    /// The iterator borrows the set and can be cloned or requested again to
    /// restart.
    ///
    /// # Examples
    /// ```
    /// use range_expression::RangeSet;
    ///
    /// let set = RangeSet::<i32>::new("..3,5..9,12..").expect("pattern compiles");
    /// let pairs: Vec<_> = set.ranges().collect();
    /// assert_eq!(
    ///     pairs,
    ///     vec![(None, Some(&3)), (Some(&5), Some(&9)), (Some(&12), None)]
    /// );
    /// ```
    pub fn ranges(&self) -> impl Iterator<Item = (Option<&T>, Option<&T>)> + Clone + '_ {
        self.ranges.iter().map(|range| (range.start(), range.end()))
    }

    /// Iterate over the compiled [`Range`] values.
    pub fn iter(&self) -> std::slice::Iter<'_, Range<T>> {
        self.ranges.iter()
    }

    /// Number of compiled ranges; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Always `false`: a pattern without ranges fails to compile.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The pattern exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The dialect the pattern was compiled under.
    #[must_use]
    pub fn mode(&self) -> CompatibilityMode {
        self.mode
    }
}

impl<T> fmt::Display for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl<T: RangeValue> FromStr for RangeSet<T> {
    type Err = RangeError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern)
    }
}

impl<'a, T> IntoIterator for &'a RangeSet<T> {
    type Item = &'a Range<T>;
    type IntoIter = std::slice::Iter<'a, Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Configures how a pattern is compiled into a [`RangeSet`].
///
/// Without overrides the registered adapter for `T` is used. A custom parser
/// replaces the adapter's parser and its literal grammar; a custom successor
/// replaces only the successor.
///
/// # Examples
/// ```
/// use range_expression::{CompatibilityMode, RangeSet};
///
/// let set = RangeSet::<i32>::builder("1, 5..7, *")
///     .mode(CompatibilityMode::Legacy)
///     .build()
///     .expect("legacy pattern compiles");
/// assert!(set.contains(&-100));
/// ```
#[must_use]
pub struct RangeSetBuilder<T> {
    pattern: String,
    adapter: Option<ValueAdapter<T>>,
    parser: Option<ValueAdapter<T>>,
    successor: Option<Arc<dyn Fn(&T) -> Option<T> + Send + Sync>>,
    mode: CompatibilityMode,
}

impl<T: RangeValue> RangeSetBuilder<T> {
    fn new(pattern: String) -> Self {
        Self {
            pattern,
            adapter: None,
            parser: None,
            successor: None,
            mode: CompatibilityMode::default(),
        }
    }

    /// Use `adapter` instead of the registered one.
    pub fn adapter(mut self, adapter: ValueAdapter<T>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Parse literals with `parse`. No literal grammar check runs before it.
    pub fn parser<F, E>(mut self, parse: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
        E: Into<LiteralError>,
    {
        self.parser = Some(ValueAdapter::new(parse));
        self
    }

    /// Step values with `successor` in [`CompatibilityMode::Legacy`].
    pub fn successor<F>(mut self, successor: F) -> Self
    where
        F: Fn(&T) -> Option<T> + Send + Sync + 'static,
    {
        self.successor = Some(Arc::new(successor));
        self
    }

    /// Select the grammar dialect.
    pub fn mode(mut self, mode: CompatibilityMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `.mode(CompatibilityMode::Legacy)`.
    pub fn legacy(self) -> Self {
        self.mode(CompatibilityMode::Legacy)
    }

    /// Compile the pattern.
    ///
    /// # Errors
    /// Returns [`RangeError::UnsupportedType`] when no parser is available for
    /// `T`, or when legacy mode is requested without a successor. Syntax and
    /// ordering problems surface as [`RangeError::InvalidPattern`] and
    /// [`RangeError::InvalidRange`].
    pub fn build(self) -> Result<RangeSet<T>, RangeError> {
        let adapter = self.resolve_adapter()?;
        if self.mode.needs_successor() && !adapter.has_successor() {
            return Err(unsupported_type::<T>(
                "legacy patterns need a successor function for this type",
            ));
        }
        let ranges = compile_ranges(&self.pattern, &adapter, self.mode)?;
        log::debug!(
            "compiled range pattern `{}` into {} range(s) as {} ({:?})",
            self.pattern,
            ranges.len(),
            adapter.type_name(),
            self.mode
        );
        Ok(RangeSet {
            pattern: self.pattern,
            ranges,
            mode: self.mode,
        })
    }

    fn resolve_adapter(&self) -> Result<ValueAdapter<T>, RangeError> {
        let base = match (&self.adapter, &self.parser) {
            (_, Some(parser)) => {
                let inherited = self
                    .adapter
                    .as_ref()
                    .and_then(ValueAdapter::successor_fn)
                    .or_else(|| lookup_adapter::<T>().ok().and_then(|a| a.successor_fn()));
                parser.clone().replace_successor(inherited)
            }
            (Some(adapter), None) => adapter.clone(),
            (None, None) => lookup_adapter::<T>()?,
        };
        Ok(base.replace_successor(self.successor.clone()))
    }
}

impl<T> fmt::Debug for RangeSetBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSetBuilder")
            .field("pattern", &self.pattern)
            .field("adapter", &self.adapter)
            .field("custom_parser", &self.parser.is_some())
            .field("custom_successor", &self.successor.is_some())
            .field("mode", &self.mode)
            .finish()
    }
}
