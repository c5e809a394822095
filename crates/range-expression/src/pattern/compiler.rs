//! Convert lexed parts into typed range predicates.

use crate::adapter::ValueAdapter;
use crate::errors::{LiteralError, PatternErrorInfo, RangeError};
use crate::mode::CompatibilityMode;
use crate::range::{Range, RangeValue};

use super::lexer::{Part, Token};

/// Compiles the parts of one pattern against a fixed adapter and mode.
pub(crate) struct RangeCompiler<'a, T> {
    pattern: &'a str,
    adapter: &'a ValueAdapter<T>,
    mode: CompatibilityMode,
}

impl<'a, T: RangeValue> RangeCompiler<'a, T> {
    pub(crate) fn new(
        pattern: &'a str,
        adapter: &'a ValueAdapter<T>,
        mode: CompatibilityMode,
    ) -> Self {
        Self {
            pattern,
            adapter,
            mode,
        }
    }

    /// Build the range described by `part`.
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidPattern`] for literals the adapter rejects
    /// and [`RangeError::InvalidRange`] when a bounded part is reversed.
    pub(crate) fn compile(&self, part: &Part) -> Result<Range<T>, RangeError> {
        match self.mode {
            CompatibilityMode::Typed => self.closed(part),
            CompatibilityMode::Legacy => self.half_open(part),
        }
    }

    fn closed(&self, part: &Part) -> Result<Range<T>, RangeError> {
        match &part.token {
            Token::Single(text) => {
                let value = self.value(text, part)?;
                self.ordered(value.clone(), value, part)
            }
            Token::OpenStart { end } => Ok(Range::at_most(self.value(end, part)?)),
            Token::OpenEnd { start } => Ok(Range::at_least(self.value(start, part)?)),
            Token::Bounded { start, end } => {
                let start = self.value(start, part)?;
                let end = self.value(end, part)?;
                self.ordered(start, end, part)
            }
            Token::Wildcard => Ok(Range::full()),
        }
    }

    fn half_open(&self, part: &Part) -> Result<Range<T>, RangeError> {
        match &part.token {
            Token::Single(text) => {
                let value = self.value(text, part)?;
                let next = self.adapter.successor(&value);
                Ok(Range::half_open(value, next))
            }
            Token::OpenStart { end } => {
                let end = self.value(end, part)?;
                Ok(Range::below(self.adapter.successor(&end)))
            }
            Token::OpenEnd { start } => Ok(Range::at_least(self.value(start, part)?)),
            Token::Bounded { start, end } => {
                let start = self.value(start, part)?;
                let end = self.value(end, part)?;
                if Range::between(start.clone(), end.clone()).is_none() {
                    return Err(self.reversed(part));
                }
                Ok(Range::half_open(start, self.adapter.successor(&end)))
            }
            Token::Wildcard => Ok(Range::full()),
        }
    }

    fn ordered(&self, start: T, end: T, part: &Part) -> Result<Range<T>, RangeError> {
        Range::between(start, end).ok_or_else(|| self.reversed(part))
    }

    fn value(&self, literal: &str, part: &Part) -> Result<T, RangeError> {
        let signed = !self.mode.allows_plus_sign() && literal.starts_with('+');
        if signed || !self.adapter.accepts(literal) {
            return Err(self.literal_error("malformed literal", literal, part, None));
        }
        self.adapter
            .parse(literal)
            .map_err(|err| self.literal_error("unparseable literal", literal, part, Some(err)))
    }

    fn literal_error(
        &self,
        message: &'static str,
        literal: &str,
        part: &Part,
        source: Option<LiteralError>,
    ) -> RangeError {
        RangeError::InvalidPattern {
            pattern: self.pattern.to_owned(),
            info: PatternErrorInfo::new(message, part.position, Some(literal.to_owned())),
            source,
        }
    }

    fn reversed(&self, part: &Part) -> RangeError {
        RangeError::InvalidRange {
            pattern: self.pattern.to_owned(),
            part: part.text.clone(),
        }
    }
}
