//! Error types shared by the lexer, the compiler and the adapter registry.

use std::fmt;
use thiserror::Error;

/// Boxed error produced by a value parser when a literal cannot be converted.
pub type LiteralError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Where a pattern failed to compile and what was found there.
///
/// `position` is the byte offset of the offending comma-separated part. For
/// legacy patterns it counts into the whitespace-stripped text.
///
/// # Examples
/// ```
/// use range_expression::PatternErrorInfo;
///
/// let info = PatternErrorInfo::new("malformed literal", 5, Some("abc".into()));
/// assert_eq!(info.to_string(), "malformed literal: part `abc` at offset 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternErrorInfo {
    /// Short description of what went wrong.
    pub message: &'static str,
    /// Byte offset of the offending part.
    pub position: usize,
    /// The offending part or literal, when one can be singled out.
    pub literal: Option<String>,
}

impl PatternErrorInfo {
    /// Describe a failure at `position`, optionally naming the text at fault.
    #[must_use]
    pub fn new(message: &'static str, position: usize, literal: Option<String>) -> Self {
        Self {
            message,
            position,
            literal,
        }
    }
}

impl fmt::Display for PatternErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)?;
        if let Some(part) = &self.literal {
            write!(f, ": part `{part}`")?;
        }
        write!(f, " at offset {}", self.position)
    }
}

/// Errors surfaced while compiling a range pattern.
///
/// Every variant is raised at construction time; a compiled
/// [`RangeSet`](crate::RangeSet) never fails afterwards.
///
/// # Examples
/// ```
/// use range_expression::{RangeError, RangeSet};
/// let err = RangeSet::<i32>::new("9..1").unwrap_err();
/// assert!(matches!(err, RangeError::InvalidRange { .. }));
/// ```
#[derive(Debug, Error)]
pub enum RangeError {
    /// The pattern is syntactically malformed or holds an unparseable literal.
    #[error("invalid range pattern `{pattern}`: {info}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// Where and why compilation failed.
        info: PatternErrorInfo,
        /// The value parser's own error, when the literal reached it.
        #[source]
        source: Option<LiteralError>,
    },
    /// A bounded part whose start lies after its end.
    #[error("invalid range `{part}` in pattern `{pattern}`: start is greater than end")]
    InvalidRange {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The offending `start..end` part.
        part: String,
    },
    /// No adapter is known for the value type and none was supplied.
    #[error("unsupported value type `{type_name}`: {reason}")]
    UnsupportedType {
        /// Name of the value type, as reported by [`std::any::type_name`].
        type_name: &'static str,
        /// Which capability is missing.
        reason: &'static str,
    },
}

impl RangeError {
    /// Return the syntax details when this is an [`RangeError::InvalidPattern`].
    #[must_use]
    pub fn pattern_info(&self) -> Option<&PatternErrorInfo> {
        match self {
            Self::InvalidPattern { info, .. } => Some(info),
            Self::InvalidRange { .. } | Self::UnsupportedType { .. } => None,
        }
    }
}

pub(crate) fn pattern_error(
    pattern: &str,
    message: &'static str,
    position: usize,
    literal: Option<String>,
) -> RangeError {
    RangeError::InvalidPattern {
        pattern: pattern.to_string(),
        info: PatternErrorInfo::new(message, position, literal),
        source: None,
    }
}

pub(crate) fn unsupported_type<T>(reason: &'static str) -> RangeError {
    RangeError::UnsupportedType {
        type_name: std::any::type_name::<T>(),
        reason,
    }
}
