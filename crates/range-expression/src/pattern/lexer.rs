//! Pattern lexer splitting range patterns into classified parts.

use std::borrow::Cow;

use crate::errors::{RangeError, pattern_error};
use crate::mode::CompatibilityMode;

pub(crate) const PART_SEPARATOR: char = ',';
pub(crate) const RANGE_SEPARATOR: &str = "..";
pub(crate) const WILDCARD: &str = "*";
/// Two overlapping separators; splitting on the first would leave a stray `.`.
const RUN_OF_DOTS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Wildcard,
    Single(String),
    OpenStart { end: String },
    OpenEnd { start: String },
    Bounded { start: String, end: String },
}

/// One comma-separated segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Part {
    pub token: Token,
    /// The segment with surrounding whitespace removed.
    pub text: String,
    /// Byte offset of `text` in the (normalised) pattern.
    pub position: usize,
}

pub(crate) fn lex_pattern(pattern: &str, mode: CompatibilityMode) -> Result<Vec<Part>, RangeError> {
    if pattern.trim().is_empty() {
        return Err(pattern_error(pattern, "pattern is empty", 0, None));
    }

    let normalised = if mode.is_legacy() {
        Cow::Owned(pattern.chars().filter(|c| !c.is_whitespace()).collect::<String>())
    } else {
        Cow::Borrowed(pattern)
    };

    let mut parts = Vec::new();
    let mut offset = 0usize;
    for raw in normalised.split(PART_SEPARATOR) {
        let text = raw.trim();
        let position = offset + (raw.len() - raw.trim_start().len());
        offset += raw.len() + PART_SEPARATOR.len_utf8();

        if text.is_empty() {
            if mode.is_legacy() {
                return Err(pattern_error(pattern, "empty range part", position, None));
            }
            continue;
        }
        let token = classify(pattern, text, position, mode)?;
        parts.push(Part {
            token,
            text: text.to_owned(),
            position,
        });
    }

    if parts.is_empty() {
        return Err(pattern_error(pattern, "pattern contains no ranges", 0, None));
    }
    Ok(parts)
}

fn classify(
    pattern: &str,
    text: &str,
    position: usize,
    mode: CompatibilityMode,
) -> Result<Token, RangeError> {
    if mode.allows_wildcard() && text == WILDCARD {
        return Ok(Token::Wildcard);
    }
    let Some((start, end)) = text.split_once(RANGE_SEPARATOR) else {
        return Ok(Token::Single(text.to_owned()));
    };
    if end.contains(RANGE_SEPARATOR) || text.contains(RUN_OF_DOTS) {
        return Err(pattern_error(
            pattern,
            "multiple `..` separators in range",
            position,
            Some(text.to_owned()),
        ));
    }

    let (start, end) = (start.trim(), end.trim());
    match (start.is_empty(), end.is_empty()) {
        (true, true) => Err(pattern_error(
            pattern,
            "range has neither start nor end",
            position,
            Some(text.to_owned()),
        )),
        (true, false) => Ok(Token::OpenStart {
            end: end.to_owned(),
        }),
        (false, true) => Ok(Token::OpenEnd {
            start: start.to_owned(),
        }),
        (false, false) => Ok(Token::Bounded {
            start: start.to_owned(),
            end: end.to_owned(),
        }),
    }
}
