//! Literal grammars accepted by the built-in value adapters.

use regex::Regex;
use std::sync::LazyLock;

/// Grammar for signed integer literals.
pub const SIGNED_INTEGER: &str = r"[+-]?\d+";

/// Grammar for unsigned integer literals.
pub const UNSIGNED_INTEGER: &str = r"\d+";

/// Grammar for floating-point literals: sign, digits, optional fraction and
/// exponent. Both sides of the decimal point need digits, and `nan` and `inf`
/// are absent.
pub const FLOAT: &str = r"[+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?";

/// Grammar for calendar dates (`YYYY-MM-DD`).
pub const DATE: &str = r"\d{4}-\d{2}-\d{2}";

/// Grammar for dates with an optional time of day and UTC offset.
pub const DATE_TIME: &str =
    r"\d{4}-\d{2}-\d{2}(?:[Tt ]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:[Zz]|[+-]\d{2}:?\d{2})?)?";

/// Grammar for times of day (`HH:MM`, optionally `:SS` and a fraction).
pub const TIME: &str = r"\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?";

/// Grammar reported for caller-defined types: any run without commas or
/// whitespace.
pub const FALLBACK: &str = r"[^,\s]+";

fn anchored(fragment: &str) -> Regex {
    compile_literal(fragment).unwrap_or_else(|_| unreachable!())
}

pub(crate) static SIGNED_INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| anchored(SIGNED_INTEGER));
pub(crate) static UNSIGNED_INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| anchored(UNSIGNED_INTEGER));
pub(crate) static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| anchored(FLOAT));
pub(crate) static DATE_RE: LazyLock<Regex> = LazyLock::new(|| anchored(DATE));
pub(crate) static DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| anchored(DATE_TIME));
pub(crate) static TIME_RE: LazyLock<Regex> = LazyLock::new(|| anchored(TIME));

/// Compile a caller-provided grammar fragment into an anchored regex.
pub(crate) fn compile_literal(fragment: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{fragment})$"))
}

/// Strip the anchoring added by [`compile_literal`] for display purposes.
pub(crate) fn fragment_of(regex: &Regex) -> &str {
    regex
        .as_str()
        .strip_prefix("^(?:")
        .and_then(|rest| rest.strip_suffix(")$"))
        .unwrap_or_else(|| regex.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", true)]
    #[case("-42", true)]
    #[case("+7", true)]
    #[case("4x", false)]
    #[case("", false)]
    #[case("1.5", false)]
    fn signed_integer_grammar(#[case] literal: &str, #[case] expected: bool) {
        assert_eq!(SIGNED_INTEGER_RE.is_match(literal), expected);
    }

    #[rstest]
    #[case("-1.5", true)]
    #[case("2", true)]
    #[case("1e-3", true)]
    #[case("2.", false)]
    #[case(".5", false)]
    #[case("-.5", false)]
    #[case("nan", false)]
    #[case("inf", false)]
    #[case("1.5.2", false)]
    fn float_grammar(#[case] literal: &str, #[case] expected: bool) {
        assert_eq!(FLOAT_RE.is_match(literal), expected);
    }

    #[rstest]
    #[case("2024-01-01", true)]
    #[case("2024-01-01T10:30", true)]
    #[case("2024-01-01 10:30:15.250", true)]
    #[case("2024-01-01T10:30:00Z", true)]
    #[case("2024-01-01T10:30:00+02:00", true)]
    #[case("2024-1-1", false)]
    #[case("2024-01-01junk", false)]
    fn date_time_grammar(#[case] literal: &str, #[case] expected: bool) {
        assert_eq!(DATE_TIME_RE.is_match(literal), expected);
    }

    #[rstest]
    #[case("9:05", true)]
    #[case("23:59:59.5", true)]
    #[case("23", false)]
    #[case("23:59:59:00", false)]
    fn time_grammar(#[case] literal: &str, #[case] expected: bool) {
        assert_eq!(TIME_RE.is_match(literal), expected);
    }

    #[test]
    fn unsigned_grammar_rejects_signs() {
        assert!(UNSIGNED_INTEGER_RE.is_match("10"));
        assert!(!UNSIGNED_INTEGER_RE.is_match("-10"));
        assert!(DATE_RE.is_match("2024-02-30"));
    }

    #[test]
    fn fragment_round_trips_through_anchoring() {
        let regex = compile_literal(FALLBACK).unwrap_or_else(|err| panic!("fallback: {err}"));
        assert_eq!(fragment_of(&regex), FALLBACK);
        assert!(regex.is_match("A"));
        assert!(!regex.is_match("A B"));
    }
}
