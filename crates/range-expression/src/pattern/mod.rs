//! Range-pattern lexing and compilation helpers.

mod compiler;
mod lexer;
#[cfg(test)]
pub(crate) mod test_support;

use crate::adapter::ValueAdapter;
use crate::errors::RangeError;
use crate::mode::CompatibilityMode;
use crate::range::{Range, RangeValue};

use compiler::RangeCompiler;
use lexer::lex_pattern;

/// Lex `pattern` and compile every part into a [`Range`], preserving order.
///
/// # Errors
/// Returns the first [`RangeError`] raised by the lexer or compiler.
pub(crate) fn compile_ranges<T: RangeValue>(
    pattern: &str,
    adapter: &ValueAdapter<T>,
    mode: CompatibilityMode,
) -> Result<Vec<Range<T>>, RangeError> {
    let parts = lex_pattern(pattern, mode)?;
    let compiler = RangeCompiler::new(pattern, adapter, mode);
    parts.iter().map(|part| compiler.compile(part)).collect()
}
