//! Test helpers for asserting pattern compilation outcomes.
use super::compile_ranges;
use crate::errors::RangeError;
use crate::mode::CompatibilityMode;
use crate::range::{Range, RangeValue};
use crate::registry::lookup_adapter;

fn compile<T: RangeValue>(
    pattern: &str,
    mode: CompatibilityMode,
) -> Result<Vec<Range<T>>, RangeError> {
    let adapter = lookup_adapter::<T>()?;
    compile_ranges(pattern, &adapter, mode)
}

pub(crate) fn compile_ok<T: RangeValue>(pattern: &str, mode: CompatibilityMode) -> Vec<Range<T>> {
    match compile(pattern, mode) {
        Ok(ranges) => ranges,
        Err(err) => panic!("pattern `{pattern}` should compile: {err}"),
    }
}

pub(crate) fn compile_err<T: RangeValue>(pattern: &str, mode: CompatibilityMode) -> RangeError {
    match compile::<T>(pattern, mode) {
        Ok(_) => panic!("pattern `{pattern}` should fail to compile"),
        Err(err) => err,
    }
}
