//! Default adapters for the numeric and `chrono` value types.

use std::any::{Any, TypeId};

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::ValueAdapter;
use super::literal::{
    DATE_RE, DATE_TIME_RE, FLOAT_RE, SIGNED_INTEGER_RE, TIME_RE, UNSIGNED_INTEGER_RE,
};
use crate::errors::LiteralError;
use crate::range::RangeValue;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

macro_rules! integer_adapter {
    ($ty:ty, $grammar:expr) => {
        ValueAdapter::new(|text: &str| text.parse::<$ty>())
            .with_successor(|value: &$ty| value.checked_add(1))
            .with_literal_regex(&$grammar)
    };
}

macro_rules! float_adapter {
    ($ty:ty, $next:path) => {
        ValueAdapter::new(|text: &str| -> Result<$ty, LiteralError> {
            let value = text.parse::<$ty>()?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err("floating-point literal is out of range".into())
            }
        })
        .with_successor($next)
        .with_literal_regex(&FLOAT_RE)
    };
}

#[expect(clippy::float_arithmetic, reason = "successor steps by one whole unit")]
fn next_f32(value: &f32) -> Option<f32> {
    Some(value + 1.0)
}

#[expect(clippy::float_arithmetic, reason = "successor steps by one whole unit")]
fn next_f64(value: &f64) -> Option<f64> {
    Some(value + 1.0)
}

/// Build the default adapter for `T`, or `None` when `T` has no built-in.
///
/// The type is inspected once per call; the registry memoises the result so
/// each type is resolved at most a handful of times per process.
pub(crate) fn builtin_adapter<T: RangeValue>() -> Option<ValueAdapter<T>> {
    let id = TypeId::of::<T>();
    let adapter: Box<dyn Any> = if id == TypeId::of::<i8>() {
        Box::new(integer_adapter!(i8, SIGNED_INTEGER_RE))
    } else if id == TypeId::of::<i16>() {
        Box::new(integer_adapter!(i16, SIGNED_INTEGER_RE))
    } else if id == TypeId::of::<i32>() {
        Box::new(integer_adapter!(i32, SIGNED_INTEGER_RE))
    } else if id == TypeId::of::<i64>() {
        Box::new(integer_adapter!(i64, SIGNED_INTEGER_RE))
    } else if id == TypeId::of::<i128>() {
        Box::new(integer_adapter!(i128, SIGNED_INTEGER_RE))
    } else if id == TypeId::of::<isize>() {
        Box::new(integer_adapter!(isize, SIGNED_INTEGER_RE))
    } else if id == TypeId::of::<u8>() {
        Box::new(integer_adapter!(u8, UNSIGNED_INTEGER_RE))
    } else if id == TypeId::of::<u16>() {
        Box::new(integer_adapter!(u16, UNSIGNED_INTEGER_RE))
    } else if id == TypeId::of::<u32>() {
        Box::new(integer_adapter!(u32, UNSIGNED_INTEGER_RE))
    } else if id == TypeId::of::<u64>() {
        Box::new(integer_adapter!(u64, UNSIGNED_INTEGER_RE))
    } else if id == TypeId::of::<u128>() {
        Box::new(integer_adapter!(u128, UNSIGNED_INTEGER_RE))
    } else if id == TypeId::of::<usize>() {
        Box::new(integer_adapter!(usize, UNSIGNED_INTEGER_RE))
    } else if id == TypeId::of::<f32>() {
        Box::new(float_adapter!(f32, next_f32))
    } else if id == TypeId::of::<f64>() {
        Box::new(float_adapter!(f64, next_f64))
    } else if id == TypeId::of::<NaiveDate>() {
        Box::new(date_adapter())
    } else if id == TypeId::of::<NaiveDateTime>() {
        Box::new(date_time_adapter())
    } else if id == TypeId::of::<NaiveTime>() {
        Box::new(time_adapter())
    } else {
        return None;
    };
    adapter
        .downcast::<ValueAdapter<T>>()
        .ok()
        .map(|adapter| *adapter)
}

fn date_adapter() -> ValueAdapter<NaiveDate> {
    ValueAdapter::new(|text: &str| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
        .with_successor(|date: &NaiveDate| date.checked_add_days(Days::new(1)))
        .with_literal_regex(&DATE_RE)
}

fn date_time_adapter() -> ValueAdapter<NaiveDateTime> {
    ValueAdapter::new(parse_date_time)
        .with_successor(|moment: &NaiveDateTime| moment.checked_add_days(Days::new(1)))
        .with_literal_regex(&DATE_TIME_RE)
}

fn time_adapter() -> ValueAdapter<NaiveTime> {
    ValueAdapter::new(parse_time).with_literal_regex(&TIME_RE)
}

/// Parse a date with an optional time of day and UTC offset. Offsets are
/// normalised to UTC; a bare date means midnight.
pub(crate) fn parse_date_time(text: &str) -> Result<NaiveDateTime, LiteralError> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    let parsed = match text.strip_suffix(['Z', 'z']) {
        Some(utc) => first_match(utc, NAIVE_DATE_TIME_FORMATS, NaiveDateTime::parse_from_str)?,
        None => first_match(
            text,
            OFFSET_DATE_TIME_FORMATS,
            DateTime::<FixedOffset>::parse_from_str,
        )
        .map(|moment| moment.naive_utc())
        .or_else(|_| first_match(text, NAIVE_DATE_TIME_FORMATS, NaiveDateTime::parse_from_str))?,
    };
    reject_leap_second(parsed.time())?;
    Ok(parsed)
}

/// Parse a time of day, rejecting leap seconds.
pub(crate) fn parse_time(text: &str) -> Result<NaiveTime, LiteralError> {
    let time = first_match(text, TIME_FORMATS, NaiveTime::parse_from_str)?;
    reject_leap_second(time)?;
    Ok(time)
}

fn first_match<V>(
    text: &str,
    formats: &[&str],
    parse: fn(&str, &str) -> chrono::ParseResult<V>,
) -> Result<V, LiteralError> {
    let mut last = None;
    for format in formats {
        match parse(text, format) {
            Ok(value) => return Ok(value),
            Err(err) => last = Some(err),
        }
    }
    Err(last.map_or_else(
        || LiteralError::from("no candidate formats"),
        |err| Box::new(err) as LiteralError,
    ))
}

fn reject_leap_second(time: NaiveTime) -> Result<(), LiteralError> {
    if time.nanosecond() >= 1_000_000_000 {
        return Err("second must be less than 60".into());
    }
    Ok(())
}
