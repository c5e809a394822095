//! Compile textual range expressions into reusable membership tests.
//!
//! A pattern such as `"1..5,7..10,15.."` is split on commas into parts, each
//! of which is a single value, a bounded range `start..end`, or an open range
//! `start..` / `..end`. The pattern is compiled once into a [`RangeSet`] which
//! then answers [`RangeSet::contains`] queries without further parsing.
//!
//! Values are parsed through a [`ValueAdapter`]. Adapters for the integer and
//! floating-point primitives and for `chrono`'s `NaiveDate`, `NaiveDateTime`
//! and `NaiveTime` are built in; other types supply a parser through
//! [`RangeSet::builder`] or [`registry::register_adapter`].
//!
//! ```
//! use range_expression::RangeSet;
//!
//! let set: RangeSet<f64> = "-1.5..1.5,2.0..3.0".parse().expect("pattern compiles");
//! assert!(set.contains(&1.5));
//! assert!(!set.contains(&1.75));
//! assert!(set.contains(&2.0));
//! ```

mod adapter;
mod errors;
mod mode;
mod pattern;
mod range;
#[cfg(feature = "serde")]
mod serialize;
mod set;

pub use adapter::{ValueAdapter, literal, registry};
pub use errors::{LiteralError, PatternErrorInfo, RangeError};
pub use mode::CompatibilityMode;
pub use range::{Range, RangeValue};
pub use set::{RangeSet, RangeSetBuilder};
