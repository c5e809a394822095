//! Single compiled range predicates.

use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};

/// Ordered value type usable inside a range pattern.
///
/// Implemented for every type that can be compared, cloned and shared across
/// threads; parsing is provided separately by a
/// [`ValueAdapter`](crate::ValueAdapter).
pub trait RangeValue: PartialOrd + Clone + Send + Sync + 'static {}

impl<T> RangeValue for T where T: PartialOrd + Clone + Send + Sync + 'static {}

/// One compiled predicate of a [`RangeSet`](crate::RangeSet).
///
/// Typed patterns only ever produce inclusive bounds. Legacy patterns store
/// their upper end exclusively, as the successor of the written value.
///
/// # Examples
/// ```
/// use range_expression::Range;
///
/// let range = Range::between(1, 5).expect("1 <= 5");
/// assert!(range.contains(&1));
/// assert!(range.contains(&5));
/// assert!(!range.contains(&6));
/// assert!(Range::between(5, 1).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T: PartialOrd> Range<T> {
    /// Match every value greater than or equal to `start`.
    #[must_use]
    pub const fn at_least(start: T) -> Self {
        Self {
            start: Bound::Included(start),
            end: Bound::Unbounded,
        }
    }

    /// Match every value less than or equal to `end`.
    #[must_use]
    pub const fn at_most(end: T) -> Self {
        Self {
            start: Bound::Unbounded,
            end: Bound::Included(end),
        }
    }

    /// Match every value in `start..=end`.
    ///
    /// Returns `None` when `start` is greater than `end` or the two cannot be
    /// compared.
    #[must_use]
    pub fn between(start: T, end: T) -> Option<Self> {
        is_ordered(&start, &end).then_some(Self {
            start: Bound::Included(start),
            end: Bound::Included(end),
        })
    }

    /// Match every value.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: Bound::Unbounded,
            end: Bound::Unbounded,
        }
    }

    /// Match every value strictly below `end`; `None` means no upper bound.
    pub(crate) fn below(end: Option<T>) -> Self {
        Self {
            start: Bound::Unbounded,
            end: end.map_or(Bound::Unbounded, Bound::Excluded),
        }
    }

    /// Match `start..end`; `None` means no upper bound.
    pub(crate) fn half_open(start: T, end: Option<T>) -> Self {
        Self {
            start: Bound::Included(start),
            end: end.map_or(Bound::Unbounded, Bound::Excluded),
        }
    }

    /// Returns `true` when `value` falls within this range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let above_start = match &self.start {
            Bound::Included(start) => value >= start,
            Bound::Excluded(start) => value > start,
            Bound::Unbounded => true,
        };
        above_start
            && match &self.end {
                Bound::Included(end) => value <= end,
                Bound::Excluded(end) => value < end,
                Bound::Unbounded => true,
            }
    }
}

impl<T> Range<T> {
    /// The lower bound value, if any.
    #[must_use]
    pub fn start(&self) -> Option<&T> {
        bound_value(&self.start)
    }

    /// The upper bound value, if any. Check [`Range::end_bound`] to tell an
    /// inclusive end from a legacy exclusive one.
    #[must_use]
    pub fn end(&self) -> Option<&T> {
        bound_value(&self.end)
    }
}

impl<T> RangeBounds<T> for Range<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}

fn bound_value<T>(bound: &Bound<T>) -> Option<&T> {
    match bound {
        Bound::Included(value) | Bound::Excluded(value) => Some(value),
        Bound::Unbounded => None,
    }
}

fn is_ordered<T: PartialOrd>(start: &T, end: &T) -> bool {
    matches!(
        start.partial_cmp(end),
        Some(Ordering::Less | Ordering::Equal)
    )
}
