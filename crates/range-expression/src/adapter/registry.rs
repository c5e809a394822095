//! Process-wide memo of value adapters keyed by type.
//!
//! Built-in adapters are constructed on first use and cached; callers may
//! register adapters for their own types so that [`RangeSet::new`] and
//! `FromStr` work for them too. Entries are only ever inserted whole and never
//! replaced, so concurrent first use converges on a single adapter per type.
//!
//! [`RangeSet::new`]: crate::RangeSet::new

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use super::{ValueAdapter, builtin_adapter};
use crate::errors::{RangeError, unsupported_type};
use crate::range::RangeValue;

type AdapterMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

static ADAPTERS: LazyLock<RwLock<AdapterMap>> = LazyLock::new(|| RwLock::new(HashMap::new()));

/// Look up the adapter for `T`, building the built-in one on first use.
///
/// # Errors
/// Returns [`RangeError::UnsupportedType`] when `T` has neither a built-in
/// nor a registered adapter.
///
/// # Examples
/// ```
/// use range_expression::registry::lookup_adapter;
///
/// let ints = lookup_adapter::<i64>().expect("i64 has a built-in adapter");
/// assert_eq!(ints.successor(&1), Some(2));
/// assert!(lookup_adapter::<String>().is_err());
/// ```
pub fn lookup_adapter<T: RangeValue>() -> Result<ValueAdapter<T>, RangeError> {
    if let Some(adapter) = cached::<T>() {
        return Ok(adapter);
    }
    let built = builtin_adapter::<T>()
        .ok_or_else(|| unsupported_type::<T>("no value parser is registered for this type"))?;
    Ok(insert_if_absent(built).0)
}

/// Register an adapter for `T` unless one is already known.
///
/// Returns `true` when `adapter` was stored. When an adapter already exists,
/// whether registered earlier or memoised as a built-in, it is kept and
/// `false` is returned.
///
/// # Examples
/// ```
/// use range_expression::registry::register_adapter;
/// use range_expression::{RangeSet, ValueAdapter};
///
/// #[derive(Clone, PartialEq, PartialOrd, Debug)]
/// struct Level(u8);
///
/// let adapter = ValueAdapter::new(|text: &str| text.parse().map(Level));
/// assert!(register_adapter(adapter.clone()));
/// assert!(!register_adapter(adapter));
///
/// let set: RangeSet<Level> = "2..4".parse().expect("levels compile");
/// assert!(set.contains(&Level(3)));
/// ```
pub fn register_adapter<T: RangeValue>(adapter: ValueAdapter<T>) -> bool {
    let type_name = adapter.type_name();
    let (_, inserted) = insert_if_absent(adapter);
    if !inserted {
        log::warn!("value adapter for `{type_name}` already registered; keeping the existing one");
    }
    inserted
}

fn cached<T: RangeValue>() -> Option<ValueAdapter<T>> {
    let map = ADAPTERS.read().unwrap_or_else(PoisonError::into_inner);
    map.get(&TypeId::of::<T>())
        .and_then(|entry| entry.downcast_ref::<ValueAdapter<T>>())
        .cloned()
}

fn insert_if_absent<T: RangeValue>(adapter: ValueAdapter<T>) -> (ValueAdapter<T>, bool) {
    let mut map = ADAPTERS.write().unwrap_or_else(PoisonError::into_inner);
    let (entry, inserted) = match map.entry(TypeId::of::<T>()) {
        Entry::Occupied(existing) => (Arc::clone(existing.get()), false),
        Entry::Vacant(slot) => {
            log::debug!("memoised value adapter for `{}`", adapter.type_name());
            (Arc::clone(slot.insert(Arc::new(adapter.clone()))), true)
        }
    };
    drop(map);
    let stored = entry
        .downcast_ref::<ValueAdapter<T>>()
        .cloned()
        .unwrap_or(adapter);
    (stored, inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[derive(Clone, PartialEq, PartialOrd, Debug)]
    struct Ticket(u32);

    #[derive(Clone, PartialEq, PartialOrd, Debug)]
    struct Unregistered;

    #[test]
    fn memoises_builtin_adapters() {
        let first = lookup_adapter::<u16>()
            .unwrap_or_else(|err| panic!("u16 should have a built-in: {err}"));
        assert!(cached::<u16>().is_some());
        let second = lookup_adapter::<u16>()
            .unwrap_or_else(|err| panic!("u16 should stay cached: {err}"));
        assert_eq!(first.literal_pattern(), second.literal_pattern());
    }

    #[test]
    fn unknown_types_are_unsupported() {
        let Err(err) = lookup_adapter::<Unregistered>() else {
            panic!("unregistered type should be rejected");
        };
        assert!(matches!(err, RangeError::UnsupportedType { .. }));
    }

    #[test]
    fn first_registration_wins() {
        let parse_plain = ValueAdapter::new(|text: &str| text.parse().map(Ticket));
        let parse_prefixed = ValueAdapter::new(|text: &str| {
            text.strip_prefix('#')
                .ok_or("missing `#`")
                .and_then(|digits| digits.parse().map(Ticket).map_err(|_| "bad ticket"))
        });
        assert!(register_adapter(parse_plain));
        assert!(!register_adapter(parse_prefixed));

        let adapter = lookup_adapter::<Ticket>()
            .unwrap_or_else(|err| panic!("ticket adapter should be registered: {err}"));
        assert_eq!(adapter.parse("7").ok(), Some(Ticket(7)));
    }

    #[test]
    fn concurrent_first_use_converges() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    lookup_adapter::<i128>().map(|adapter| adapter.literal_pattern().to_owned())
                })
            })
            .collect();
        for handle in handles {
            let pattern = handle
                .join()
                .unwrap_or_else(|_| panic!("lookup thread panicked"))
                .unwrap_or_else(|err| panic!("i128 should have a built-in: {err}"));
            assert_eq!(pattern, crate::literal::SIGNED_INTEGER);
        }
    }
}
