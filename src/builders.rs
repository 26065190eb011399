use std::{any::Any, collections::HashMap};

use tracing::Level;

/// Payload free value. Only the presence of its key carries information.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Marker;

/// A value that may hold anything at runtime. The builders always leave it empty.
pub type Dynamic = Option<Box<dyn Any>>;

/// Builds a map pre-sized to `capacity` and binds every key in `1..=entries` to `value()`.
///
/// A negative `entries` inserts nothing. A negative `capacity`, or one the map cannot
/// reserve, is treated as no hint. The capacity is only a hint, the map grows past it as needed.
#[tracing::instrument(level = "trace", skip(value))]
pub fn build_map<V>(
    entries: i64,
    capacity: i64,
    mut value: impl FnMut() -> V,
) -> HashMap<i64, V> {
    let mut m: HashMap<i64, V> = HashMap::new();
    if let Err(e) = m.try_reserve(usize::try_from(capacity).unwrap_or(0)) {
        tracing::event!(Level::TRACE, name = "Capacity hint dropped", "error" = %e);
    }
    for i in 1..=entries {
        m.insert(i, value());
    }
    tracing::event!(Level::TRACE, len = m.len(), capacity = m.capacity());
    m
}

pub fn map_with_marker(entries: i64, capacity: i64) -> HashMap<i64, Marker> {
    build_map(entries, capacity, || Marker)
}

pub fn map_with_dynamic(entries: i64, capacity: i64) -> HashMap<i64, Dynamic> {
    build_map(entries, capacity, || None)
}

#[cfg(test)]
mod tests {
    use crate::builders::*;
    use rand::Rng;
    use std::collections::HashSet;

    fn keys<V>(m: &HashMap<i64, V>) -> HashSet<i64> {
        m.keys().copied().collect()
    }

    fn expected(entries: i64) -> HashSet<i64> {
        (1..=entries).collect()
    }

    #[test]
    fn marker_five() {
        let m = map_with_marker(5, 0);
        assert_eq!(m.len(), 5);
        assert_eq!(keys(&m), HashSet::from([1, 2, 3, 4, 5]));
        assert!(m.values().all(|v| *v == Marker));
    }

    #[test]
    fn dynamic_empty_with_hint() {
        let m = map_with_dynamic(0, 10);
        assert!(m.is_empty());
    }

    #[test]
    fn marker_hundred_presized() {
        let m = map_with_marker(100, 128);
        assert_eq!(m.len(), 100);
        assert_eq!(keys(&m), expected(100));
    }

    #[test]
    fn dynamic_values_are_empty() {
        let m = map_with_dynamic(16, 100);
        assert_eq!(keys(&m), expected(16));
        assert!(m.values().all(|v| v.is_none()));
    }

    #[test]
    fn grows_past_hint() {
        let m = map_with_dynamic(100, 0);
        assert_eq!(m.len(), 100);
        assert!(m.capacity() >= 100);
    }

    #[test]
    fn honours_hint() {
        assert!(map_with_marker(0, 128).capacity() >= 128);
        assert!(map_with_dynamic(16, 32).capacity() >= 32);
    }

    #[test]
    fn negative_entries_is_empty() {
        assert!(map_with_marker(-3, 0).is_empty());
        assert!(map_with_dynamic(-1, 16).is_empty());
    }

    #[test]
    fn negative_capacity_is_ignored() {
        let m = map_with_marker(9, -5);
        assert_eq!(keys(&m), expected(9));
    }

    #[test]
    fn repeated_builds_are_independent() {
        let mut first = map_with_marker(8, 0);
        let second = map_with_marker(8, 0);
        assert_eq!(keys(&first), keys(&second));

        first.remove(&1);
        assert_eq!(first.len(), 7);
        assert_eq!(second.len(), 8);
        assert_eq!(keys(&map_with_marker(8, 0)), expected(8));

        let mut first = map_with_dynamic(16, 16);
        let second = map_with_dynamic(16, 16);
        assert_eq!(keys(&first), keys(&second));

        first.insert(1, Some(Box::new(7u8) as Box<dyn Any>));
        assert!(second.values().all(|v| v.is_none()));
        assert_eq!(keys(&map_with_dynamic(16, 16)), expected(16));
    }

    #[test]
    fn huge_hint_is_dropped() {
        assert_eq!(keys(&map_with_marker(3, i64::MAX)), expected(3));
        assert_eq!(keys(&map_with_dynamic(3, i64::MAX)), expected(3));
    }

    #[test]
    fn random_key_sets() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let entries = rng.gen_range(0..300);
            let capacity = rng.gen_range(0..300);
            assert_eq!(keys(&map_with_marker(entries, capacity)), expected(entries));
            assert_eq!(keys(&map_with_dynamic(entries, capacity)), expected(entries));
        }
    }
}
