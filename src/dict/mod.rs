//! Map helpers that never modify their input in place.
//!
//! Each helper takes the map by value and returns a map: either an updated
//! one, or the original untouched when a key is missing. Nothing is ever
//! partially applied.
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::dict::{map_value, swap_values};
//! use std::collections::HashMap;
//!
//! let map = HashMap::from([("k1", 1), ("k2", 2)]);
//! let swapped = swap_values(map, &"k1", &"k2");
//! assert_eq!(swapped, HashMap::from([("k1", 2), ("k2", 1)]));
//!
//! let unchanged = map_value(swapped.clone(), &"missing", |value| value * 10);
//! assert_eq!(unchanged, swapped);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Exchanges the values stored under `first` and `second`.
///
/// Returns `map` unchanged if either key is absent.
pub fn swap_values<K, V, S, Q>(mut map: HashMap<K, V, S>, first: &Q, second: &Q) -> HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    // `get_disjoint_mut` panics on overlapping keys.
    if first != second
        && let [Some(a), Some(b)] = map.get_disjoint_mut([first, second])
    {
        std::mem::swap(a, b);
    }
    map
}

/// Applies `function` to the value stored under `key`.
///
/// Returns `map` unchanged if `key` is absent.
///
/// ```rust
/// use ftoolz::dict::map_value;
/// use std::collections::HashMap;
///
/// let map = HashMap::from([("a", 1)]);
/// assert_eq!(map_value(map, "a", |value| value + 1), HashMap::from([("a", 2)]));
/// ```
pub fn map_value<K, V, S, Q, F>(mut map: HashMap<K, V, S>, key: &Q, function: F) -> HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
    F: FnOnce(V) -> V,
{
    if let Some((stored_key, value)) = map.remove_entry(key) {
        map.insert(stored_key, function(value));
    }
    map
}

/// Fallible variant of [`map_value`].
///
/// # Errors
///
/// Returns the error of `function` unchanged; the map is dropped.
///
/// ```rust
/// use ftoolz::dict::try_map_value;
/// use std::collections::HashMap;
///
/// let map = HashMap::from([("port", "8080".to_string())]);
/// let parsed = try_map_value(map, "port", |value| value.parse::<u16>().map(|port| (port + 1).to_string()));
/// assert_eq!(parsed.unwrap()["port"], "8081");
/// ```
pub fn try_map_value<K, V, S, Q, E, F>(
    mut map: HashMap<K, V, S>,
    key: &Q,
    function: F,
) -> Result<HashMap<K, V, S>, E>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
    F: FnOnce(V) -> Result<V, E>,
{
    if let Some((stored_key, value)) = map.remove_entry(key) {
        map.insert(stored_key, function(value)?);
    }
    Ok(map)
}
