//! Hasher selection for the maps produced by this crate.
//!
//! Functions such as [`associate`](crate::itertools::associate) and
//! [`positions`](crate::itertools::positions) return a [`Map`], an
//! `indexmap::IndexMap` whose hasher is chosen at compile time:
//!
//! - `fxhash` feature: `rustc_hash::FxBuildHasher`
//! - `ahash` feature: `ahash::RandomState`
//! - neither: `std::collections::hash_map::RandomState`
//!
//! When both features are enabled, `fxhash` wins.
//!
//! Iteration follows first insertion, whatever the hasher. Re-inserting a key
//! replaces its value and keeps its position.

use indexmap::IndexMap;

/// The hash builder used by [`Map`].
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by [`Map`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by [`Map`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// An insertion-ordered map using the crate's [`DefaultHashBuilder`].
pub type Map<K, V> = IndexMap<K, V, DefaultHashBuilder>;

/// Creates an empty [`Map`].
#[inline]
pub fn new_map<K, V>() -> Map<K, V> {
    Map::with_hasher(DefaultHashBuilder::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_map_is_empty() {
        let map: Map<String, i32> = new_map();
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_map_lookup_is_deterministic() {
        let mut map: Map<&str, i32> = new_map();
        map.insert("alpha", 1);
        map.insert("beta", 2);

        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.get("beta"), Some(&2));
        assert_eq!(map.get("gamma"), None);
    }

    #[rstest]
    fn test_map_iterates_in_first_insertion_order() {
        let mut map: Map<&str, i32> = new_map();
        map.insert("gamma", 1);
        map.insert("alpha", 2);
        map.insert("beta", 3);
        map.insert("gamma", 4);

        let entries: Vec<(&str, i32)> = map.into_iter().collect();
        assert_eq!(entries, vec![("gamma", 4), ("alpha", 2), ("beta", 3)]);
    }
}
