//! Keyed collection of iterables into maps.

use std::hash::Hash;

use smallvec::SmallVec;

use crate::hash::{Map, new_map};

/// Ordered indices at which an element occurs.
pub type Positions = SmallVec<[usize; 4]>;

/// Collects `values` into a [`Map`] keyed by `key`.
///
/// Keys are expected to be unique; on collision the later value wins. Keys
/// iterate in the order they were first seen.
///
/// ```rust
/// use ftoolz::itertools::associate;
///
/// let map = associate(|pair: &(char, i32)| pair.0, [('a', 1), ('b', 2), ('a', 3)]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map[&'a'], ('a', 3));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ['a', 'b']);
/// ```
#[inline]
pub fn associate<K, B, I, F>(key: F, values: I) -> Map<K, B>
where
    I: IntoIterator<Item = B>,
    K: Hash + Eq,
    F: FnMut(&B) -> K,
{
    associate_to(key, |value| value, values)
}

/// Collects `values` into a [`Map`] using `key` for keys and `value` for
/// values.
///
/// On key collision the later value wins and the key keeps its first
/// position.
pub fn associate_to<K, B, C, I, F, G>(mut key: F, mut value: G, values: I) -> Map<K, C>
where
    I: IntoIterator<Item = B>,
    K: Hash + Eq,
    F: FnMut(&B) -> K,
    G: FnMut(B) -> C,
{
    let mut map = new_map();
    for element in values {
        map.insert(key(&element), value(element));
    }
    map
}

/// Collects the positions at which every distinct element occurs.
///
/// Keys iterate in order of first occurrence.
///
/// ```rust
/// use ftoolz::itertools::positions;
///
/// let found = positions(['a', 'b', 'a']);
/// assert_eq!(found[&'a'].as_slice(), &[0, 2]);
/// assert_eq!(found[&'b'].as_slice(), &[1]);
/// ```
pub fn positions<H, I>(elements: I) -> Map<H, Positions>
where
    I: IntoIterator<Item = H>,
    H: Hash + Eq,
{
    elements
        .into_iter()
        .enumerate()
        .fold(new_map(), |mut accumulator: Map<H, Positions>, (index, element)| {
            accumulator.entry(element).or_default().push(index);
            accumulator
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_associate_empty() {
        let map = associate(|value: &(char, i32)| value.0, Vec::new());
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_associate_consumes_input() {
        let mut values = vec![('a', 1), ('b', 2), ('c', 3)].into_iter();
        let map = associate(|value: &(char, i32)| value.0, &mut values);

        assert_eq!(map.len(), 3);
        assert_eq!(map[&'b'], ('b', 2));
        assert_eq!(values.next(), None);
    }

    #[rstest]
    fn test_associate_to_last_value_wins() {
        let map = associate_to(|value: &(char, i32)| value.0, |value| value.1, [('a', 1), ('a', 2)]);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&'a'], 2);
    }

    #[rstest]
    fn test_positions_of_tuples() {
        let found = positions([("a", true), ("b", false), ("a", true)]);
        assert_eq!(found[&("a", true)].as_slice(), &[0, 2]);
        assert_eq!(found[&("b", false)].as_slice(), &[1]);
    }

    #[rstest]
    fn test_positions_empty() {
        assert!(positions(Vec::<i32>::new()).is_empty());
    }

    #[rstest]
    fn test_associate_keys_follow_first_occurrence() {
        let map = associate(|value: &(char, i32)| value.0, [('c', 1), ('a', 2), ('b', 3), ('a', 4)]);

        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!['c', 'a', 'b']);
        assert_eq!(map[&'a'], ('a', 4));
    }

    #[rstest]
    fn test_associate_to_entries_follow_first_occurrence() {
        let map = associate_to(
            |word: &&str| word.len(),
            |word| word.to_uppercase(),
            ["kiwi", "fig", "pear", "banana", "plum"],
        );

        let entries: Vec<(usize, String)> = map.into_iter().collect();
        assert_eq!(
            entries,
            vec![(4, "PLUM".to_string()), (3, "FIG".to_string()), (6, "BANANA".to_string())]
        );
    }

    #[rstest]
    fn test_positions_keys_follow_first_occurrence() {
        let found = positions(['z', 'y', 'z', 'x', 'y']);
        let entries: Vec<(char, Vec<usize>)> = found
            .into_iter()
            .map(|(element, indices)| (element, indices.to_vec()))
            .collect();

        assert_eq!(entries, vec![('z', vec![0, 2]), ('y', vec![1, 4]), ('x', vec![3])]);
    }
}
