//! Ordering elements by an external sequence of keys.

use std::hash::Hash;

use crate::adt::MutIter;
use crate::hash::{Map, new_map};

/// Orders `elements` by the sequence of keys `by`, using each element itself
/// as its key. See [`group_and_order_by`].
///
/// ```rust
/// use ftoolz::itertools::order_by;
///
/// let ordered: Vec<Option<&str>> = order_by(Vec::new(), ["a", "b"]).collect();
/// assert_eq!(ordered, vec![None, None]);
/// ```
#[inline]
pub fn order_by<E, I, B>(elements: I, by: B) -> impl Iterator<Item = Option<E>>
where
    I: IntoIterator<Item = E>,
    B: IntoIterator<Item = E>,
    E: Hash + Eq + Clone,
{
    group_and_order_by(elements, by, E::clone)
}

/// Groups `elements` by `key`, then emits one element per key of `by`.
///
/// Within a group, elements keep their relative input order. The n-th
/// occurrence of a key in `by` yields the n-th element of that key's group;
/// a key whose group is exhausted, or that no element produced, yields
/// `None` in its slot.
///
/// `elements` is consumed completely before this function returns. `by` is
/// read lazily as the result is iterated.
///
/// ```rust
/// use ftoolz::itertools::group_and_order_by;
///
/// let records = [("a", 1), ("a", 2)];
/// let ordered: Vec<Option<(&str, i32)>> =
///     group_and_order_by(records, ["a", "b", "a"], |record| record.0).collect();
///
/// assert_eq!(ordered, vec![Some(("a", 1)), None, Some(("a", 2))]);
/// ```
pub fn group_and_order_by<E, K, I, B, F>(
    elements: I,
    by: B,
    mut key: F,
) -> impl Iterator<Item = Option<E>>
where
    I: IntoIterator<Item = E>,
    B: IntoIterator<Item = K>,
    K: Hash + Eq,
    F: FnMut(&E) -> K,
{
    let mut groups: Map<K, MutIter<E>> = new_map();
    for element in elements {
        groups.entry(key(&element)).or_default().push(element);
    }

    by.into_iter().enumerate().map(move |(slot, wanted)| {
        let found = groups.get_mut(&wanted).and_then(Iterator::next);
        if found.is_none() {
            tracing::trace!(slot, "no element left for key, emitting missing marker");
        }
        found
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Record {
        id: Option<&'static str>,
        data: i32,
    }

    #[rstest]
    fn test_order_by_missing_key() {
        let ordered: Vec<Option<char>> = order_by(['a', 'c'], ['c', 'b', 'a']).collect();
        assert_eq!(ordered, vec![Some('c'), None, Some('a')]);
    }

    #[rstest]
    fn test_order_by_consumes_input_eagerly() {
        let mut elements = vec!['a', 'c'].into_iter();
        let ordered = order_by(&mut elements, ['c', 'b', 'a']);
        drop(ordered);
        assert_eq!(elements.next(), None);
    }

    #[rstest]
    fn test_group_and_order_by_records_without_key() {
        let records = vec![
            Record { id: Some("a"), data: 1 },
            Record { id: None, data: 2 },
        ];
        let ordered: Vec<Option<Record>> =
            group_and_order_by(records, [Some("c"), Some("b"), Some("a")], |record| record.id).collect();

        assert_eq!(
            ordered,
            vec![None, None, Some(Record { id: Some("a"), data: 1 })]
        );
    }

    #[rstest]
    fn test_group_exhausted_by_repeated_key() {
        let ordered: Vec<Option<i32>> = order_by([1], [1, 1]).collect();
        assert_eq!(ordered, vec![Some(1), None]);
    }

    #[rstest]
    fn test_empty_order_yields_nothing() {
        let ordered: Vec<Option<i32>> = order_by([1, 2], Vec::new()).collect();
        assert!(ordered.is_empty());
    }
}
