//! Iteration with a flag marking the final element.

use std::iter::Peekable;

/// Iterator yielding `(element, is_last)`.
///
/// Created by [`iter_with_final`].
pub struct IterWithFinal<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> Iterator for IterWithFinal<I> {
    type Item = (I::Item, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.next()?;
        let is_last = self.inner.peek().is_none();
        Some((element, is_last))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Pairs every element with a flag that is `true` only for the last one.
///
/// Empty input yields nothing.
///
/// ```rust
/// use ftoolz::itertools::iter_with_final;
///
/// let flagged: Vec<(i32, bool)> = iter_with_final([1, 2, 3]).collect();
/// assert_eq!(flagged, vec![(1, false), (2, false), (3, true)]);
/// ```
#[inline]
pub fn iter_with_final<I: IntoIterator>(elements: I) -> IterWithFinal<I::IntoIter> {
    IterWithFinal {
        inner: elements.into_iter().peekable(),
    }
}

/// Like [`iter_with_final`], additionally yielding the element's index.
///
/// ```rust
/// use ftoolz::itertools::enumerate_with_final;
///
/// let flagged: Vec<(char, bool, usize)> = enumerate_with_final(['a', 'b']).collect();
/// assert_eq!(flagged, vec![('a', false, 0), ('b', true, 1)]);
/// ```
#[inline]
pub fn enumerate_with_final<I: IntoIterator>(
    elements: I,
) -> impl Iterator<Item = (I::Item, bool, usize)> {
    iter_with_final(elements)
        .enumerate()
        .map(|(index, (element, is_last))| (element, is_last, index))
}
