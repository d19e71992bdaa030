//! Appendable, consumable iterator.

use std::collections::VecDeque;
use std::fmt;

/// An iterator that can be both appended to and consumed.
///
/// Elements are yielded front to back in insertion order. All elements are
/// held in memory; constructing from an iterable consumes it fully.
///
/// Typical use is as a per-key accumulator when grouping, where each group is
/// later drained one element at a time.
///
/// # Examples
///
/// ```rust
/// use ftoolz::adt::MutIter;
///
/// let mut queue = MutIter::from_iter([1, 2]);
/// queue.push(3);
/// assert_eq!(queue.state(), vec![1, 2, 3]);
///
/// assert_eq!(queue.next(), Some(1));
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutIter<E> {
    state: VecDeque<E>,
}

impl<E> MutIter<E> {
    /// Creates an empty `MutIter`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: VecDeque::new(),
        }
    }

    /// Appends `element` to the back.
    #[inline]
    pub fn push(&mut self, element: E) {
        self.state.push_back(element);
    }

    /// Appends `element` and returns the accumulator, for use as a fold step.
    ///
    /// ```rust
    /// use ftoolz::adt::MutIter;
    ///
    /// let queue = [4, 2].into_iter().fold(MutIter::new(), MutIter::add);
    /// assert_eq!(queue.state(), vec![4, 2]);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, element: E) -> Self {
        self.push(element);
        self
    }

    /// Returns the number of elements not yet consumed.
    #[inline]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns `true` if every element has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a snapshot of the elements not yet consumed.
    pub fn state(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.state.iter().cloned().collect()
    }
}

impl<E> Default for MutIter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Iterator for MutIter<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.state.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.len(), Some(self.state.len()))
    }
}

impl<E> ExactSizeIterator for MutIter<E> {}

impl<E> FromIterator<E> for MutIter<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iterable: I) -> Self {
        Self {
            state: iterable.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for MutIter<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        self.state.extend(iterable);
    }
}

impl<E: fmt::Debug> fmt::Display for MutIter<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "MutIter")?;
        formatter.debug_list().entries(&self.state).finish()
    }
}
