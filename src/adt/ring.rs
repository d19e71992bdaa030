//! Fixed-size rotating sequence.

use std::collections::VecDeque;

/// A fixed-size in-memory rotating list of elements.
///
/// Each call to `next` yields the front element and moves it to the back, so
/// a non-empty ring never ends. An empty ring yields nothing.
///
/// # Examples
///
/// ```rust
/// use ftoolz::adt::Ring;
///
/// let mut ring = Ring::new(['a', 'b', 'c']);
/// let taken: String = ring.by_ref().take(5).collect();
/// assert_eq!(taken, "abcab");
/// assert_eq!(ring.state(), vec!['c', 'a', 'b']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring<E> {
    ring: VecDeque<E>,
}

impl<E> Ring<E> {
    /// Creates a ring holding `elements` in order.
    pub fn new<I: IntoIterator<Item = E>>(elements: I) -> Self {
        Self {
            ring: elements.into_iter().collect(),
        }
    }

    /// Returns the number of elements in the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if the ring holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the elements in their current rotation.
    pub fn state(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.ring.iter().cloned().collect()
    }
}

impl<E> Default for Ring<E> {
    fn default() -> Self {
        Self {
            ring: VecDeque::new(),
        }
    }
}

impl<E: Clone> Iterator for Ring<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let front = self.ring.pop_front()?;
        self.ring.push_back(front.clone());
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.ring.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}
