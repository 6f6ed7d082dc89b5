//! A paged heap that owns its storage.

use crate::heap::BHeap;

/// A min-heap that owns its backing `Vec`.
///
/// Convenience wrapper around [`BHeap`] + `Vec<T>` for the common case where
/// the element sequence is not shared with anything else. For caller-owned
/// storage (timer wheels reusing an arena, elements shared with other
/// structures) use [`BHeap`] directly with any [`HeapStorage`]
/// implementation.
///
/// [`HeapStorage`]: crate::HeapStorage
///
/// # Example
///
/// ```
/// use bheap::OwnedBHeap;
///
/// let mut heap: OwnedBHeap<u64> = OwnedBHeap::new();
///
/// heap.push(5);
/// heap.push(1);
/// heap.push(3);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// # Priority updates
///
/// ```
/// use bheap::OwnedBHeap;
///
/// let mut heap: OwnedBHeap<i64> = OwnedBHeap::new();
/// for v in [10, 20, 30] {
///     heap.push(v);
/// }
///
/// // Mutate in place, then restore the invariant at that slot.
/// *heap.get_mut(2).unwrap() = 5;
/// heap.fix(2);
/// assert_eq!(heap.peek(), Some(&5));
/// ```
#[derive(Debug, Clone)]
pub struct OwnedBHeap<T: Ord> {
    heap: BHeap,
    items: Vec<T>,
}

impl<T: Ord> Default for OwnedBHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> OwnedBHeap<T> {
    /// Creates an empty heap with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(0)
    }

    /// Creates an empty heap with the given page-size hint.
    ///
    /// See [`PageLayout::new`](crate::PageLayout::new) for the rounding
    /// rules.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            heap: BHeap::new(page_size),
            items: Vec::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the element at slot `i`, if occupied.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.items.get(i)
    }

    /// Returns the element at slot `i` mutably, if occupied.
    ///
    /// Mutating through this reference can break the heap invariant; call
    /// [`fix`](Self::fix) with the same slot afterwards.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.items.get_mut(i)
    }

    /// The elements in storage order (root first, otherwise unsorted).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Inserts a value. Returns its (ephemeral) resting slot.
    #[inline]
    pub fn push(&mut self, value: T) -> usize {
        self.heap.push(&mut self.items, value)
    }

    /// Removes and returns the minimum element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop(&mut self.items)
    }

    /// Removes and returns the element at slot `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[inline]
    pub fn remove(&mut self, i: usize) -> T {
        self.heap.remove(&mut self.items, i)
    }

    /// Restores the invariant after the element at slot `i` was mutated
    /// through [`get_mut`](Self::get_mut).
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[inline]
    pub fn fix(&mut self, i: usize) {
        self.heap.fix(&mut self.items, i)
    }
}

impl<T: Ord> Extend<T> for OwnedBHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OwnedBHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let heap: OwnedBHeap<u32> = OwnedBHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn pops_in_order() {
        let mut heap: OwnedBHeap<u32> = (0..64).rev().collect();
        assert_eq!(heap.len(), 64);

        for want in 0..64 {
            assert_eq!(heap.peek(), Some(&want));
            assert_eq!(heap.pop(), Some(want));
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn remove_by_slot() {
        let mut heap: OwnedBHeap<u32> = [4, 2, 9, 7].into_iter().collect();
        let removed = heap.remove(heap.len() / 2);

        let mut rest = Vec::new();
        while let Some(v) = heap.pop() {
            rest.push(v);
        }
        rest.push(removed);
        rest.sort_unstable();
        assert_eq!(rest, vec![2, 4, 7, 9]);
    }

    #[test]
    fn mutate_then_fix() {
        let mut heap: OwnedBHeap<i32> = [10, 20, 30, 40].into_iter().collect();

        *heap.get_mut(0).unwrap() = 35;
        heap.fix(0);
        assert_eq!(heap.peek(), Some(&20));

        let last = heap.len() - 1;
        *heap.get_mut(last).unwrap() = -5;
        heap.fix(last);
        assert_eq!(heap.pop(), Some(-5));
    }
}
