//! Storage capability consumed by the heap algorithms.
//!
//! The heap never owns elements. It coordinates 0-based slots in a sequence
//! the caller owns, and everything it needs from that sequence is captured by
//! [`HeapStorage`]: length, strict ordering between two slots, swapping two
//! slots, appending, and removing the last element. `Vec<T: Ord>` implements
//! the trait out of the box.

/// A mutable ordered sequence the heap reorders by position.
///
/// Implementations must uphold:
///
/// - **Strict ordering**: [`less`](Self::less) is a strict total preorder;
///   `less(i, i)` is `false`. Duplicates are allowed.
/// - **Stable tail ops**: [`push`](Self::push) appends at slot `len()` and
///   [`pop`](Self::pop) removes slot `len() - 1`; no other operation changes
///   the length.
///
/// The heap only ever grows the sequence by one (on insert) or shrinks it by
/// one from the end (on extract/remove), mirroring a classic array-backed
/// heap.
///
/// # Example
///
/// ```
/// use bheap::{BHeap, HeapStorage};
///
/// let mut items: Vec<u32> = vec![3, 1, 2];
/// assert_eq!(items.len(), 3);
/// assert!(HeapStorage::less(&items, 1, 0)); // items[1] < items[0]
///
/// let bh = BHeap::default();
/// bh.fix(&mut items, 0); // rebalance after out-of-band edits
/// ```
pub trait HeapStorage {
    /// Element type held by the sequence.
    type Item;

    /// Current number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the element at slot `i` orders strictly before the
    /// element at slot `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at slots `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Appends an element at slot `len()`.
    fn push(&mut self, item: Self::Item);

    /// Removes and returns the element at slot `len() - 1`, or `None` if
    /// empty.
    fn pop(&mut self) -> Option<Self::Item>;
}

impl<T: Ord> HeapStorage for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}
