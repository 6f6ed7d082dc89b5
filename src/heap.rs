//! Sift algorithms and the public queue operations.

use crate::layout::{PageLayout, ROOT};
use crate::storage::HeapStorage;

/// A min-heap with a paged index layout, operating on external storage.
///
/// `BHeap` holds nothing but the page configuration; elements live in a
/// caller-owned [`HeapStorage`] passed to every operation. The same `BHeap`
/// can therefore drive any number of storages, and the same storage can be
/// handed to helpers without the heap retaining a borrow.
///
/// Operations are O(log n) and single-threaded; wrap each call in external
/// mutual exclusion if the storage is shared across threads.
///
/// # Example
///
/// ```
/// use bheap::BHeap;
///
/// let bh = BHeap::new(4);
/// let mut items: Vec<u32> = Vec::new();
///
/// for v in [5, 1, 4, 2, 3] {
///     bh.push(&mut items, v);
/// }
///
/// assert_eq!(bh.pop(&mut items), Some(1));
/// assert_eq!(bh.pop(&mut items), Some(2));
/// assert_eq!(items.len(), 3);
/// ```
///
/// # Priority updates
///
/// Mutate the element in place, then tell the heap about it:
///
/// ```
/// use bheap::BHeap;
///
/// let bh = BHeap::default();
/// let mut items: Vec<u32> = Vec::new();
/// for v in [10, 20, 30] {
///     bh.push(&mut items, v);
/// }
///
/// items[2] = 1; // no longer where a 30 should be
/// bh.fix(&mut items, 2);
/// assert_eq!(bh.pop(&mut items), Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BHeap {
    layout: PageLayout,
}

/// Converts a logical position to its 0-based storage slot.
#[inline]
pub(crate) fn slot(u: u64) -> usize {
    (u - ROOT) as usize
}

impl BHeap {
    /// Creates a heap with the given page-size hint.
    ///
    /// `0` selects the default page size; see [`PageLayout::new`] for the
    /// rounding rules.
    pub fn new(page_size: usize) -> Self {
        Self {
            layout: PageLayout::new(page_size),
        }
    }

    /// The page configuration this heap was built with.
    #[inline]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Inserts a value, restoring the heap invariant.
    ///
    /// Returns the slot the value came to rest in. The slot is only valid
    /// until the next mutating operation; later inserts and removals move
    /// elements around.
    pub fn push<S: HeapStorage>(&self, storage: &mut S, value: S::Item) -> usize {
        storage.push(value);
        let u = self.sift_up(storage, storage.len() as u64 - 1 + ROOT);
        slot(u)
    }

    /// Removes and returns the minimum element.
    ///
    /// Returns `None` if the storage is empty.
    pub fn pop<S: HeapStorage>(&self, storage: &mut S) -> Option<S::Item> {
        if storage.is_empty() {
            return None;
        }

        let last = storage.len() - 1;
        storage.swap(0, last);
        let v = storage.pop();
        self.sift_down(storage, ROOT);
        v
    }

    /// Removes and returns the element at slot `i`, which need not be the
    /// minimum.
    ///
    /// The displaced last element can violate the invariant in either
    /// direction at `i`, so both sift passes run.
    ///
    /// # Panics
    ///
    /// Panics if `i >= storage.len()`.
    pub fn remove<S: HeapStorage>(&self, storage: &mut S, i: usize) -> S::Item {
        let len = storage.len();
        assert!(i < len, "remove slot {i} out of bounds (len {len})");

        let last = len - 1;
        if i == last {
            return storage.pop().expect("non-empty after bounds check");
        }

        storage.swap(i, last);
        let v = storage.pop().expect("non-empty after bounds check");
        let u = i as u64 + ROOT;
        self.sift_down(storage, u);
        self.sift_up(storage, u);
        v
    }

    /// Restores the invariant after the element at slot `i` changed priority
    /// in place, in either direction.
    ///
    /// # Panics
    ///
    /// Panics if `i >= storage.len()`.
    pub fn fix<S: HeapStorage>(&self, storage: &mut S, i: usize) {
        let len = storage.len();
        assert!(i < len, "fix slot {i} out of bounds (len {len})");

        let u = self.sift_up(storage, i as u64 + ROOT);
        self.sift_down(storage, u);
    }

    /// Bubbles the element at logical position `u` toward the root while it
    /// orders before its parent. Returns the resting position.
    ///
    /// Equal elements do not swap, so ties resolve to the incumbent.
    fn sift_up<S: HeapStorage>(&self, storage: &mut S, mut u: u64) -> u64 {
        while u > ROOT {
            let p = self.layout.parent(u);
            if !storage.less(slot(u), slot(p)) {
                break;
            }
            storage.swap(slot(u), slot(p));
            u = p;
        }
        u
    }

    /// Bubbles the element at logical position `u` toward the leaves while a
    /// child orders before it. Returns the resting position.
    ///
    /// Of two distinct children, the right one is preferred only when
    /// strictly less than the left, keeping descent deterministic.
    fn sift_down<S: HeapStorage>(&self, storage: &mut S, mut u: u64) -> u64 {
        let end = storage.len() as u64 + ROOT;

        loop {
            let (left, right) = self.layout.child(u);

            if left >= end {
                return u; // leaf
            }

            let mut v = left;
            if left != right && right < end && storage.less(slot(right), slot(left)) {
                v = right;
            }

            if storage.less(slot(u), slot(v)) {
                return u;
            }

            storage.swap(slot(u), slot(v));
            u = v;
        }
    }
}
