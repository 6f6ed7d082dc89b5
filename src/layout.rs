//! Paged index arithmetic for the B-heap layout.
//!
//! A B-heap is a binary heap whose node-to-slot mapping groups subtrees into
//! fixed-size pages, so a parent and its children usually land on the same
//! memory page. Within a page the tree looks like an ordinary binary heap;
//! pages are threaded together through two special rows:
//!
//! - the **first two slots** of every page except the first hold the two
//!   roots-of-page, parented by a node on the *bottom row* of the page that
//!   spawned them;
//! - the **bottom row** of a page has its children on other pages entirely.
//!
//! Everything else is classic `parent = u/2` arithmetic confined to the page
//! by mask operations. Positions are 1-based `u64`s; position 0 is unused so
//! the mask-based computations stay closed under the page arithmetic.

/// Default number of logical positions per page.
pub const DEFAULT_PAGE_SIZE: usize = 512;

/// Smallest supported page size.
///
/// A page needs room for the two magical slots plus the two page roots they
/// parent; below four slots the mapping is not self-consistent.
pub const MIN_PAGE_SIZE: usize = 4;

/// Logical position of the heap root.
///
/// Logical position `u` corresponds to storage slot `u - ROOT`.
pub const ROOT: u64 = 1;

/// Index arithmetic for one paged-heap configuration.
///
/// Holds the three constants derived from the page-size hint and computes
/// parent/child positions under the paged mapping. Carries no other state;
/// it is `Copy` and all methods take `&self`.
///
/// # Example
///
/// ```
/// use bheap::PageLayout;
///
/// let layout = PageLayout::new(505); // rounds up
/// assert_eq!(layout.page_size(), 512);
/// assert_eq!(layout.page_mask(), 0x1ff);
/// assert_eq!(layout.page_shift(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    page_size: u64,
    page_mask: u64,
    page_shift: u32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageLayout {
    /// Creates a layout for the given page-size hint.
    ///
    /// A hint of `0` selects [`DEFAULT_PAGE_SIZE`]. Any other value is
    /// rounded up to the next power of two, with a floor of
    /// [`MIN_PAGE_SIZE`].
    pub fn new(page_size: usize) -> Self {
        let hint = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.max(MIN_PAGE_SIZE)
        };
        let page_size = hint.next_power_of_two() as u64;

        Self {
            page_size,
            page_mask: page_size - 1,
            page_shift: page_size.trailing_zeros(),
        }
    }

    /// Number of logical positions per page.
    #[inline]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// `page_size() - 1`; isolates the in-page offset of a position.
    #[inline]
    pub fn page_mask(&self) -> u64 {
        self.page_mask
    }

    /// `log2(page_size())`.
    #[inline]
    pub fn page_shift(&self) -> u32 {
        self.page_shift
    }

    /// Returns the parent position of `u`.
    ///
    /// `u` must be greater than [`ROOT`]; the root has no parent.
    #[inline]
    pub fn parent(&self, u: u64) -> u64 {
        debug_assert!(u > ROOT, "root has no parent");

        let po = u & self.page_mask;

        if u < self.page_size || po > 3 {
            // Interior of a page (or anywhere on the first page): ordinary
            // binary-heap parent, confined to the page.
            (u & !self.page_mask) | (po >> 1)
        } else if po < 2 {
            // First two slots of a non-first page hang off the bottom row of
            // the page that spawned this one. Recover that page's row index,
            // apply the half-page correction, and land on the bottom row.
            let mut v = (u - self.page_size) >> self.page_shift;
            v += v & !(self.page_mask >> 1);
            v | (self.page_size >> 1)
        } else {
            // Slots 2 and 3 are this page's roots, parented by the two
            // magical slots immediately before them.
            u - 2
        }
    }

    /// Returns the two candidate child positions of `p`.
    ///
    /// The pair is equal when `p` is one of the magical first two slots of a
    /// page, whose single distinguishable child pair starts at `p + 2`; the
    /// caller can use `left == right` as a "no second child" sentinel.
    ///
    /// If the child position would exceed `u64::MAX` the result saturates to
    /// `(u64::MAX, u64::MAX)` rather than wrapping. `u64::MAX` always
    /// compares beyond any occupied position, so the clamp reads as "no such
    /// child" downstream.
    #[inline]
    pub fn child(&self, p: u64) -> (u64, u64) {
        if p > self.page_mask && p & (self.page_mask - 1) == 0 {
            // First two slots of a non-first page: both children collapse
            // onto the pair of page roots right after them.
            let c = p + 2;
            (c, c)
        } else if p & (self.page_size >> 1) != 0 {
            // Bottom row: children are the first two slots of another page.
            let mut page = (p & !self.page_mask) >> 1;
            page |= p & (self.page_mask >> 1);
            page += 1;

            if page > u64::MAX >> self.page_shift {
                // Shifting would wrap past the index width; saturate.
                (u64::MAX, u64::MAX)
            } else {
                let left = page << self.page_shift;
                (left, left + 1)
            }
        } else {
            // The rest is as usual, only inside the page.
            let left = p + (p & self.page_mask);
            (left, left + 1)
        }
    }
}
