//! Paged ("B-heap") binary min-heap over external storage.
//!
//! A classic array-backed binary heap scatters a parent and its children
//! across memory: at depth `d` they sit roughly `2^d` slots apart. Once the
//! heap outgrows the cache (millions of timers, expiry entries), nearly
//! every level of a sift touches a different page. The B-heap layout fixes
//! this by renumbering nodes so each subtree of `page_size` nodes occupies
//! one contiguous page; sifts then cross a page boundary only at a few
//! well-defined junctions.
//!
//! The price is the index arithmetic. Within a page everything is the usual
//! `parent = u / 2`, but the first two slots of every page after the first
//! are "magical": they hold the page's pair of roots and attach upward to
//! the bottom row of the page that spawned them. [`PageLayout`] isolates
//! that arithmetic; [`BHeap`] runs sift-up/sift-down on top of it.
//!
//! # Storage model
//!
//! The heap owns no elements. Like the rest of the structures in this
//! family, it coordinates positions in a caller-owned sequence through a
//! small capability trait, [`HeapStorage`] (length, strict-less by slot,
//! swap, append, remove-last). `Vec<T: Ord>` implements it out of the box,
//! and [`OwnedBHeap`] bundles the two when sharing isn't needed.
//!
//! # Quick start
//!
//! ```
//! use bheap::BHeap;
//!
//! // Heap logic and element storage are separate.
//! let bh = BHeap::new(512);
//! let mut timers: Vec<u64> = Vec::new();
//!
//! for deadline in [170_000, 50_000, 90_000] {
//!     bh.push(&mut timers, deadline);
//! }
//!
//! // Pops in deadline order.
//! assert_eq!(bh.pop(&mut timers), Some(50_000));
//!
//! // Reschedule in place, then repair the invariant at that slot.
//! timers[1] = 10_000;
//! bh.fix(&mut timers, 1);
//! assert_eq!(bh.pop(&mut timers), Some(10_000));
//! ```
//!
//! # Page size
//!
//! The one configuration knob. `0` selects the default of 512; other hints
//! round up to a power of two (minimum 4). Match it to the VM page or cache
//! line budget per element: `page_size * size_of::<element>() ≈ page bytes`.
//!
//! # Concurrency
//!
//! Operations are synchronous, run to completion, and take several
//! non-atomic steps against the storage. Share a heap across threads only
//! under external mutual exclusion.

#![warn(missing_docs)]

mod dot;
pub mod heap;
pub mod layout;
pub mod owned;
pub mod storage;

pub use heap::BHeap;
pub use layout::{PageLayout, DEFAULT_PAGE_SIZE, MIN_PAGE_SIZE, ROOT};
pub use owned::OwnedBHeap;
pub use storage::HeapStorage;
