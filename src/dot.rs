//! Graphviz export for eyeballing the paged tree during development.
//!
//! Diagnostic only: there is no importer, and correctness never depends on
//! this module. Pipe the output through `dot -Tsvg` to see how pages thread
//! together.

use std::fmt::Display;
use std::io::{self, Write};
use std::mem;

use crate::heap::{slot, BHeap};
use crate::layout::ROOT;
use crate::storage::HeapStorage;

impl BHeap {
    /// Writes a Graphviz digraph of the tree rooted at position 1.
    ///
    /// `label` maps a storage slot to a displayable value; each node is
    /// rendered as `value|position`. Edge colors: black for the lighter (or
    /// only) child, red for the heavier second child, green when the child
    /// pair is the degenerate equal pair below a magical slot.
    ///
    /// # Example
    ///
    /// ```
    /// use bheap::BHeap;
    ///
    /// let bh = BHeap::new(4);
    /// let mut items: Vec<u32> = Vec::new();
    /// for v in [3, 1, 2] {
    ///     bh.push(&mut items, v);
    /// }
    ///
    /// let mut out = Vec::new();
    /// bh.write_dot(&mut out, "example", &items, |i| items[i]).unwrap();
    /// assert!(String::from_utf8(out).unwrap().starts_with("digraph example"));
    /// ```
    pub fn write_dot<W, S, F, D>(
        &self,
        w: &mut W,
        name: &str,
        storage: &S,
        mut label: F,
    ) -> io::Result<()>
    where
        W: Write,
        S: HeapStorage,
        F: FnMut(usize) -> D,
        D: Display,
    {
        writeln!(w, "digraph {name} {{")?;
        writeln!(w, "node [shape=record];")?;
        if !storage.is_empty() {
            self.dot_node(w, storage, ROOT, &mut label)?;
        }
        writeln!(w, "}}")
    }

    fn dot_node<W, S, F, D>(
        &self,
        w: &mut W,
        storage: &S,
        p: u64,
        label: &mut F,
    ) -> io::Result<()>
    where
        W: Write,
        S: HeapStorage,
        F: FnMut(usize) -> D,
        D: Display,
    {
        writeln!(w, "{} [label=\"{}|{}\"];", p, label(slot(p)), p)?;

        let end = storage.len() as u64 + ROOT;
        let (mut v1, mut v2) = self.layout().child(p);
        if v1 >= end {
            return Ok(());
        }

        if v1 != v2 && v2 < end {
            if storage.less(slot(v2), slot(v1)) {
                mem::swap(&mut v1, &mut v2);
            }
            writeln!(w, "{p} -> {v1} [color=black];")?;
            writeln!(w, "{p} -> {v2} [color=red];")?;
            self.dot_node(w, storage, v1, label)?;
            self.dot_node(w, storage, v2, label)
        } else {
            let color = if v1 == v2 { "green" } else { "black" };
            writeln!(w, "{p} -> {v1} [color={color}];")?;
            self.dot_node(w, storage, v1, label)
        }
    }
}
