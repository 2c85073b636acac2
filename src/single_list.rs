//! Singly linked list algorithms over an external arena.
//!
//! The caller owns the node array and the `head` link; every function here
//! only rewires `next` fields and returns the possibly-updated head. Nodes
//! are never allocated, freed, or moved. Positions not currently reachable
//! from `head` are simply "out of the list" and keep whatever links they
//! last held.
//!
//! # Example
//!
//! ```
//! use intrusive_arena::{node_fields, single_list, Link, NextLink};
//!
//! struct Job {
//!     id: u32,
//!     next: u16,
//! }
//!
//! node_fields! {
//!     Job {
//!         NextLink => next: u16,
//!     }
//! }
//!
//! let mut jobs: Vec<Job> = (0..3).map(|id| Job { id, next: 0 }).collect();
//! let mut head = u16::NULL;
//!
//! // Push slots 0, 1, 2; the list reads back 2 -> 1 -> 0.
//! for index in 0..jobs.len() {
//!     head = single_list::push_front(&mut jobs, head, u16::from_index(index));
//! }
//!
//! let ids: Vec<u32> = single_list::iter(&jobs, head)
//!     .map(|link| jobs[link.index()].id)
//!     .collect();
//! assert_eq!(ids, [2, 1, 0]);
//! assert!(single_list::validate(&jobs, head));
//! ```

use crate::field::{Field, NextLink};
use crate::link::{in_bounds, Link};

/// Node types carrying a `next` link of type `L`.
///
/// Blanket-implemented for every `Field<NextLink>` implementor; never
/// implement it directly.
pub trait SinglyLinked<L: Link>: Field<NextLink, Value = L> {}

impl<L: Link, T> SinglyLinked<L> for T where T: Field<NextLink, Value = L> {}

#[inline]
fn next_of<L: Link, T: SinglyLinked<L>>(nodes: &[T], at: L) -> L {
    <T as Field<NextLink>>::get(&nodes[at.index()])
}

#[inline]
fn set_next<L: Link, T: SinglyLinked<L>>(nodes: &mut [T], at: L, to: L) {
    <T as Field<NextLink>>::set(&mut nodes[at.index()], to);
}

/// Links `node` in front of the list and returns it as the new head.
///
/// An empty list (`head` null) gets `node.next` cleared instead of chained.
///
/// # Panics
///
/// Panics if `node` is null or out of range.
pub fn push_front<L, T>(nodes: &mut [T], head: L, node: L) -> L
where
    L: Link,
    T: SinglyLinked<L>,
{
    set_next(nodes, node, head);
    node
}

/// Splices `node` immediately after `pos`. The head never changes.
///
/// # Panics
///
/// Panics if `pos` or `node` is null or out of range.
pub fn insert_after<L, T>(nodes: &mut [T], pos: L, node: L)
where
    L: Link,
    T: SinglyLinked<L>,
{
    let after = next_of(nodes, pos);
    set_next(nodes, node, after);
    set_next(nodes, pos, node);
}

/// Unlinks the head and returns its successor as the new head.
///
/// The popped node's `next` is left as-is; it is simply no longer reachable.
///
/// # Panics
///
/// Panics if `head` is null or out of range.
pub fn pop_front<L, T>(nodes: &[T], head: L) -> L
where
    L: Link,
    T: SinglyLinked<L>,
{
    next_of(nodes, head)
}

/// Unlinks the node following `pos`, which must exist.
///
/// # Panics
///
/// Panics if `pos` or `pos.next` is null or out of range.
pub fn erase_after<L, T>(nodes: &mut [T], pos: L)
where
    L: Link,
    T: SinglyLinked<L>,
{
    let target = next_of(nodes, pos);
    let after = next_of(nodes, target);
    set_next(nodes, pos, after);
}

/// Exchanges the positions of two listed nodes given their predecessors and
/// returns the possibly-updated head.
///
/// A null predecessor selects the head node. Adjacent nodes are handled by
/// redirecting the inner link to the swap partner; `a_prev == b_prev` is a
/// no-op.
///
/// # Panics
///
/// Panics if a non-null predecessor, or the node it selects, is out of range.
pub fn node_swap<L, T>(nodes: &mut [T], head: L, a_prev: L, b_prev: L) -> L
where
    L: Link,
    T: SinglyLinked<L>,
{
    let a = if a_prev.is_null() {
        head
    } else {
        next_of(nodes, a_prev)
    };
    let b = if b_prev.is_null() {
        head
    } else {
        next_of(nodes, b_prev)
    };
    let a_next = next_of(nodes, a);
    let b_next = next_of(nodes, b);

    if a_prev.is_some() {
        set_next(nodes, a_prev, b);
    }
    if b_prev.is_some() {
        set_next(nodes, b_prev, a);
    }
    set_next(nodes, a, if b_next != a { b_next } else { b });
    set_next(nodes, b, if a_next != b { a_next } else { a });

    if head == a {
        b
    } else if head == b {
        a
    } else {
        head
    }
}

/// Replaces the node following `src_prev` (or the head, when `src_prev` is
/// null) with the out-of-list node `dst`, and returns the possibly-updated
/// head.
///
/// `dst` takes over the replaced node's successor; the replaced node keeps
/// its stale links and is no longer reachable. Used to relocate a node to a
/// different arena slot: copy the payload into `dst`'s slot first, then
/// relink.
///
/// # Panics
///
/// Panics if `dst`, a non-null `src_prev`, or the replaced node is out of
/// range.
pub fn node_relink<L, T>(nodes: &mut [T], head: L, dst: L, src_prev: L) -> L
where
    L: Link,
    T: SinglyLinked<L>,
{
    let src = if src_prev.is_null() {
        head
    } else {
        next_of(nodes, src_prev)
    };
    if src_prev.is_some() {
        set_next(nodes, src_prev, dst);
    }
    let after = next_of(nodes, src);
    set_next(nodes, dst, after);

    if src == head {
        dst
    } else {
        head
    }
}

/// Re-derives the list invariants from raw storage: every link in range and
/// the walk from `head` reaching null without revisiting a position.
///
/// Never panics; corrupt input returns `false`.
pub fn validate<L, T>(nodes: &[T], head: L) -> bool
where
    L: Link,
    T: SinglyLinked<L>,
{
    if head.is_null() {
        return true;
    }
    if !in_bounds(head, nodes.len()) {
        return false;
    }

    let mut seen = 1usize;
    let mut curr = next_of(nodes, head);
    while curr.is_some() {
        // A walk longer than the arena has revisited some position.
        if seen == nodes.len() {
            return false;
        }
        if !in_bounds(curr, nodes.len()) {
            return false;
        }
        seen += 1;
        curr = next_of(nodes, curr);
    }
    true
}

/// Counts the listed nodes by walking from `head`. O(n).
pub fn len<L, T>(nodes: &[T], head: L) -> usize
where
    L: Link,
    T: SinglyLinked<L>,
{
    iter(nodes, head).count()
}

/// Returns a forward iterator over the list, yielding each node's link.
pub fn iter<L, T>(nodes: &[T], head: L) -> Iter<'_, T, L> {
    Iter { nodes, at: head }
}

/// Forward iterator over a singly linked list. See [`iter`].
pub struct Iter<'a, T, L> {
    nodes: &'a [T],
    at: L,
}

impl<'a, T, L> Iterator for Iter<'a, T, L>
where
    L: Link,
    T: SinglyLinked<L>,
{
    type Item = L;

    fn next(&mut self) -> Option<L> {
        if self.at.is_null() {
            return None;
        }
        let curr = self.at;
        self.at = next_of(self.nodes, curr);
        Some(curr)
    }
}
