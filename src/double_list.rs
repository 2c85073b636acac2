//! Doubly linked list algorithms over an external arena.
//!
//! Mirrors [`single_list`](crate::single_list) with bidirectional links and a
//! caller-held `tail` alongside `head`. Operations return whichever boundary
//! handle they may have moved; a first insertion into an empty list returns
//! one link that is both the new head and the new tail, and the caller
//! records it as both.
//!
//! # Example
//!
//! ```
//! use intrusive_arena::{node_fields, double_list, Link, NextLink, PrevLink};
//!
//! struct Order {
//!     qty: u64,
//!     next: u32,
//!     prev: u32,
//! }
//!
//! node_fields! {
//!     Order {
//!         NextLink => next: u32,
//!         PrevLink => prev: u32,
//!     }
//! }
//!
//! let mut orders: Vec<Order> = (1..=3).map(|qty| Order { qty, next: 0, prev: 0 }).collect();
//! let (mut head, mut tail) = (u32::NULL, u32::NULL);
//!
//! for index in 0..orders.len() {
//!     tail = double_list::push_back(&mut orders, tail, u32::from_index(index));
//!     if head.is_null() {
//!         head = tail;
//!     }
//! }
//!
//! let qtys: Vec<u64> = double_list::iter(&orders, head, tail)
//!     .map(|link| orders[link.index()].qty)
//!     .collect();
//! assert_eq!(qtys, [1, 2, 3]);
//! assert!(double_list::validate(&orders, head));
//! ```

use crate::field::{Field, PrevLink};
use crate::link::{in_bounds, Link};
use crate::single_list::SinglyLinked;

/// Node types carrying `next` and `prev` links of type `L`.
///
/// Blanket-implemented for every type with both [`Field`] impls; never
/// implement it directly.
pub trait DoublyLinked<L: Link>: SinglyLinked<L> + Field<PrevLink, Value = L> {}

impl<L: Link, T> DoublyLinked<L> for T where T: SinglyLinked<L> + Field<PrevLink, Value = L> {}

#[inline]
fn next_of<L: Link, T: DoublyLinked<L>>(nodes: &[T], at: L) -> L {
    <T as Field<crate::field::NextLink>>::get(&nodes[at.index()])
}

#[inline]
fn set_next<L: Link, T: DoublyLinked<L>>(nodes: &mut [T], at: L, to: L) {
    <T as Field<crate::field::NextLink>>::set(&mut nodes[at.index()], to);
}

#[inline]
fn prev_of<L: Link, T: DoublyLinked<L>>(nodes: &[T], at: L) -> L {
    <T as Field<PrevLink>>::get(&nodes[at.index()])
}

#[inline]
fn set_prev<L: Link, T: DoublyLinked<L>>(nodes: &mut [T], at: L, to: L) {
    <T as Field<PrevLink>>::set(&mut nodes[at.index()], to);
}

/// Links `node` in front of the list and returns the new head.
///
/// On an empty list both of `node`'s links are cleared and the returned link
/// is also the new tail.
///
/// # Panics
///
/// Panics if `node`, or a non-null `head`, is out of range.
pub fn push_front<L, T>(nodes: &mut [T], head: L, node: L) -> L
where
    L: Link,
    T: DoublyLinked<L>,
{
    if head.is_null() {
        set_next(nodes, node, L::NULL);
        set_prev(nodes, node, L::NULL);
        return node;
    }
    insert_before(nodes, head, head, node)
}

/// Links `node` at the back of the list and returns the new tail.
///
/// On an empty list both of `node`'s links are cleared and the returned link
/// is also the new head.
///
/// # Panics
///
/// Panics if `node`, or a non-null `tail`, is out of range.
pub fn push_back<L, T>(nodes: &mut [T], tail: L, node: L) -> L
where
    L: Link,
    T: DoublyLinked<L>,
{
    if tail.is_null() {
        set_next(nodes, node, L::NULL);
        set_prev(nodes, node, L::NULL);
        return node;
    }
    insert_after(nodes, tail, tail, node)
}

/// Splices `node` before the listed position `pos` and returns the
/// possibly-updated head.
///
/// # Panics
///
/// Panics if `pos` or `node` is null or out of range.
pub fn insert_before<L, T>(nodes: &mut [T], head: L, pos: L, node: L) -> L
where
    L: Link,
    T: DoublyLinked<L>,
{
    set_next(nodes, node, pos);
    let prev = prev_of(nodes, pos);
    set_prev(nodes, node, prev);
    if prev.is_some() {
        set_next(nodes, prev, node);
    }
    set_prev(nodes, pos, node);
    if prev.is_some() {
        head
    } else {
        node
    }
}

/// Splices `node` after the listed position `pos` and returns the
/// possibly-updated tail.
///
/// # Panics
///
/// Panics if `pos` or `node` is null or out of range.
pub fn insert_after<L, T>(nodes: &mut [T], tail: L, pos: L, node: L) -> L
where
    L: Link,
    T: DoublyLinked<L>,
{
    set_prev(nodes, node, pos);
    let next = next_of(nodes, pos);
    set_next(nodes, node, next);
    if next.is_some() {
        set_prev(nodes, next, node);
    }
    set_next(nodes, pos, node);
    if next.is_some() {
        tail
    } else {
        node
    }
}

/// Unlinks the node before `pos`, which must exist, and returns the
/// possibly-updated head.
///
/// # Panics
///
/// Panics if `pos` or `pos.prev` is null or out of range.
pub fn erase_before<L, T>(nodes: &mut [T], head: L, pos: L) -> L
where
    L: Link,
    T: DoublyLinked<L>,
{
    let before = prev_of(nodes, prev_of(nodes, pos));
    if before.is_some() {
        set_next(nodes, before, pos);
    }
    set_prev(nodes, pos, before);
    if before.is_some() {
        head
    } else {
        pos
    }
}

/// Unlinks the node after `pos`, which must exist, and returns the
/// possibly-updated tail.
///
/// # Panics
///
/// Panics if `pos` or `pos.next` is null or out of range.
pub fn erase_after<L, T>(nodes: &mut [T], tail: L, pos: L) -> L
where
    L: Link,
    T: DoublyLinked<L>,
{
    let after = next_of(nodes, next_of(nodes, pos));
    if after.is_some() {
        set_prev(nodes, after, pos);
    }
    set_next(nodes, pos, after);
    if after.is_some() {
        tail
    } else {
        pos
    }
}

/// Unlinks the head and returns its successor as the new head, clearing the
/// successor's `prev`.
///
/// Returns null on a one-element list; the caller then clears its tail too.
/// The popped node's own links are left as-is.
///
/// # Panics
///
/// Panics if `head` is null or out of range.
pub fn pop_front<L, T>(nodes: &mut [T], head: L) -> L
where
    L: Link,
    T: DoublyLinked<L>,
{
    let next = next_of(nodes, head);
    if next.is_some() {
        set_prev(nodes, next, L::NULL);
    }
    next
}

/// Unlinks the tail and returns its predecessor as the new tail, clearing
/// the predecessor's `next`.
///
/// Returns null on a one-element list; the caller then clears its head too.
///
/// # Panics
///
/// Panics if `tail` is null or out of range.
pub fn pop_back<L, T>(nodes: &mut [T], tail: L) -> L
where
    L: Link,
    T: DoublyLinked<L>,
{
    let prev = prev_of(nodes, tail);
    if prev.is_some() {
        set_next(nodes, prev, L::NULL);
    }
    prev
}

/// Exchanges the positions of two listed nodes and returns the resulting
/// `(head, tail)`.
///
/// Adjacent nodes are handled by redirecting the inner links to the swap
/// partner instead of leaving them self-referential; `a == b` is a no-op.
///
/// # Panics
///
/// Panics if `a` or `b` is null or out of range.
pub fn node_swap<L, T>(nodes: &mut [T], head: L, tail: L, a: L, b: L) -> (L, L)
where
    L: Link,
    T: DoublyLinked<L>,
{
    let a_prev = prev_of(nodes, a);
    let a_next = next_of(nodes, a);
    let b_prev = prev_of(nodes, b);
    let b_next = next_of(nodes, b);

    if a_prev.is_some() {
        set_next(nodes, a_prev, b);
    }
    if a_next.is_some() {
        set_prev(nodes, a_next, b);
    }
    if b_prev.is_some() {
        set_next(nodes, b_prev, a);
    }
    if b_next.is_some() {
        set_prev(nodes, b_next, a);
    }

    set_prev(nodes, a, if a != b_prev { b_prev } else { b });
    set_next(nodes, a, if a != b_next { b_next } else { b });
    set_prev(nodes, b, if b != a_prev { a_prev } else { a });
    set_next(nodes, b, if b != a_next { a_next } else { a });

    let head = if head == a {
        b
    } else if head == b {
        a
    } else {
        head
    };
    let tail = if tail == a {
        b
    } else if tail == b {
        a
    } else {
        tail
    };
    (head, tail)
}

/// Replaces the listed node `src` with the out-of-list node `dst` and
/// returns the resulting `(head, tail)`.
///
/// `dst` takes over `src`'s neighbors; `src` keeps its stale links and is no
/// longer reachable. Copy the payload into `dst`'s slot before relinking.
///
/// # Panics
///
/// Panics if `dst` or `src` is null or out of range.
pub fn node_relink<L, T>(nodes: &mut [T], head: L, tail: L, dst: L, src: L) -> (L, L)
where
    L: Link,
    T: DoublyLinked<L>,
{
    let next = next_of(nodes, src);
    let prev = prev_of(nodes, src);
    set_prev(nodes, dst, prev);
    set_next(nodes, dst, next);
    if prev.is_some() {
        set_next(nodes, prev, dst);
    }
    if next.is_some() {
        set_prev(nodes, next, dst);
    }

    let head = if src == head { dst } else { head };
    let tail = if src == tail { dst } else { tail };
    (head, tail)
}

/// Re-derives the list invariants from raw storage: every link in range,
/// `head.prev` null, and every node's recorded `prev` matching its actual
/// predecessor.
///
/// A forward cycle necessarily presents some node with two distinct walk
/// predecessors, so the back-link check also bounds the walk. Never panics;
/// corrupt input returns `false`.
pub fn validate<L, T>(nodes: &[T], head: L) -> bool
where
    L: Link,
    T: DoublyLinked<L>,
{
    if head.is_null() {
        return true;
    }
    if !in_bounds(head, nodes.len()) {
        return false;
    }
    if prev_of(nodes, head).is_some() {
        return false;
    }

    let mut prev = head;
    let mut curr = next_of(nodes, head);
    while curr.is_some() {
        if !in_bounds(curr, nodes.len()) {
            return false;
        }
        if prev_of(nodes, curr) != prev {
            return false;
        }
        prev = curr;
        curr = next_of(nodes, curr);
    }
    true
}

/// Counts the listed nodes by walking from `head`. O(n).
pub fn len<L, T>(nodes: &[T], head: L) -> usize
where
    L: Link,
    T: DoublyLinked<L>,
{
    let mut count = 0;
    let mut curr = head;
    while curr.is_some() {
        count += 1;
        curr = next_of(nodes, curr);
    }
    count
}

/// Returns a double-ended iterator over the list, yielding each node's link.
pub fn iter<L, T>(nodes: &[T], head: L, tail: L) -> Iter<'_, T, L> {
    Iter {
        nodes,
        front: head,
        back: tail,
    }
}

/// Double-ended iterator over a doubly linked list. See [`iter`].
pub struct Iter<'a, T, L> {
    nodes: &'a [T],
    front: L,
    back: L,
}

impl<'a, T, L> Iterator for Iter<'a, T, L>
where
    L: Link,
    T: DoublyLinked<L>,
{
    type Item = L;

    fn next(&mut self) -> Option<L> {
        if self.front.is_null() {
            return None;
        }
        let curr = self.front;
        if curr == self.back {
            self.front = L::NULL;
            self.back = L::NULL;
        } else {
            self.front = next_of(self.nodes, curr);
        }
        Some(curr)
    }
}

impl<'a, T, L> DoubleEndedIterator for Iter<'a, T, L>
where
    L: Link,
    T: DoublyLinked<L>,
{
    fn next_back(&mut self) -> Option<L> {
        if self.back.is_null() {
            return None;
        }
        let curr = self.back;
        if curr == self.front {
            self.front = L::NULL;
            self.back = L::NULL;
        } else {
            self.back = prev_of(self.nodes, curr);
        }
        Some(curr)
    }
}
