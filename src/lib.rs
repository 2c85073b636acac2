//! Intrusive data-structure algorithms over caller-owned arenas.
//!
//! This crate provides list and tree algorithms for latency-critical systems
//! that keep node state in relocatable memory. The key insight: separate the
//! algorithm from the storage, the links, and the handles.
//!
//! # Design Philosophy
//!
//! Traditional collections own their data and hide their links:
//!
//! ```text
//! BTreeMap<K,V>  - owns values, allocates on insert, pointers internal
//! LinkedList<T>  - owns nodes, heap pointers, not relocatable
//! ```
//!
//! This crate inverts the model:
//!
//! ```text
//! Arena (&mut [T])          - caller-owned slice of nodes
//! Links (integers in T)     - 1-based slot numbers, 0 is null
//! Handles (root/head/tail)  - held by the caller, returned by every mutation
//! single_list/double_list/  - free functions that only rewrite link fields
//!     rbtree
//! ```
//!
//! Benefits:
//! - **Relocatable state**: links are slot numbers, so the arena can be
//!   memcpy'd, mapped into shared memory, or persisted and reloaded
//! - **Zero allocation**: algorithms never allocate; capacity is the arena
//! - **Compact links**: a `u8` link costs one byte and addresses 254 nodes
//! - **In-place compaction**: `node_swap` and `node_relink` move nodes
//!   between slots while linked, so arenas can be defragmented and truncated
//! - **Checkable**: `validate` vets a structure in O(n) without panicking,
//!   even on garbage links, before anything else trusts them
//!
//! # Link Convention
//!
//! A [`Link`] is an unsigned integer. Zero is null, and link `v` addresses
//! slot `v - 1`, so zeroed memory reads as an empty structure with all links
//! null. A link type with maximum value `M` addresses `M - 1` nodes.
//!
//! # Quick Start
//!
//! ```
//! use intrusive_arena::{node_fields, rbtree, Color, Link};
//! use intrusive_arena::{LeftLink, NodeColor, NodeKey, ParentLink, RightLink};
//!
//! struct Order {
//!     price: u64,
//!     qty: u32,
//!     left: u32,
//!     right: u32,
//!     parent: u32,
//!     color: Color,
//! }
//!
//! node_fields! {
//!     Order {
//!         LeftLink => left: u32,
//!         RightLink => right: u32,
//!         ParentLink => parent: u32,
//!         NodeColor => color: Color,
//!         NodeKey => price: u64,
//!     }
//! }
//!
//! let mut book: Vec<Order> = [(100u64, 5u32), (99, 2), (101, 7)]
//!     .iter()
//!     .map(|&(price, qty)| Order {
//!         price,
//!         qty,
//!         left: 0,
//!         right: 0,
//!         parent: 0,
//!         color: Color::Red,
//!     })
//!     .collect();
//!
//! // The caller holds the root; insert returns it possibly updated.
//! let mut bids = u32::NULL;
//! for index in 0..book.len() {
//!     bids = rbtree::insert(&mut book, bids, u32::from_index(index), |a, b| a < b);
//! }
//!
//! let best = rbtree::max(&book, bids);
//! assert_eq!(book[best.index()].price, 101);
//! assert_eq!(book[best.index()].qty, 7);
//! assert!(rbtree::validate(&book, bids, |a, b| a < b));
//! ```
//!
//! # Relocating Nodes
//!
//! `node_relink` moves a linked node into a spare slot without unlinking it,
//! which lets an arena shrink after erasures.
//!
//! ```
//! use intrusive_arena::{double_list, Link};
//!
//! // (next, prev); slots 0..3 hold a three-node list.
//! let mut nodes: Vec<(u16, u16)> = vec![(0, 0); 3];
//! let (mut head, mut tail) = (u16::NULL, u16::NULL);
//! for index in 0..nodes.len() {
//!     tail = double_list::push_back(&mut nodes, tail, u16::from_index(index));
//!     if head.is_null() {
//!         head = tail;
//!     }
//! }
//!
//! // Erase the middle node, move the tail down into the freed slot, and
//! // truncate the arena.
//! tail = double_list::erase_after(&mut nodes, tail, head);
//! let freed = u16::from_index(1);
//! (head, tail) = double_list::node_relink(&mut nodes, head, tail, freed, tail);
//! nodes.truncate(2);
//!
//! assert!(double_list::validate(&nodes, head));
//! assert_eq!(double_list::iter(&nodes, head, tail).count(), 2);
//! ```
//!
//! # Validating Untrusted Links
//!
//! Link fields loaded from a file or shared memory are data, not pointers.
//! Each module's `validate` walks the structure and reports whether every
//! link is in range and every structural rule holds; it never panics and
//! never loops, so it is safe to call before the first real operation.
//!
//! ```
//! use intrusive_arena::single_list;
//!
//! // next-only nodes: 1 -> 2 -> 3.
//! let mut nodes: Vec<(u32,)> = vec![(2,), (3,), (0,)];
//! assert!(single_list::validate(&nodes, 1));
//!
//! nodes[2].0 = 1; // tail now points back at the head
//! assert!(!single_list::validate(&nodes, 1));
//! ```
//!
//! # Field Access
//!
//! Algorithms reach link, color, and key fields through the [`Field`] trait,
//! keyed by selector types such as [`NextLink`] or [`NodeKey`]. Three ways to
//! provide it:
//!
//! - [`node_fields!`] maps selectors to named struct fields
//! - tuples get blanket impls: `(next,)`, `(next, prev)`, and
//!   `(left, right, parent, color, key)`
//! - a hand-written impl can convert on access, e.g. widen a packed `u16`
//!   key to the `u32` the comparator wants
//!
//! # Data Structures
//!
//! | Module | Structure | Key Operations |
//! |--------|-----------|----------------|
//! | [`single_list`] | Singly linked list | O(1) push_front, insert_after, erase_after |
//! | [`double_list`] | Doubly linked list | O(1) push/pop both ends, insert/erase anywhere |
//! | [`rbtree`] | Red-black tree, duplicate keys | O(log n) insert, erase, find, bounds |
//!
//! Every mutating operation returns the handles it may have moved; storing
//! them back is the caller's responsibility. All operations on one structure
//! must use the same arena slice, with nodes in the same slots, that built
//! it.

#![warn(missing_docs)]

pub mod double_list;
pub mod field;
pub mod link;
pub mod rbtree;
pub mod single_list;

#[cfg(test)]
mod proptests;

pub use double_list::DoublyLinked;
pub use field::{
    Field, LeftLink, NextLink, NodeColor, NodeKey, ParentLink, PrevLink, RightLink,
};
pub use link::Link;
pub use rbtree::{Color, KeyOf, TreeLinked};
pub use single_list::SinglyLinked;
