//! Typed access to a node's structural fields.
//!
//! Algorithms never see concrete node types; they reach link, color, and key
//! fields through [`Field`], keyed by zero-sized selector types. A node opts
//! in per field through exactly one of three paths: a hand-written impl (the
//! place to convert a compact stored representation on read), the
//! [`node_fields!`](crate::node_fields) macro over named struct fields, or
//! the positional impls for tuple layouts. Trait coherence guarantees the
//! chosen path is unambiguous at compile time.
//!
//! # Example
//!
//! ```
//! use intrusive_arena::{node_fields, Field, NextLink, PrevLink};
//!
//! struct Order {
//!     price: u64,
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
//! let mut order = Order { price: 99, next: 0, prev: 0 };
//! Field::<NextLink>::set(&mut order, 7);
//! assert_eq!(Field::<NextLink>::get(&order), 7);
//! ```

/// Selector for a node's `next` link.
#[derive(Debug, Clone, Copy)]
pub struct NextLink;

/// Selector for a node's `prev` link.
#[derive(Debug, Clone, Copy)]
pub struct PrevLink;

/// Selector for a tree node's `left` child link.
#[derive(Debug, Clone, Copy)]
pub struct LeftLink;

/// Selector for a tree node's `right` child link.
#[derive(Debug, Clone, Copy)]
pub struct RightLink;

/// Selector for a tree node's `parent` link.
#[derive(Debug, Clone, Copy)]
pub struct ParentLink;

/// Selector for a tree node's color.
#[derive(Debug, Clone, Copy)]
pub struct NodeColor;

/// Selector for a tree node's key.
#[derive(Debug, Clone, Copy)]
pub struct NodeKey;

/// Typed get/set access to one structural field of a node, chosen by the
/// selector type `S`.
///
/// Reads are side-effect-free and return the field by value; if the stored
/// representation differs from the logical type, `get` applies the conversion.
/// Writes replace the field's full value.
pub trait Field<S> {
    /// The field's logical type.
    type Value;

    /// Reads the field.
    fn get(&self) -> Self::Value;

    /// Replaces the field's value.
    fn set(&mut self, value: Self::Value);
}

/// Implements [`Field`] for a struct by forwarding to named fields.
///
/// Each line maps a selector to a field and its logical type; `get` clones
/// the field, `set` overwrites it.
///
/// # Example
///
/// ```
/// use intrusive_arena::{node_fields, Color, Field};
/// use intrusive_arena::{LeftLink, NodeColor, NodeKey, ParentLink, RightLink};
///
/// struct Item {
///     key: u64,
///     left: u16,
///     right: u16,
///     parent: u16,
///     color: Color,
/// }
///
/// node_fields! {
///     Item {
///         LeftLink => left: u16,
///         RightLink => right: u16,
///         ParentLink => parent: u16,
///         NodeColor => color: Color,
///         NodeKey => key: u64,
///     }
/// }
///
/// let item = Item { key: 3, left: 0, right: 0, parent: 0, color: Color::Red };
/// assert_eq!(Field::<NodeKey>::get(&item), 3);
/// ```
#[macro_export]
macro_rules! node_fields {
    ($node:ty { $($sel:ty => $field:ident: $value:ty),+ $(,)? }) => {
        $(
            impl $crate::Field<$sel> for $node {
                type Value = $value;

                #[inline]
                fn get(&self) -> $value {
                    ::core::clone::Clone::clone(&self.$field)
                }

                #[inline]
                fn set(&mut self, value: $value) {
                    self.$field = value;
                }
            }
        )+
    };
}

// Positional layouts: `(next,)` is a singly node, `(next, prev)` a doubly
// node, `(left, right, parent, color, key)` a tree node.

impl<L: Clone> Field<NextLink> for (L,) {
    type Value = L;

    #[inline]
    fn get(&self) -> L {
        self.0.clone()
    }

    #[inline]
    fn set(&mut self, value: L) {
        self.0 = value;
    }
}

impl<A: Clone, B: Clone> Field<NextLink> for (A, B) {
    type Value = A;

    #[inline]
    fn get(&self) -> A {
        self.0.clone()
    }

    #[inline]
    fn set(&mut self, value: A) {
        self.0 = value;
    }
}

impl<A: Clone, B: Clone> Field<PrevLink> for (A, B) {
    type Value = B;

    #[inline]
    fn get(&self) -> B {
        self.1.clone()
    }

    #[inline]
    fn set(&mut self, value: B) {
        self.1 = value;
    }
}

impl<L: Clone, C: Clone, K: Clone> Field<LeftLink> for (L, L, L, C, K) {
    type Value = L;

    #[inline]
    fn get(&self) -> L {
        self.0.clone()
    }

    #[inline]
    fn set(&mut self, value: L) {
        self.0 = value;
    }
}

impl<L: Clone, C: Clone, K: Clone> Field<RightLink> for (L, L, L, C, K) {
    type Value = L;

    #[inline]
    fn get(&self) -> L {
        self.1.clone()
    }

    #[inline]
    fn set(&mut self, value: L) {
        self.1 = value;
    }
}

impl<L: Clone, C: Clone, K: Clone> Field<ParentLink> for (L, L, L, C, K) {
    type Value = L;

    #[inline]
    fn get(&self) -> L {
        self.2.clone()
    }

    #[inline]
    fn set(&mut self, value: L) {
        self.2 = value;
    }
}

impl<L: Clone, C: Clone, K: Clone> Field<NodeColor> for (L, L, L, C, K) {
    type Value = C;

    #[inline]
    fn get(&self) -> C {
        self.3.clone()
    }

    #[inline]
    fn set(&mut self, value: C) {
        self.3 = value;
    }
}

impl<L: Clone, C: Clone, K: Clone> Field<NodeKey> for (L, L, L, C, K) {
    type Value = K;

    #[inline]
    fn get(&self) -> K {
        self.4.clone()
    }

    #[inline]
    fn set(&mut self, value: K) {
        self.4 = value;
    }
}
