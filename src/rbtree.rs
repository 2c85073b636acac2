//! Red-black tree algorithms over an external arena.
//!
//! Nodes carry left, right, and parent links, a [`Color`], and a key; the
//! caller holds the root link. Ordering comes from a caller-supplied strict
//! `less` closure, duplicate keys are allowed, and equal keys descend to the
//! right. Every mutating operation returns the possibly-updated root.
//!
//! Lookups run in `O(log n)`; [`validate`] walks the whole tree in `O(n)`
//! and checks the structural and coloring rules without panicking, so it can
//! vet links loaded from reused or untrusted memory before any other
//! operation touches them.
//!
//! # Example
//!
//! ```
//! use intrusive_arena::{rbtree, Color, Link};
//!
//! // (left, right, parent, color, key)
//! let mut nodes: Vec<(u32, u32, u32, Color, u64)> = [30u64, 10, 20]
//!     .iter()
//!     .map(|&key| (0, 0, 0, Color::Red, key))
//!     .collect();
//!
//! let mut root = u32::NULL;
//! for index in 0..nodes.len() {
//!     root = rbtree::insert(&mut nodes, root, u32::from_index(index), |a, b| a < b);
//! }
//!
//! let keys: Vec<u64> = rbtree::iter(&nodes, root)
//!     .map(|link| nodes[link.index()].4)
//!     .collect();
//! assert_eq!(keys, [10, 20, 30]);
//!
//! let twenty = rbtree::find(&nodes, root, &20, |a, b| a < b);
//! root = rbtree::erase(&mut nodes, root, twenty);
//! assert!(rbtree::validate(&nodes, root, |a, b| a < b));
//! ```

use crate::field::{Field, LeftLink, NodeColor, NodeKey, ParentLink, RightLink};
use crate::link::{in_bounds, Link};

/// Node color. A null link reads as [`Color::Black`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Red node.
    Red,
    /// Black node; also the color of the null link.
    Black,
}

/// Node types carrying tree links, a color, and a key.
///
/// Blanket-implemented for every type with the five [`Field`] impls; never
/// implement it directly.
pub trait TreeLinked<L: Link>:
    Field<LeftLink, Value = L>
    + Field<RightLink, Value = L>
    + Field<ParentLink, Value = L>
    + Field<NodeColor, Value = Color>
    + Field<NodeKey>
{
}

impl<L: Link, T> TreeLinked<L> for T where
    T: Field<LeftLink, Value = L>
        + Field<RightLink, Value = L>
        + Field<ParentLink, Value = L>
        + Field<NodeColor, Value = Color>
        + Field<NodeKey>
{
}

/// Key type a node exposes through its [`NodeKey`] field.
pub type KeyOf<T> = <T as Field<NodeKey>>::Value;

#[inline]
fn left_of<L: Link, T: TreeLinked<L>>(nodes: &[T], at: L) -> L {
    <T as Field<LeftLink>>::get(&nodes[at.index()])
}

#[inline]
fn set_left<L: Link, T: TreeLinked<L>>(nodes: &mut [T], at: L, to: L) {
    <T as Field<LeftLink>>::set(&mut nodes[at.index()], to);
}

#[inline]
fn right_of<L: Link, T: TreeLinked<L>>(nodes: &[T], at: L) -> L {
    <T as Field<RightLink>>::get(&nodes[at.index()])
}

#[inline]
fn set_right<L: Link, T: TreeLinked<L>>(nodes: &mut [T], at: L, to: L) {
    <T as Field<RightLink>>::set(&mut nodes[at.index()], to);
}

#[inline]
fn parent_of<L: Link, T: TreeLinked<L>>(nodes: &[T], at: L) -> L {
    <T as Field<ParentLink>>::get(&nodes[at.index()])
}

#[inline]
fn set_parent<L: Link, T: TreeLinked<L>>(nodes: &mut [T], at: L, to: L) {
    <T as Field<ParentLink>>::set(&mut nodes[at.index()], to);
}

#[inline]
fn color_of<L: Link, T: TreeLinked<L>>(nodes: &[T], at: L) -> Color {
    if at.is_null() {
        Color::Black
    } else {
        <T as Field<NodeColor>>::get(&nodes[at.index()])
    }
}

#[inline]
fn set_color<L: Link, T: TreeLinked<L>>(nodes: &mut [T], at: L, to: Color) {
    <T as Field<NodeColor>>::set(&mut nodes[at.index()], to);
}

#[inline]
fn key_of<L: Link, T: TreeLinked<L>>(nodes: &[T], at: L) -> KeyOf<T> {
    <T as Field<NodeKey>>::get(&nodes[at.index()])
}

fn rotate_left<L: Link, T: TreeLinked<L>>(nodes: &mut [T], mut root: L, x: L) -> L {
    let y = right_of(nodes, x);
    let y_left = left_of(nodes, y);
    set_right(nodes, x, y_left);
    if y_left.is_some() {
        set_parent(nodes, y_left, x);
    }
    let up = parent_of(nodes, x);
    set_parent(nodes, y, up);
    if up.is_null() {
        root = y;
    } else if x == left_of(nodes, up) {
        set_left(nodes, up, y);
    } else {
        set_right(nodes, up, y);
    }
    set_left(nodes, y, x);
    set_parent(nodes, x, y);
    root
}

fn rotate_right<L: Link, T: TreeLinked<L>>(nodes: &mut [T], mut root: L, x: L) -> L {
    let y = left_of(nodes, x);
    let y_right = right_of(nodes, y);
    set_left(nodes, x, y_right);
    if y_right.is_some() {
        set_parent(nodes, y_right, x);
    }
    let up = parent_of(nodes, x);
    set_parent(nodes, y, up);
    if up.is_null() {
        root = y;
    } else if x == left_of(nodes, up) {
        set_left(nodes, up, y);
    } else {
        set_right(nodes, up, y);
    }
    set_right(nodes, y, x);
    set_parent(nodes, x, y);
    root
}

fn insert_fixup<L: Link, T: TreeLinked<L>>(nodes: &mut [T], mut root: L, mut z: L) -> L {
    while color_of(nodes, parent_of(nodes, z)) == Color::Red {
        let zp = parent_of(nodes, z);
        let zpp = parent_of(nodes, zp);
        if zp == left_of(nodes, zpp) {
            let uncle = right_of(nodes, zpp);
            if color_of(nodes, uncle) == Color::Red {
                set_color(nodes, zp, Color::Black);
                set_color(nodes, uncle, Color::Black);
                set_color(nodes, zpp, Color::Red);
                z = zpp;
            } else {
                if z == right_of(nodes, zp) {
                    z = zp;
                    root = rotate_left(nodes, root, z);
                }
                let zp = parent_of(nodes, z);
                let zpp = parent_of(nodes, zp);
                set_color(nodes, zp, Color::Black);
                set_color(nodes, zpp, Color::Red);
                root = rotate_right(nodes, root, zpp);
            }
        } else {
            let uncle = left_of(nodes, zpp);
            if color_of(nodes, uncle) == Color::Red {
                set_color(nodes, zp, Color::Black);
                set_color(nodes, uncle, Color::Black);
                set_color(nodes, zpp, Color::Red);
                z = zpp;
            } else {
                if z == left_of(nodes, zp) {
                    z = zp;
                    root = rotate_right(nodes, root, z);
                }
                let zp = parent_of(nodes, z);
                let zpp = parent_of(nodes, zp);
                set_color(nodes, zp, Color::Black);
                set_color(nodes, zpp, Color::Red);
                root = rotate_left(nodes, root, zpp);
            }
        }
    }
    set_color(nodes, root, Color::Black);
    root
}

/// Links `node` into the tree and returns the new root.
///
/// `node`'s links and color are overwritten, so it needs no preparation
/// beyond its key. Keys equal to an existing key land to its right, making
/// the tree a multiset; callers wanting set semantics check with [`find`]
/// first.
///
/// # Panics
///
/// Panics if `node`, or any link reachable from a non-null `root`, is out of
/// range.
pub fn insert<L, T, F>(nodes: &mut [T], mut root: L, node: L, mut less: F) -> L
where
    L: Link,
    T: TreeLinked<L>,
    F: FnMut(&KeyOf<T>, &KeyOf<T>) -> bool,
{
    let mut below = L::NULL;
    let mut probe = root;
    while probe.is_some() {
        below = probe;
        probe = if less(&key_of(nodes, node), &key_of(nodes, probe)) {
            left_of(nodes, probe)
        } else {
            right_of(nodes, probe)
        };
    }
    set_color(nodes, node, Color::Red);
    set_left(nodes, node, L::NULL);
    set_right(nodes, node, L::NULL);
    set_parent(nodes, node, below);
    if below.is_null() {
        root = node;
    } else if less(&key_of(nodes, node), &key_of(nodes, below)) {
        set_left(nodes, below, node);
    } else {
        set_right(nodes, below, node);
    }
    insert_fixup(nodes, root, node)
}

fn delete_fixup<L: Link, T: TreeLinked<L>>(nodes: &mut [T], mut root: L, mut x: L, mut xp: L) -> L {
    while x != root && color_of(nodes, x) == Color::Black {
        if xp.is_null() {
            break;
        }
        if x == left_of(nodes, xp) {
            let mut w = right_of(nodes, xp);
            if color_of(nodes, w) == Color::Red {
                set_color(nodes, w, Color::Black);
                set_color(nodes, xp, Color::Red);
                root = rotate_left(nodes, root, xp);
                w = right_of(nodes, xp);
            }
            if color_of(nodes, left_of(nodes, w)) == Color::Black
                && color_of(nodes, right_of(nodes, w)) == Color::Black
            {
                set_color(nodes, w, Color::Red);
                x = xp;
                xp = parent_of(nodes, x);
            } else {
                if color_of(nodes, right_of(nodes, w)) == Color::Black {
                    set_color(nodes, left_of(nodes, w), Color::Black);
                    set_color(nodes, w, Color::Red);
                    root = rotate_right(nodes, root, w);
                    w = right_of(nodes, xp);
                }
                set_color(nodes, w, color_of(nodes, xp));
                set_color(nodes, xp, Color::Black);
                let w_right = right_of(nodes, w);
                if w_right.is_some() {
                    set_color(nodes, w_right, Color::Black);
                }
                root = rotate_left(nodes, root, xp);
                x = root;
            }
        } else {
            let mut w = left_of(nodes, xp);
            if color_of(nodes, w) == Color::Red {
                set_color(nodes, w, Color::Black);
                set_color(nodes, xp, Color::Red);
                root = rotate_right(nodes, root, xp);
                w = left_of(nodes, xp);
            }
            if color_of(nodes, left_of(nodes, w)) == Color::Black
                && color_of(nodes, right_of(nodes, w)) == Color::Black
            {
                set_color(nodes, w, Color::Red);
                x = xp;
                xp = parent_of(nodes, x);
            } else {
                if color_of(nodes, left_of(nodes, w)) == Color::Black {
                    set_color(nodes, right_of(nodes, w), Color::Black);
                    set_color(nodes, w, Color::Red);
                    root = rotate_left(nodes, root, w);
                    w = left_of(nodes, xp);
                }
                set_color(nodes, w, color_of(nodes, xp));
                set_color(nodes, xp, Color::Black);
                let w_left = left_of(nodes, w);
                if w_left.is_some() {
                    set_color(nodes, w_left, Color::Black);
                }
                root = rotate_right(nodes, root, xp);
                x = root;
            }
        }
    }
    if x.is_some() {
        set_color(nodes, x, Color::Black);
    }
    root
}

/// Unlinks the node at `target` and returns the new root.
///
/// When `target` has two children its in-order successor is spliced out and
/// relinked into `target`'s position, so the successor keeps its slot and
/// only link fields move. `target`'s own links are left stale; clear them if
/// the slot will be validated later.
///
/// # Panics
///
/// Panics if `target` is null or any reachable link is out of range.
pub fn erase<L: Link, T: TreeLinked<L>>(nodes: &mut [T], mut root: L, target: L) -> L {
    let mut removed = target;
    if left_of(nodes, target).is_some() && right_of(nodes, target).is_some() {
        removed = successor(nodes, target);
    }
    let left = left_of(nodes, removed);
    let child = if left.is_some() {
        left
    } else {
        right_of(nodes, removed)
    };
    let up = parent_of(nodes, removed);
    if up.is_null() {
        root = child;
    } else if removed == left_of(nodes, up) {
        set_left(nodes, up, child);
    } else {
        set_right(nodes, up, child);
    }
    if child.is_some() {
        set_parent(nodes, child, up);
    }
    let removed_color = color_of(nodes, removed);
    // After the relink below, `removed` itself stands where `target` was, so
    // a child spliced off `removed` hangs from `removed`, not from `target`.
    let fixup_parent = if up == target { removed } else { up };
    if removed != target {
        root = node_relink(nodes, root, removed, target);
    }
    if removed_color == Color::Black {
        root = delete_fixup(nodes, root, child, fixup_parent);
    }
    root
}

/// Returns the node with the smallest key in `at`'s subtree, or null when
/// `at` is null.
pub fn min<L: Link, T: TreeLinked<L>>(nodes: &[T], mut at: L) -> L {
    while at.is_some() {
        let left = left_of(nodes, at);
        if left.is_null() {
            break;
        }
        at = left;
    }
    at
}

/// Returns the node with the largest key in `at`'s subtree, or null when
/// `at` is null.
pub fn max<L: Link, T: TreeLinked<L>>(nodes: &[T], mut at: L) -> L {
    while at.is_some() {
        let right = right_of(nodes, at);
        if right.is_null() {
            break;
        }
        at = right;
    }
    at
}

/// Returns the in-order successor of the node at `at`, or null from the
/// maximum. `at` must address a node in the tree.
pub fn successor<L: Link, T: TreeLinked<L>>(nodes: &[T], at: L) -> L {
    let right = right_of(nodes, at);
    if right.is_some() {
        return min(nodes, right);
    }
    let mut curr = at;
    let mut up = parent_of(nodes, curr);
    while up.is_some() && curr == right_of(nodes, up) {
        curr = up;
        up = parent_of(nodes, curr);
    }
    up
}

/// Returns the in-order predecessor of the node at `at`, or null from the
/// minimum. `at` must address a node in the tree.
pub fn predecessor<L: Link, T: TreeLinked<L>>(nodes: &[T], at: L) -> L {
    let left = left_of(nodes, at);
    if left.is_some() {
        return max(nodes, left);
    }
    let mut curr = at;
    let mut up = parent_of(nodes, curr);
    while up.is_some() && curr == left_of(nodes, up) {
        curr = up;
        up = parent_of(nodes, curr);
    }
    up
}

/// Returns the first node whose key is not less than `key`, or null.
pub fn lower_bound<L, T, F>(nodes: &[T], root: L, key: &KeyOf<T>, mut less: F) -> L
where
    L: Link,
    T: TreeLinked<L>,
    F: FnMut(&KeyOf<T>, &KeyOf<T>) -> bool,
{
    let mut bound = L::NULL;
    let mut probe = root;
    while probe.is_some() {
        if less(&key_of(nodes, probe), key) {
            probe = right_of(nodes, probe);
        } else {
            bound = probe;
            probe = left_of(nodes, probe);
        }
    }
    bound
}

/// Returns the first node whose key is greater than `key`, or null.
pub fn upper_bound<L, T, F>(nodes: &[T], root: L, key: &KeyOf<T>, mut less: F) -> L
where
    L: Link,
    T: TreeLinked<L>,
    F: FnMut(&KeyOf<T>, &KeyOf<T>) -> bool,
{
    let mut bound = L::NULL;
    let mut probe = root;
    while probe.is_some() {
        if less(key, &key_of(nodes, probe)) {
            bound = probe;
            probe = left_of(nodes, probe);
        } else {
            probe = right_of(nodes, probe);
        }
    }
    bound
}

/// Returns a node whose key compares equal to `key`, or null.
///
/// With duplicate keys this is the first of the run, the same node
/// [`lower_bound`] reports.
pub fn find<L, T, F>(nodes: &[T], root: L, key: &KeyOf<T>, mut less: F) -> L
where
    L: Link,
    T: TreeLinked<L>,
    F: FnMut(&KeyOf<T>, &KeyOf<T>) -> bool,
{
    let bound = lower_bound(nodes, root, key, &mut less);
    if bound.is_some() && !less(key, &key_of(nodes, bound)) {
        bound
    } else {
        L::NULL
    }
}

/// Returns `(lower_bound, upper_bound)` for `key`; the in-order run between
/// them holds every node comparing equal to `key`.
pub fn equal_range<L, T, F>(nodes: &[T], root: L, key: &KeyOf<T>, mut less: F) -> (L, L)
where
    L: Link,
    T: TreeLinked<L>,
    F: FnMut(&KeyOf<T>, &KeyOf<T>) -> bool,
{
    (
        lower_bound(nodes, root, key, &mut less),
        upper_bound(nodes, root, key, &mut less),
    )
}

/// Moves the links and color of the in-tree node `src` onto the out-of-tree
/// node `dst` and returns the possibly-updated root.
///
/// The caller moves the payload (including the key) separately; after the
/// call `dst` occupies `src`'s position and `src`'s own links are stale.
///
/// # Panics
///
/// Panics if `dst` or `src` is null or out of range.
pub fn node_relink<L: Link, T: TreeLinked<L>>(nodes: &mut [T], mut root: L, dst: L, src: L) -> L {
    let src_parent = parent_of(nodes, src);
    let src_left = left_of(nodes, src);
    let src_right = right_of(nodes, src);
    if src_parent.is_some() {
        if src == left_of(nodes, src_parent) {
            set_left(nodes, src_parent, dst);
        } else {
            set_right(nodes, src_parent, dst);
        }
    }
    if src_left.is_some() {
        set_parent(nodes, src_left, dst);
    }
    if src_right.is_some() {
        set_parent(nodes, src_right, dst);
    }
    if root == src {
        root = dst;
    }
    let src_color = color_of(nodes, src);
    set_color(nodes, dst, src_color);
    set_left(nodes, dst, src_left);
    set_right(nodes, dst, src_right);
    set_parent(nodes, dst, src_parent);
    root
}

/// Exchanges the tree positions of the nodes at `a` and `b` and returns the
/// possibly-updated root.
///
/// Only links and colors move; the caller swaps the payloads (including the
/// keys) separately so that each key keeps its position in the ordering.
///
/// # Panics
///
/// Panics if `a` or `b` is null or out of range.
pub fn node_swap<L: Link, T: TreeLinked<L>>(nodes: &mut [T], root: L, a: L, b: L) -> L {
    let a_parent = parent_of(nodes, a);
    let a_left = left_of(nodes, a);
    let a_right = right_of(nodes, a);
    let a_is_left = a_parent.is_some() && a == left_of(nodes, a_parent);
    let b_parent = parent_of(nodes, b);
    let b_left = left_of(nodes, b);
    let b_right = right_of(nodes, b);
    let b_is_left = b_parent.is_some() && b == left_of(nodes, b_parent);

    if b_is_left {
        set_left(nodes, b_parent, a);
    } else if b_parent.is_some() {
        set_right(nodes, b_parent, a);
    }
    if b_right.is_some() {
        set_parent(nodes, b_right, a);
    }
    if b_left.is_some() {
        set_parent(nodes, b_left, a);
    }

    if a_is_left {
        set_left(nodes, a_parent, b);
    } else if a_parent.is_some() {
        set_right(nodes, a_parent, b);
    }
    if a_right.is_some() {
        set_parent(nodes, a_right, b);
    }
    if a_left.is_some() {
        set_parent(nodes, a_left, b);
    }

    let a_color = color_of(nodes, a);
    set_color(nodes, a, color_of(nodes, b));
    set_color(nodes, b, a_color);

    // A link that pointed at the counterpart now points back at the node
    // that moved into its place.
    set_left(nodes, a, if b_left != a { b_left } else { b });
    set_right(nodes, a, if b_right != a { b_right } else { b });
    set_parent(nodes, a, if b_parent != a { b_parent } else { b });

    set_left(nodes, b, if a_left != b { a_left } else { a });
    set_right(nodes, b, if a_right != b { a_right } else { a });
    set_parent(nodes, b, if a_parent != b { a_parent } else { a });

    if a == root {
        b
    } else if b == root {
        a
    } else {
        root
    }
}

/// Compares two trees key by key in order under `equiv`.
///
/// The trees may live in different arenas with different node layouts; only
/// the in-order key sequences take part.
pub fn eq<LA, LB, A, B, F>(
    nodes_a: &[A],
    root_a: LA,
    nodes_b: &[B],
    root_b: LB,
    mut equiv: F,
) -> bool
where
    LA: Link,
    LB: Link,
    A: TreeLinked<LA>,
    B: TreeLinked<LB>,
    F: FnMut(&KeyOf<A>, &KeyOf<B>) -> bool,
{
    let mut a = min(nodes_a, root_a);
    let mut b = min(nodes_b, root_b);
    while a.is_some() && b.is_some() {
        if !equiv(&key_of(nodes_a, a), &key_of(nodes_b, b)) {
            return false;
        }
        a = successor(nodes_a, a);
        b = successor(nodes_b, b);
    }
    a.is_null() && b.is_null()
}

fn check_link<L: Link, T: TreeLinked<L>>(nodes: &[T], curr: L, up: L) -> bool {
    let left = left_of(nodes, curr);
    let right = right_of(nodes, curr);
    parent_of(nodes, curr) == up && (left.is_null() || right.is_null() || left != right)
}

/// Descends to the leftmost node under `curr`, checking each link on the way
/// and counting black nodes into `height`.
fn checked_minimum<L: Link, T: TreeLinked<L>>(
    nodes: &[T],
    mut curr: L,
    mut height: usize,
) -> Option<(L, usize)> {
    loop {
        let left = left_of(nodes, curr);
        if left.is_null() {
            return Some((curr, height));
        }
        if !in_bounds(left, nodes.len()) {
            return None;
        }
        if !check_link(nodes, left, curr) {
            return None;
        }
        if color_of(nodes, left) == Color::Black {
            height += 1;
        }
        curr = left;
    }
}

/// Steps to the in-order successor, checking newly reached links and keeping
/// `height` at the black count of the path from the root.
///
/// The upward walk only crosses parent links that earlier descents already
/// vetted, so it terminates even on malformed input.
fn checked_successor<L: Link, T: TreeLinked<L>>(
    nodes: &[T],
    mut curr: L,
    mut height: usize,
) -> Option<(L, usize)> {
    let right = right_of(nodes, curr);
    if right.is_some() {
        if !in_bounds(right, nodes.len()) {
            return None;
        }
        if !check_link(nodes, right, curr) {
            return None;
        }
        if color_of(nodes, right) == Color::Black {
            height += 1;
        }
        return checked_minimum(nodes, right, height);
    }
    loop {
        if color_of(nodes, curr) == Color::Black {
            height -= 1;
        }
        let up = parent_of(nodes, curr);
        let was_left = up.is_null() || right_of(nodes, up) != curr;
        curr = up;
        if was_left {
            return Some((curr, height));
        }
    }
}

/// Checks the whole tree in one in-order pass and reports whether it is a
/// well-formed red-black tree.
///
/// Verified per node: the link is in range, the parent backlink matches, the
/// children are distinct unless null, no red node has a red parent, keys
/// never decrease in order, and every node with a null child sits at the
/// same black depth. The root must be black with a null parent. A null root
/// is valid. Never panics and never loops, whatever the link fields hold.
pub fn validate<L, T, F>(nodes: &[T], root: L, mut less: F) -> bool
where
    L: Link,
    T: TreeLinked<L>,
    F: FnMut(&KeyOf<T>, &KeyOf<T>) -> bool,
{
    if root.is_null() {
        return true;
    }
    if !in_bounds(root, nodes.len()) {
        return false;
    }
    if !check_link(nodes, root, L::NULL) {
        return false;
    }
    if color_of(nodes, root) != Color::Black {
        return false;
    }
    let (start, black_height) = match checked_minimum(nodes, root, 1) {
        Some(leftmost) => leftmost,
        None => return false,
    };
    let mut curr = start;
    let mut curr_height = black_height;
    while curr.is_some() {
        let prev = curr;
        let left = left_of(nodes, curr);
        let right = right_of(nodes, curr);
        if (left.is_null() || right.is_null()) && curr_height != black_height {
            return false;
        }
        if color_of(nodes, curr) == Color::Red
            && color_of(nodes, parent_of(nodes, curr)) == Color::Red
        {
            return false;
        }
        match checked_successor(nodes, curr, curr_height) {
            Some((next, height)) => {
                curr = next;
                curr_height = height;
            }
            None => return false,
        }
        if curr.is_some() && less(&key_of(nodes, curr), &key_of(nodes, prev)) {
            return false;
        }
    }
    true
}

/// Counts the nodes reachable from `root` by walking the tree in order.
pub fn len<L: Link, T: TreeLinked<L>>(nodes: &[T], root: L) -> usize {
    iter(nodes, root).count()
}

/// Iterates the tree in key order, yielding links. Walk it backwards for
/// descending order.
pub fn iter<L: Link, T: TreeLinked<L>>(nodes: &[T], root: L) -> Iter<'_, T, L> {
    Iter {
        nodes,
        front: min(nodes, root),
        back: max(nodes, root),
    }
}

/// In-order iterator created by [`iter`].
pub struct Iter<'a, T, L> {
    nodes: &'a [T],
    front: L,
    back: L,
}

impl<L: Link, T: TreeLinked<L>> Iterator for Iter<'_, T, L> {
    type Item = L;

    fn next(&mut self) -> Option<L> {
        if self.front.is_null() {
            return None;
        }
        let link = self.front;
        if self.front == self.back {
            self.front = L::NULL;
            self.back = L::NULL;
        } else {
            self.front = successor(self.nodes, self.front);
        }
        Some(link)
    }
}

impl<L: Link, T: TreeLinked<L>> DoubleEndedIterator for Iter<'_, T, L> {
    fn next_back(&mut self) -> Option<L> {
        if self.back.is_null() {
            return None;
        }
        let link = self.back;
        if self.front == self.back {
            self.front = L::NULL;
            self.back = L::NULL;
        } else {
            self.back = predecessor(self.nodes, self.back);
        }
        Some(link)
    }
}
