use crate::{double_list, node_fields, rbtree, single_list, Color, Link, NextLink, PrevLink};

use proptest::prelude::*;
use std::collections::{BTreeMap, VecDeque};

type Node = (u32, u32, u32, Color, u64);

fn less(a: &u64, b: &u64) -> bool {
    a < b
}

/// Picks the lowest free slot, favoring reuse near the front of the arena.
fn take_lowest(free: &mut Vec<u32>) -> u32 {
    let mut at = 0;
    for index in 1..free.len() {
        if free[index].index() < free[at].index() {
            at = index;
        }
    }
    free.swap_remove(at)
}

/// Tree arena with free-list slot reuse; the structures under test never
/// manage slots themselves, so every driver carries this bookkeeping.
struct Tree {
    nodes: Vec<Node>,
    root: u32,
    free: Vec<u32>,
}

impl Tree {
    fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            root: u32::NULL,
            free: Vec::new(),
        }
    }

    fn insert(&mut self, key: u64) {
        let node = match self.free.pop() {
            Some(link) => {
                self.nodes[link.index()].4 = key;
                link
            }
            None => {
                self.nodes.push((0, 0, 0, Color::Red, key));
                u32::from_index(self.nodes.len() - 1)
            }
        };
        self.root = rbtree::insert(&mut self.nodes, self.root, node, less);
    }

    fn erase(&mut self, key: u64) -> bool {
        let target = rbtree::find(&self.nodes, self.root, &key, less);
        if target.is_null() {
            return false;
        }
        self.root = rbtree::erase(&mut self.nodes, self.root, target);
        self.free.push(target);
        true
    }

    fn link_at(&self, rank: usize) -> u32 {
        rbtree::iter(&self.nodes, self.root).nth(rank).unwrap()
    }

    fn swap_ranks(&mut self, a_rank: usize, b_rank: usize) {
        let a = self.link_at(a_rank);
        let b = self.link_at(b_rank);
        let a_key = self.nodes[a.index()].4;
        self.nodes[a.index()].4 = self.nodes[b.index()].4;
        self.nodes[b.index()].4 = a_key;
        self.root = rbtree::node_swap(&mut self.nodes, self.root, a, b);
    }

    /// Shrinks the arena by one slot: the last slot is either already free
    /// or its live node moves into the lowest freed slot first.
    fn compact(&mut self) {
        if self.free.is_empty() {
            return;
        }
        let last = u32::from_index(self.nodes.len() - 1);
        if let Some(at) = self.free.iter().position(|&link| link == last) {
            self.free.swap_remove(at);
        } else {
            let dst = take_lowest(&mut self.free);
            self.nodes[dst.index()].4 = self.nodes[last.index()].4;
            self.root = rbtree::node_relink(&mut self.nodes, self.root, dst, last);
        }
        self.nodes.pop();
    }

    fn keys(&self) -> Vec<u64> {
        rbtree::iter(&self.nodes, self.root)
            .map(|link| self.nodes[link.index()].4)
            .collect()
    }
}

#[derive(Clone, Debug)]
enum TreeOp {
    Insert(u64),
    Erase(u64),
    Find(u64),
    Swap(usize, usize),
    Compact,
}

fn tree_ops() -> impl Strategy<Value = Vec<TreeOp>> {
    // Narrow key space so duplicates, hits, and misses all happen often.
    let key = 0u64..=15;
    let op = prop_oneof![
        5 => key.clone().prop_map(TreeOp::Insert),
        3 => key.clone().prop_map(TreeOp::Erase),
        2 => key.prop_map(TreeOp::Find),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| TreeOp::Swap(a, b)),
        1 => Just(TreeOp::Compact),
    ];
    prop::collection::vec(op, 0..=400)
}

struct Item {
    value: u64,
    next: u32,
    prev: u32,
}

node_fields! {
    Item {
        NextLink => next: u32,
        PrevLink => prev: u32,
    }
}

struct Deque {
    nodes: Vec<Item>,
    head: u32,
    tail: u32,
    free: Vec<u32>,
}

impl Deque {
    fn new() -> Self {
        Deque {
            nodes: Vec::new(),
            head: u32::NULL,
            tail: u32::NULL,
            free: Vec::new(),
        }
    }

    fn alloc(&mut self, value: u64) -> u32 {
        match self.free.pop() {
            Some(link) => {
                self.nodes[link.index()].value = value;
                link
            }
            None => {
                self.nodes.push(Item {
                    value,
                    next: 0,
                    prev: 0,
                });
                u32::from_index(self.nodes.len() - 1)
            }
        }
    }

    fn push_front(&mut self, value: u64) {
        let node = self.alloc(value);
        self.head = double_list::push_front(&mut self.nodes, self.head, node);
        if self.tail.is_null() {
            self.tail = self.head;
        }
    }

    fn push_back(&mut self, value: u64) {
        let node = self.alloc(value);
        self.tail = double_list::push_back(&mut self.nodes, self.tail, node);
        if self.head.is_null() {
            self.head = self.tail;
        }
    }

    fn pop_front(&mut self) -> Option<u64> {
        if self.head.is_null() {
            return None;
        }
        let popped = self.head;
        self.head = double_list::pop_front(&mut self.nodes, self.head);
        if self.head.is_null() {
            self.tail = u32::NULL;
        }
        self.free.push(popped);
        Some(self.nodes[popped.index()].value)
    }

    fn pop_back(&mut self) -> Option<u64> {
        if self.tail.is_null() {
            return None;
        }
        let popped = self.tail;
        self.tail = double_list::pop_back(&mut self.nodes, self.tail);
        if self.tail.is_null() {
            self.head = u32::NULL;
        }
        self.free.push(popped);
        Some(self.nodes[popped.index()].value)
    }

    fn relocate(&mut self) {
        if self.free.is_empty() {
            return;
        }
        let last = u32::from_index(self.nodes.len() - 1);
        if let Some(at) = self.free.iter().position(|&link| link == last) {
            self.free.swap_remove(at);
        } else {
            let dst = take_lowest(&mut self.free);
            self.nodes[dst.index()].value = self.nodes[last.index()].value;
            let moved = double_list::node_relink(&mut self.nodes, self.head, self.tail, dst, last);
            self.head = moved.0;
            self.tail = moved.1;
        }
        self.nodes.pop();
    }

    fn values(&self) -> Vec<u64> {
        double_list::iter(&self.nodes, self.head, self.tail)
            .map(|link| self.nodes[link.index()].value)
            .collect()
    }
}

#[derive(Clone, Debug)]
enum DequeOp {
    PushFront(u64),
    PushBack(u64),
    PopFront,
    PopBack,
    Relocate,
}

fn deque_ops() -> impl Strategy<Value = Vec<DequeOp>> {
    let value = 0u64..=255;
    let op = prop_oneof![
        3 => value.clone().prop_map(DequeOp::PushFront),
        3 => value.prop_map(DequeOp::PushBack),
        2 => Just(DequeOp::PopFront),
        2 => Just(DequeOp::PopBack),
        1 => Just(DequeOp::Relocate),
    ];
    prop::collection::vec(op, 0..=400)
}

struct Task {
    value: u64,
    next: u32,
}

node_fields! {
    Task {
        NextLink => next: u32,
    }
}

struct Stack {
    nodes: Vec<Task>,
    head: u32,
    free: Vec<u32>,
}

impl Stack {
    fn new() -> Self {
        Stack {
            nodes: Vec::new(),
            head: u32::NULL,
            free: Vec::new(),
        }
    }

    fn alloc(&mut self, value: u64) -> u32 {
        match self.free.pop() {
            Some(link) => {
                self.nodes[link.index()].value = value;
                link
            }
            None => {
                self.nodes.push(Task { value, next: 0 });
                u32::from_index(self.nodes.len() - 1)
            }
        }
    }

    fn link_at(&self, rank: usize) -> u32 {
        single_list::iter(&self.nodes, self.head).nth(rank).unwrap()
    }

    fn push_front(&mut self, value: u64) {
        let node = self.alloc(value);
        self.head = single_list::push_front(&mut self.nodes, self.head, node);
    }

    fn pop_front(&mut self) -> Option<u64> {
        if self.head.is_null() {
            return None;
        }
        let popped = self.head;
        self.head = single_list::pop_front(&self.nodes, self.head);
        self.free.push(popped);
        Some(self.nodes[popped.index()].value)
    }

    fn insert_after(&mut self, rank: usize, value: u64) {
        let pos = self.link_at(rank);
        let node = self.alloc(value);
        single_list::insert_after(&mut self.nodes, pos, node);
    }

    fn erase_after(&mut self, rank: usize) {
        let pos = self.link_at(rank);
        let erased = self.nodes[pos.index()].next;
        single_list::erase_after(&mut self.nodes, pos);
        self.free.push(erased);
    }

    fn swap_ranks(&mut self, a_rank: usize, b_rank: usize) {
        let a_prev = if a_rank == 0 {
            u32::NULL
        } else {
            self.link_at(a_rank - 1)
        };
        let b_prev = if b_rank == 0 {
            u32::NULL
        } else {
            self.link_at(b_rank - 1)
        };
        self.head = single_list::node_swap(&mut self.nodes, self.head, a_prev, b_prev);
    }

    fn relocate(&mut self) {
        if self.free.is_empty() {
            return;
        }
        let last = u32::from_index(self.nodes.len() - 1);
        if let Some(at) = self.free.iter().position(|&link| link == last) {
            self.free.swap_remove(at);
        } else {
            let mut src_prev = u32::NULL;
            let mut curr = self.head;
            while curr != last {
                src_prev = curr;
                curr = self.nodes[curr.index()].next;
            }
            let dst = take_lowest(&mut self.free);
            self.nodes[dst.index()].value = self.nodes[last.index()].value;
            self.head = single_list::node_relink(&mut self.nodes, self.head, dst, src_prev);
        }
        self.nodes.pop();
    }

    fn values(&self) -> Vec<u64> {
        single_list::iter(&self.nodes, self.head)
            .map(|link| self.nodes[link.index()].value)
            .collect()
    }
}

#[derive(Clone, Debug)]
enum StackOp {
    PushFront(u64),
    PopFront,
    InsertAfter(usize, u64),
    EraseAfter(usize),
    Swap(usize, usize),
    Relocate,
}

fn stack_ops() -> impl Strategy<Value = Vec<StackOp>> {
    let value = 0u64..=255;
    let op = prop_oneof![
        4 => value.clone().prop_map(StackOp::PushFront),
        2 => Just(StackOp::PopFront),
        2 => (any::<usize>(), value).prop_map(|(rank, v)| StackOp::InsertAfter(rank, v)),
        2 => any::<usize>().prop_map(StackOp::EraseAfter),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| StackOp::Swap(a, b)),
        1 => Just(StackOp::Relocate),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn tree_matches_btreemap_multiset(ops in tree_ops()) {
        let mut t = Tree::new();
        let mut m: BTreeMap<u64, usize> = BTreeMap::new();

        for op in ops {
            match op {
                TreeOp::Insert(key) => {
                    t.insert(key);
                    *m.entry(key).or_insert(0) += 1;
                }
                TreeOp::Erase(key) => {
                    let erased = t.erase(key);
                    let expected = m.contains_key(&key);
                    prop_assert_eq!(erased, expected);
                    if expected {
                        let count = m.get_mut(&key).unwrap();
                        *count -= 1;
                        if *count == 0 {
                            m.remove(&key);
                        }
                    }
                }
                TreeOp::Find(key) => {
                    let found = rbtree::find(&t.nodes, t.root, &key, less);
                    prop_assert_eq!(found.is_some(), m.contains_key(&key));
                    if found.is_some() {
                        prop_assert_eq!(t.nodes[found.index()].4, key);
                    }
                }
                TreeOp::Swap(a_seed, b_seed) => {
                    let live = rbtree::len(&t.nodes, t.root);
                    if live > 0 {
                        t.swap_ranks(a_seed % live, b_seed % live);
                    }
                }
                TreeOp::Compact => t.compact(),
            }

            prop_assert!(rbtree::validate(&t.nodes, t.root, less));
            prop_assert_eq!(rbtree::len(&t.nodes, t.root), m.values().sum::<usize>());
        }

        let expected: Vec<u64> = m
            .iter()
            .flat_map(|(&key, &count)| std::iter::repeat(key).take(count))
            .collect();
        prop_assert_eq!(t.keys(), expected);
    }

    #[test]
    fn deque_matches_vecdeque(ops in deque_ops()) {
        let mut d = Deque::new();
        let mut m: VecDeque<u64> = VecDeque::new();

        for op in ops {
            match op {
                DequeOp::PushFront(value) => {
                    d.push_front(value);
                    m.push_front(value);
                }
                DequeOp::PushBack(value) => {
                    d.push_back(value);
                    m.push_back(value);
                }
                DequeOp::PopFront => {
                    prop_assert_eq!(d.pop_front(), m.pop_front());
                }
                DequeOp::PopBack => {
                    prop_assert_eq!(d.pop_back(), m.pop_back());
                }
                DequeOp::Relocate => d.relocate(),
            }

            prop_assert!(double_list::validate(&d.nodes, d.head));
            prop_assert_eq!(d.head.is_null(), d.tail.is_null());
            if d.tail.is_some() {
                prop_assert_eq!(d.nodes[d.head.index()].prev, 0);
                prop_assert_eq!(d.nodes[d.tail.index()].next, 0);
            }
            let expected: Vec<u64> = m.iter().copied().collect();
            prop_assert_eq!(d.values(), expected);
        }

        let backward: Vec<u64> = double_list::iter(&d.nodes, d.head, d.tail)
            .rev()
            .map(|link| d.nodes[link.index()].value)
            .collect();
        let mut expected: Vec<u64> = m.iter().copied().collect();
        expected.reverse();
        prop_assert_eq!(backward, expected);
    }

    #[test]
    fn list_matches_vec(ops in stack_ops()) {
        let mut s = Stack::new();
        let mut m: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                StackOp::PushFront(value) => {
                    s.push_front(value);
                    m.insert(0, value);
                }
                StackOp::PopFront => {
                    let expected = if m.is_empty() { None } else { Some(m.remove(0)) };
                    prop_assert_eq!(s.pop_front(), expected);
                }
                StackOp::InsertAfter(seed, value) => {
                    if !m.is_empty() {
                        let rank = seed % m.len();
                        s.insert_after(rank, value);
                        m.insert(rank + 1, value);
                    }
                }
                StackOp::EraseAfter(seed) => {
                    if m.len() >= 2 {
                        let rank = seed % (m.len() - 1);
                        s.erase_after(rank);
                        m.remove(rank + 1);
                    }
                }
                StackOp::Swap(a_seed, b_seed) => {
                    if !m.is_empty() {
                        let a_rank = a_seed % m.len();
                        let b_rank = b_seed % m.len();
                        s.swap_ranks(a_rank, b_rank);
                        m.swap(a_rank, b_rank);
                    }
                }
                StackOp::Relocate => s.relocate(),
            }

            prop_assert!(single_list::validate(&s.nodes, s.head));
            prop_assert_eq!(s.values(), m.clone());
        }
    }
}

/// Heap's algorithm; calls `visit` once per permutation of `items`.
fn for_each_permutation<T: Clone>(items: &[T], mut visit: impl FnMut(&[T])) {
    fn rec<T>(scratch: &mut [T], len: usize, visit: &mut impl FnMut(&[T])) {
        if len <= 1 {
            visit(scratch);
            return;
        }
        for index in 0..len {
            rec(scratch, len - 1, visit);
            if len % 2 == 0 {
                scratch.swap(index, len - 1);
            } else {
                scratch.swap(0, len - 1);
            }
        }
    }

    let mut scratch = items.to_vec();
    let len = scratch.len();
    rec(&mut scratch, len, &mut visit);
}

#[test]
fn exhaustive_insert_orders_of_a_small_multiset() {
    let keys = [10u64, 20, 20, 30, 30, 30];

    for_each_permutation(&keys, |perm| {
        let mut nodes: Vec<Node> = perm.iter().map(|&key| (0, 0, 0, Color::Red, key)).collect();
        let mut root = u32::NULL;
        for index in 0..nodes.len() {
            root = rbtree::insert(&mut nodes, root, u32::from_index(index), less);
            assert!(rbtree::validate(&nodes, root, less), "order {perm:?}");
        }
        let inorder: Vec<u64> = rbtree::iter(&nodes, root)
            .map(|link| nodes[link.index()].4)
            .collect();
        assert_eq!(inorder, [10, 20, 20, 30, 30, 30], "order {perm:?}");
    });
}

#[test]
fn exhaustive_erase_orders_of_a_small_multiset() {
    let keys = [10u64, 20, 20, 30, 30, 30];

    let mut base: Vec<Node> = keys.iter().map(|&key| (0, 0, 0, Color::Red, key)).collect();
    let mut base_root = u32::NULL;
    for index in 0..base.len() {
        base_root = rbtree::insert(&mut base, base_root, u32::from_index(index), less);
    }

    for_each_permutation(&keys, |perm| {
        let mut nodes = base.clone();
        let mut root = base_root;
        for &key in perm {
            let target = rbtree::find(&nodes, root, &key, less);
            assert!(target.is_some(), "order {perm:?}");
            root = rbtree::erase(&mut nodes, root, target);
            assert!(rbtree::validate(&nodes, root, less), "order {perm:?}");
        }
        assert_eq!(root, u32::NULL);
    });
}
