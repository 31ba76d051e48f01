use std::fmt::{self, Display};
use std::io::Write;

use crate::errors::HeapError;
use crate::sort::{self, left_of, right_of};

/// Capacity used by `Heap::new` and `From<Vec<Item>>`.
pub const DEFAULT_CAPACITY: usize = 1000;

/// The result of an operation that may be refused without changing the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Overflow,
    Underflow,
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        *self == Outcome::Done
    }
}

/// A binary max-heap over a buffer whose capacity is fixed at construction.
///
/// The live elements are held in heap order: the root is at index 0 and the
/// children of node `i` are at `2i+1` and `2i+2`. Inserting into a full heap
/// or removing from an empty one is refused and reported as an `Outcome`;
/// the heap is left unchanged.
///
/// Ordering uses `PartialOrd`, but items must behave as a total order.
/// An incomparable value (a NaN among floats) blocks sifting through it, so
/// `verify` still passes while `top` may no longer be the maximum.
///
/// The buffer grows on demand and never past `capacity`, so a large capacity
/// costs nothing until it is filled.
///
/// A `Heap` has no internal locking. Sharing one between threads for mutation
/// needs external synchronisation.
#[derive(Debug)]
pub struct Heap<Item: PartialOrd + Clone> {
    items: Vec<Item>,
    capacity: usize,
}

impl<Item: PartialOrd + Clone> Heap<Item> {
    pub fn new() -> Heap<Item> {
        Heap::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Heap<Item> {
        Heap {
            items: Vec::new(),
            capacity,
        }
    }

    /// Build a heap by inserting each of `items` in turn. Items that do not
    /// fit are reported as overflow and dropped.
    pub fn from_items<I: IntoIterator<Item = Item>>(capacity: usize, items: I) -> Heap<Item> {
        let mut heap = Heap::with_capacity(capacity);
        for item in items {
            heap.insert(item);
        }
        heap
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the live elements in storage (heap) order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn insert(&mut self, item: Item) -> Outcome {
        if self.items.len() == self.capacity {
            log::debug!("heap overflow (capacity {})", self.capacity);
            return Outcome::Overflow;
        }
        self.items.push(item);
        let n = self.items.len();
        sort::sift_up(&mut self.items, n - 1);
        Outcome::Done
    }

    /// Discard the maximum element.
    pub fn remove(&mut self) -> Outcome {
        match self.pop() {
            Some(_) => Outcome::Done,
            None => {
                log::warn!("heap underflow");
                Outcome::Underflow
            }
        }
    }

    /// Extract the maximum element, or `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<Item> {
        let n = self.items.len();
        if n == 0 {
            return None;
        }
        self.items.swap(0, n - 1);
        let res = self.items.pop();
        sort::sift_down(&mut self.items, 0);
        res
    }

    /// Delete the first element equal to `value`, scanning in storage order.
    /// Returns false, leaving the heap alone, if there is no such element.
    ///
    /// "First" here means lowest array index, which is neither the earliest
    /// inserted nor necessarily the shallowest match.
    pub fn remove_node(&mut self, value: &Item) -> bool {
        let Some(i) = self.items.iter().position(|x| x == value) else {
            return false;
        };
        self.items.swap_remove(i);
        if i < self.items.len() {
            // The old last leaf may belong above or below slot i.
            let j = sort::sift_up(&mut self.items, i);
            sort::sift_down(&mut self.items, j);
            log::debug!("removed node at {}, replacement settled at {}", i, j);
        }
        true
    }

    /// A copy of the maximum element.
    pub fn top(&self) -> Result<Item, HeapError> {
        self.items.first().cloned().ok_or(HeapError::Empty)
    }

    pub fn front(&self) -> Option<&Item> {
        self.items.first()
    }

    pub fn verify(&self) -> bool {
        sort::is_heap(&self.items)
    }

    /// A copy of the live elements in heap order.
    pub fn heap_array(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// A copy of the live elements in ascending order. The heap is untouched.
    pub fn heap_sort(&self) -> Vec<Item> {
        let mut res = self.heap_array();
        sort::sort(&mut res);
        res
    }
}

impl<Item: PartialOrd + Clone + Display> Heap<Item> {
    /// Write the tree sideways: right subtree above, left subtree below, each
    /// node on its own line indented by one tab per level of depth.
    pub fn print_tree<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self)
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, root: usize, level: usize) -> fmt::Result {
        if root >= self.items.len() {
            return Ok(());
        }
        self.fmt_tree(f, right_of(root), level + 1)?;
        for _ in 0..level {
            write!(f, "\t")?;
        }
        writeln!(f, "{}", self.items[root])?;
        self.fmt_tree(f, left_of(root), level + 1)
    }
}

impl<Item: PartialOrd + Clone + Display> Display for Heap<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0, 0)
    }
}

impl<Item: PartialOrd + Clone> Default for Heap<Item> {
    fn default() -> Self {
        Heap::new()
    }
}

// Copies go through `insert` so the copy re-establishes its own ordering.
impl<Item: PartialOrd + Clone> Clone for Heap<Item> {
    fn clone(&self) -> Self {
        Heap::from_items(self.capacity, self.items.iter().cloned())
    }

    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<Item: PartialOrd + Clone> From<Vec<Item>> for Heap<Item> {
    fn from(value: Vec<Item>) -> Self {
        Heap::from_items(DEFAULT_CAPACITY, value)
    }
}
