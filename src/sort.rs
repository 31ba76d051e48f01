//! Index arithmetic and sift operations over a slice holding an implicit
//! binary tree, root at 0 and the children of node `i` at `2i+1` and `2i+2`.
//!
//! Every slice handled here respects the max-heap invariant `parent >= child`
//! except where a caller is in the middle of repairing it.

pub(crate) fn parent_of(node: usize) -> usize {
    debug_assert!(node != 0);
    (node - 1) / 2
}

pub(crate) fn left_of(node: usize) -> usize {
    2 * node + 1
}

pub(crate) fn right_of(node: usize) -> usize {
    2 * node + 2
}

/// Move the element at `node` towards the leaves, swapping with the larger
/// child while that child is strictly greater. Bounded by `v.len()`.
pub fn sift_down<T: PartialOrd>(v: &mut [T], node: usize) {
    let n = v.len();
    let mut node = node;
    loop {
        let left = left_of(node);
        let right = right_of(node);
        let mut largest = node;
        if left < n && v[left] > v[largest] {
            largest = left;
        }
        if right < n && v[right] > v[largest] {
            largest = right;
        }
        if largest == node {
            break;
        }
        v.swap(node, largest);
        node = largest;
    }
}

/// Move the element at `node` towards the root while it is strictly greater
/// than its parent. Returns the index it comes to rest at.
pub fn sift_up<T: PartialOrd>(v: &mut [T], node: usize) -> usize {
    let mut node = node;
    while node > 0 {
        let p = parent_of(node);
        if v[node] > v[p] {
            v.swap(node, p);
            node = p;
        } else {
            break;
        }
    }
    node
}

/// True if every node with children is `>=` each of them.
pub fn is_heap<T: PartialOrd>(v: &[T]) -> bool {
    is_heap_from(v, 0)
}

fn is_heap_from<T: PartialOrd>(v: &[T], root: usize) -> bool {
    if root >= v.len() {
        return true;
    }
    let left = left_of(root);
    let right = right_of(root);
    if left < v.len() && v[root] < v[left] {
        return false;
    }
    if right < v.len() && v[root] < v[right] {
        return false;
    }
    is_heap_from(v, left) && is_heap_from(v, right)
}

/// Sort `v` ascending in place.
pub fn sort<T: PartialOrd>(v: &mut [T]) {
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i);
    }

    // The max of the unsorted prefix goes to its end, then the prefix shrinks.
    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0);
    }
}
