use crate::error::HeapError;

/// A minimum-oriented priority queue backed by a binary heap.
///
/// Elements are stored in a `Vec<E>` encoding a complete binary tree: the
/// element at index `i` has its children at `2i + 1` and `2i + 2` and its
/// parent at `(i - 1) / 2`. The heap invariant — every parent is `<=` both of
/// its children — guarantees the minimum always sits at index 0, so `peek`
/// is O(1) and `enqueue`/`dequeue` are O(log n).
///
/// Equal elements are allowed; their relative dequeue order is unspecified.
#[derive(Debug)]
pub struct MinHeap<E> {
    items: Vec<E>,
}

impl<E: Ord> MinHeap<E> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        MinHeap { items: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` elements before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements currently in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Removes every element, leaving the queue empty and reusable.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the minimum element without removing it, or `None` when the
    /// queue is empty. Repeated calls without intervening mutation return
    /// the same element.
    pub fn peek(&self) -> Option<&E> {
        self.items.first()
    }

    /// Diagnostic accessor: the raw element at heap position `position`,
    /// counted from 1 (the root/minimum is position 1). Position 0 is the
    /// classic textbook sentinel slot and holds nothing; it and any
    /// out-of-range position yield `None`.
    ///
    /// Beyond the root, no ordering is promised other than the heap
    /// invariant itself. Intended for inspection and visualization, not for
    /// traversal.
    pub fn get(&self, position: usize) -> Option<&E> {
        position.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Adds an element to the queue. Never fails.
    pub fn enqueue(&mut self, item: E) {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the minimum element.
    ///
    /// Fails with [`HeapError::Empty`] when the queue has no elements.
    pub fn dequeue(&mut self) -> Result<E, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Empty);
        }

        // Move the last leaf into the root slot, then repair downward.
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left_child(i: usize) -> usize {
        2 * i + 1
    }

    fn right_child(i: usize) -> usize {
        2 * i + 2
    }

    /// Walks the element at `i` up toward the root until its parent is no
    /// longer greater. After an append, the new leaf is the only element
    /// possibly out of place, and only along its path to the root, so this
    /// fully restores the invariant.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = Self::parent(i);
            if self.items[parent] <= self.items[i] {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    /// Walks the element at `i` down toward the leaves, swapping with its
    /// smaller child until both children are no smaller. Ties keep the left
    /// child as the swap target, and a tie with the smaller child counts as
    /// satisfied — no swap on equality.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        while Self::left_child(i) < len {
            let mut smallest = Self::left_child(i);
            let right = Self::right_child(i);
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }

            if self.items[i] <= self.items[smallest] {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<E: Ord> Default for MinHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}
