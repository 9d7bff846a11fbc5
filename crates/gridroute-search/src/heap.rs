//! Binary min-heap frontier for the cost-aware searches.

/// A binary min-heap of `(item, priority)` entries.
///
/// There is no stability guarantee among equal priorities, and the
/// heap does not deduplicate: the same item may be enqueued several
/// times at different priorities. Callers discard stale entries at
/// dequeue time with an already-visited check (lazy deletion) — that
/// check is load-bearing, not an optimization.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    heap: Vec<(T, i64)>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    /// Create an empty heap.
    pub const fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Number of entries (including stale duplicates).
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert `item` at the given priority. O(log n).
    pub fn enqueue(&mut self, item: T, priority: i64) {
        self.heap.push((item, priority));
        self.sift_up();
    }

    /// Remove and return the item with the smallest priority, or
    /// `None` when empty. O(log n).
    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let (item, _) = self.heap.pop()?;
        self.sift_down();
        Some(item)
    }

    fn sift_up(&mut self) {
        let mut i = self.heap.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].1 > self.heap[i].1 {
                self.heap.swap(parent, i);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self) {
        let len = self.heap.len();
        let mut i = 0;
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut swap = None;
            if left < len && self.heap[left].1 < self.heap[i].1 {
                swap = Some(left);
            }
            if right < len {
                // Ties between children break toward the left child.
                let against = swap.map_or(self.heap[i].1, |l| self.heap[l].1);
                if self.heap[right].1 < against {
                    swap = Some(right);
                }
            }
            let Some(j) = swap else { break };
            self.heap.swap(i, j);
            i = j;
        }
    }
}
