//! Binary min-heap keyed by a caller-supplied key.

/// A binary min-heap of `(key, value)` entries.
///
/// The caller supplies the ordering key with each push, so the same value
/// type can be heaped by different criteria (the route search keys station
/// ids by accumulated minutes or kilometres; the scheduler keys trains by
/// arrival time).
///
/// Invariant: for every non-root index `i`,
/// `entries[parent(i)].0 <= entries[i].0`.
///
/// `push`/`pop` are O(log n), `peek` is O(1). Cloning the heap gives an
/// independent copy that can be drained without touching the original,
/// which is how non-destructive ordered enumeration works.
#[derive(Debug, Clone)]
pub struct MinHeap<K, T> {
    entries: Vec<(K, T)>,
}

impl<K: Ord, T> MinHeap<K, T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value with its ordering key. O(log n).
    pub fn push(&mut self, key: K, value: T) {
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the entry with the smallest key. O(log n).
    ///
    /// Returns `None` when the heap is empty. Equal keys pop in unspecified
    /// order.
    pub fn pop(&mut self) -> Option<(K, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        entry
    }

    /// The entry with the smallest key, if any. O(1).
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw entries in storage order (not sorted order).
    ///
    /// Useful for inspection; the heap invariant holds over this slice.
    pub fn as_slice(&self) -> &[(K, T)] {
        &self.entries
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].0 <= self.entries[index].0 {
                break;
            }
            self.entries.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<K: Ord, T> Default for MinHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
fn heap_invariant_holds<K: Ord, T>(heap: &MinHeap<K, T>) -> bool {
    let entries = heap.as_slice();
    (1..entries.len()).all(|i| entries[(i - 1) / 2].0 <= entries[i].0)
}
