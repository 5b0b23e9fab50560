//! FIFO queue over owned storage.

/// A FIFO queue built from two growable arrays.
///
/// Pushes land on an inbox; pops drain an outbox, refilling it by reversing
/// the inbox whenever it runs dry. Every element is moved at most twice, so
/// all operations are amortized O(1) without the raw tail pointer the
/// classic linked implementation needs.
///
/// Like [`Stack`](super::Stack), the empty case is observable: `pop` and
/// `front` return `None` rather than a default value.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    inbox: Vec<T>,
    outbox: Vec<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            inbox: Vec::new(),
            outbox: Vec::new(),
        }
    }

    /// Append a value at the back. Amortized O(1).
    pub fn push(&mut self, value: T) {
        self.inbox.push(value);
    }

    /// Remove and return the oldest value. Amortized O(1).
    ///
    /// Returns `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.outbox.is_empty() {
            while let Some(value) = self.inbox.pop() {
                self.outbox.push(value);
            }
        }
        self.outbox.pop()
    }

    /// The oldest value, if any.
    pub fn front(&self) -> Option<&T> {
        self.outbox.last().or_else(|| self.inbox.first())
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
