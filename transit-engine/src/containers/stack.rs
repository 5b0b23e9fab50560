//! LIFO stack over owned linked nodes.

/// A singly-linked stack.
///
/// Each node is exclusively owned by its predecessor (or by the stack head),
/// so nodes are released as soon as they are popped. The empty case is always
/// observable: `pop` and `peek` return `None` rather than a default value, so
/// callers cannot proceed on bogus data.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Push a value onto the top. O(1).
    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    /// Remove and return the most recently pushed value. O(1).
    ///
    /// Returns `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        self.top = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// The most recently pushed value, if any.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.value)
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    // The derived recursive drop would overflow the call stack on long
    // chains; unlink iteratively instead.
    fn drop(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}
