//! Container primitives the engine is built on.
//!
//! A LIFO stack (route reconstruction), a FIFO queue (breadth-first
//! traversal), and a keyed binary min-heap (route search frontier, dispatch
//! schedule). All three make the empty case observable through `Option`
//! returns instead of handing back default values.

mod min_heap;
mod queue;
mod stack;

pub use min_heap::MinHeap;
pub use queue::Queue;
pub use stack::Stack;
