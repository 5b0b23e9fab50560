//! Railway network graph: routing, connectivity, and emergency track control.
//!
//! The graph holds weighted adjacency lists indexed by dense station id.
//! Route search is Dijkstra over the [`MinHeap`](crate::containers::MinHeap)
//! primitive with path reconstruction through the
//! [`Stack`](crate::containers::Stack); connectivity is BFS over the
//! [`Queue`](crate::containers::Queue). Blocking a track sets its weight to
//! a sentinel rather than removing the edge, which routing honours and
//! connectivity deliberately does not.

mod graph;


pub use graph::{BLOCKED_MINUTES, Connectivity, Edge, NetworkGraph, NetworkStats, Route};
