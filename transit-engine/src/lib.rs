//! Routing and scheduling engine for a suburban transit network.
//!
//! The engine answers: "what is the fastest route between these stations,
//! what is still reachable after an emergency blockage, and which trains
//! arrive next?" It is a synchronous, single-instance core: a presentation
//! layer drives it, a persistence layer serializes its records, and a
//! ticketing layer prices fares off [`NetworkGraph::distance_km`] — none of
//! which this crate knows about.
//!
//! [`NetworkGraph::distance_km`]: network::NetworkGraph::distance_km

pub mod containers;
pub mod directory;
pub mod domain;
pub mod network;
pub mod platform;
pub mod registry;
pub mod scheduler;
