//! Railway network graph and routing.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::containers::{MinHeap, Queue, Stack};
use crate::domain::{InvalidStation, Line, StationId};

/// Sentinel weight marking a blocked track.
///
/// Blocked edges stay in the adjacency list with this weight; the route
/// search skips them instead of relaxing through them.
pub const BLOCKED_MINUTES: u32 = u32::MAX;

/// A directed track segment.
///
/// Tracks are created in symmetric pairs, so for every `u → v` edge with a
/// given weight there is a matching `v → u` edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Target station.
    pub to: StationId,

    /// Traversal time in minutes, or [`BLOCKED_MINUTES`] once blocked.
    pub minutes: u32,

    /// Track length in kilometres.
    pub km: u32,

    /// The line this track belongs to.
    pub line: Line,
}

impl Edge {
    /// Whether this track is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.minutes == BLOCKED_MINUTES
    }
}

/// A route between two stations, as returned by
/// [`NetworkGraph::find_fastest_route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Station ids from source to destination inclusive.
    pub path: Vec<StationId>,

    /// Total traversal time along `path`, in minutes.
    pub total_minutes: u32,

    /// Total track length along `path`, in kilometres.
    pub total_km: u32,
}

/// Result of a breadth-first connectivity sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    /// Reachable station ids in discovery order, starting station first.
    pub reachable: Vec<StationId>,
}

impl Connectivity {
    /// Number of reachable stations, including the start.
    pub fn count(&self) -> usize {
        self.reachable.len()
    }
}

/// Aggregate statistics over the network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStats {
    /// Number of stations (vertices).
    pub station_count: usize,

    /// Number of tracks, counting each symmetric pair once.
    pub track_count: usize,

    /// Average number of connections per station.
    pub avg_degree: f64,

    /// The station with the most connections and its degree, if the network
    /// has any stations. First wins on ties.
    pub most_connected: Option<(StationId, usize)>,
}

/// Adjacency-list railway network.
///
/// The graph owns its edge lists outright; station records live in the
/// [`StationRegistry`](crate::registry::StationRegistry) and are related to
/// the graph only through shared dense ids. All operations bounds-check
/// their ids and fail with [`InvalidStation`] rather than indexing blindly.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    adj: Vec<Vec<Edge>>,
}

impl NetworkGraph {
    /// Create a network with `station_count` stations and no tracks.
    pub fn new(station_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); station_count],
        }
    }

    /// Number of stations the network was created with.
    pub fn station_count(&self) -> usize {
        self.adj.len()
    }

    /// Add a bidirectional track between `u` and `v`.
    ///
    /// Appends both the `u → v` and `v → u` edges with the same weight,
    /// distance, and line.
    pub fn add_track(
        &mut self,
        u: StationId,
        v: StationId,
        minutes: u32,
        km: u32,
        line: Line,
    ) -> Result<(), InvalidStation> {
        self.check(u)?;
        self.check(v)?;

        self.adj[u.index()].push(Edge {
            to: v,
            minutes,
            km,
            line,
        });
        self.adj[v.index()].push(Edge {
            to: u,
            minutes,
            km,
            line,
        });

        trace!(from = %u, to = %v, minutes, km, "track added");
        Ok(())
    }

    /// Block the track between `u` and `v` in both directions.
    ///
    /// Sets the weight of every matching edge to [`BLOCKED_MINUTES`]. The
    /// edges stay in the adjacency list, and there is no unblock operation:
    /// a blockage is a standing mutation for the rest of the network's life.
    ///
    /// Returns whether a direct track between the two stations existed.
    pub fn block_track(&mut self, u: StationId, v: StationId) -> Result<bool, InvalidStation> {
        self.check(u)?;
        self.check(v)?;

        let mut found = false;
        for edge in &mut self.adj[u.index()] {
            if edge.to == v {
                edge.minutes = BLOCKED_MINUTES;
                found = true;
            }
        }
        for edge in &mut self.adj[v.index()] {
            if edge.to == u {
                edge.minutes = BLOCKED_MINUTES;
                found = true;
            }
        }

        if found {
            warn!(from = %u, to = %v, "track blocked");
        } else {
            warn!(from = %u, to = %v, "block requested for non-existent track");
        }
        Ok(found)
    }

    /// Find the time-optimal route from `src` to `dest`.
    ///
    /// Dijkstra keyed by accumulated minutes, with the frontier held in the
    /// [`MinHeap`] primitive. Ties are broken by relaxation order (first
    /// relaxed wins), blocked edges are never taken, and the search stops as
    /// soon as the destination pops. Kilometres are accumulated along the
    /// same time-optimal path for the returned total.
    ///
    /// Returns `Ok(None)` when the destination is unreachable; that is a
    /// normal result, not an error.
    pub fn find_fastest_route(
        &self,
        src: StationId,
        dest: StationId,
    ) -> Result<Option<Route>, InvalidStation> {
        self.check(src)?;
        self.check(dest)?;

        let mut dist: Vec<Option<u32>> = vec![None; self.adj.len()];
        let mut km_along: Vec<u32> = vec![0; self.adj.len()];
        let mut parent: Vec<Option<StationId>> = vec![None; self.adj.len()];
        let mut frontier: MinHeap<u32, StationId> = MinHeap::new();

        dist[src.index()] = Some(0);
        frontier.push(0, src);

        while let Some((d, u)) = frontier.pop() {
            // Stale frontier entry for an already-improved station.
            if dist[u.index()].is_some_and(|best| d > best) {
                continue;
            }
            if u == dest {
                break;
            }

            for edge in &self.adj[u.index()] {
                if edge.is_blocked() {
                    continue;
                }
                let Some(candidate) = d.checked_add(edge.minutes) else {
                    continue;
                };
                let v = edge.to;
                if dist[v.index()].is_none_or(|best| candidate < best) {
                    dist[v.index()] = Some(candidate);
                    km_along[v.index()] = km_along[u.index()] + edge.km;
                    parent[v.index()] = Some(u);
                    frontier.push(candidate, v);
                }
            }
        }

        let Some(total_minutes) = dist[dest.index()] else {
            debug!(src = %src, dest = %dest, "no route");
            return Ok(None);
        };

        // Walk parent pointers back to the source, then pop the stack to
        // emit the path in src → dest order.
        let mut reversed = Stack::new();
        let mut cursor = Some(dest);
        while let Some(id) = cursor {
            reversed.push(id);
            cursor = parent[id.index()];
        }

        let mut path = Vec::with_capacity(reversed.len());
        while let Some(id) = reversed.pop() {
            path.push(id);
        }

        debug!(
            src = %src,
            dest = %dest,
            hops = path.len() - 1,
            total_minutes,
            "route found"
        );

        Ok(Some(Route {
            path,
            total_minutes,
            total_km: km_along[dest.index()],
        }))
    }

    /// Shortest distance in kilometres from `src` to `dest`.
    ///
    /// Same search as [`find_fastest_route`](Self::find_fastest_route) but
    /// keyed by track length; used by the fare layer. Side-effect free.
    ///
    /// Returns `Ok(None)` when the destination is unreachable.
    pub fn distance_km(
        &self,
        src: StationId,
        dest: StationId,
    ) -> Result<Option<u32>, InvalidStation> {
        self.check(src)?;
        self.check(dest)?;

        let mut dist: Vec<Option<u32>> = vec![None; self.adj.len()];
        let mut frontier: MinHeap<u32, StationId> = MinHeap::new();

        dist[src.index()] = Some(0);
        frontier.push(0, src);

        while let Some((d, u)) = frontier.pop() {
            if dist[u.index()].is_some_and(|best| d > best) {
                continue;
            }
            if u == dest {
                break;
            }

            for edge in &self.adj[u.index()] {
                if edge.is_blocked() {
                    continue;
                }
                let Some(candidate) = d.checked_add(edge.km) else {
                    continue;
                };
                let v = edge.to;
                if dist[v.index()].is_none_or(|best| candidate < best) {
                    dist[v.index()] = Some(candidate);
                    frontier.push(candidate, v);
                }
            }
        }

        Ok(dist[dest.index()])
    }

    /// All stations reachable from `start`, in breadth-first discovery order.
    ///
    /// The sweep uses the [`Queue`] primitive and follows every edge
    /// regardless of weight: a blocked track still connects its endpoints
    /// here, even though routing will never traverse it. Physical link
    /// integrity and timetable usability are deliberately different
    /// questions.
    pub fn connectivity(&self, start: StationId) -> Result<Connectivity, InvalidStation> {
        self.check(start)?;

        let mut visited = vec![false; self.adj.len()];
        let mut reachable = Vec::new();
        let mut queue = Queue::new();

        visited[start.index()] = true;
        queue.push(start);

        while let Some(u) = queue.pop() {
            reachable.push(u);
            for edge in &self.adj[u.index()] {
                if !visited[edge.to.index()] {
                    visited[edge.to.index()] = true;
                    queue.push(edge.to);
                }
            }
        }

        debug!(start = %start, reachable = reachable.len(), "connectivity sweep");
        Ok(Connectivity { reachable })
    }

    /// Aggregate network statistics. O(V+E), no mutation.
    pub fn network_stats(&self) -> NetworkStats {
        let station_count = self.adj.len();
        let mut directed_edges = 0;
        let mut most_connected: Option<(StationId, usize)> = None;

        for (i, edges) in self.adj.iter().enumerate() {
            directed_edges += edges.len();
            let beats_current = most_connected.is_none_or(|(_, max)| edges.len() > max);
            if beats_current {
                most_connected = Some((StationId(i), edges.len()));
            }
        }

        NetworkStats {
            station_count,
            // Each symmetric pair contributes two directed edges.
            track_count: directed_edges / 2,
            avg_degree: if station_count > 0 {
                directed_edges as f64 / station_count as f64
            } else {
                0.0
            },
            most_connected,
        }
    }

    /// Direct edges out of a station.
    pub fn edges_from(&self, id: StationId) -> Result<&[Edge], InvalidStation> {
        self.check(id)?;
        Ok(&self.adj[id.index()])
    }

    fn check(&self, id: StationId) -> Result<(), InvalidStation> {
        if id.index() >= self.adj.len() {
            return Err(InvalidStation {
                id,
                station_count: self.adj.len(),
            });
        }
        Ok(())
    }
}
