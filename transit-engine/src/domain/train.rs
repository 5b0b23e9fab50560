//! Train types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::station::StationId;
use super::time::ServiceTime;

/// A train identifier as printed on the timetable.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TrainId(pub u32);

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dispatch status of a scheduled train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Cancelled,
}

/// Default seating-plus-standing capacity of a rake.
pub const DEFAULT_CAPACITY: u32 = 2000;

/// A scheduled train.
///
/// Built by the scheduler with default capacity, an empty load, and `OnTime`
/// status. Immutable after creation except for the status field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    /// Timetable identifier.
    pub id: TrainId,

    /// Display name, e.g. "Churchgate Fast".
    pub name: String,

    /// Total passenger capacity.
    pub capacity: u32,

    /// Current passenger load.
    pub current_load: u32,

    /// The station the train arrives at next.
    pub next_station: StationId,

    /// Scheduled arrival time.
    pub arrival: ServiceTime,

    /// Dispatch status.
    pub status: TrainStatus,
}

impl Train {
    /// Create a train with default capacity, empty load, and on-time status.
    pub fn new(
        id: TrainId,
        name: impl Into<String>,
        arrival: ServiceTime,
        next_station: StationId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            capacity: DEFAULT_CAPACITY,
            current_load: 0,
            next_station,
            arrival,
            status: TrainStatus::OnTime,
        }
    }
}
