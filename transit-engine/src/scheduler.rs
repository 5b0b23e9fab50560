//! Time-ordered train dispatch.
//!
//! The scheduler keeps every scheduled train in a [`MinHeap`] keyed by
//! arrival time, so the next departure is always at the root. Enumeration
//! is non-destructive: callers get an ordered view drained from a clone of
//! the heap, never from the live schedule.

use tracing::{debug, info};

use crate::containers::MinHeap;
use crate::domain::{ServiceTime, StationId, Train, TrainId};

/// The fixed extra services injected during peak hours: (id, name, arrival
/// minutes). All start from the terminus station.
const PEAK_SPECIALS: [(u32, &str, u16); 2] = [
    (901, "Peak Special 1", 540), // 09:00
    (902, "Peak Special 2", 550), // 09:10
];

/// Station the peak specials are dispatched from.
const PEAK_SPECIAL_ORIGIN: StationId = StationId(0);

/// Priority-ordered train schedule.
#[derive(Debug, Clone, Default)]
pub struct TrainScheduler {
    schedule: MinHeap<ServiceTime, Train>,
}

impl TrainScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            schedule: MinHeap::new(),
        }
    }

    /// Schedule a train with default capacity, empty load, and on-time
    /// status. O(log n).
    pub fn schedule(
        &mut self,
        id: TrainId,
        name: impl Into<String>,
        arrival: ServiceTime,
        start_station: StationId,
    ) {
        let train = Train::new(id, name, arrival, start_station);
        debug!(train = %train.id, arrival = %train.arrival, "train scheduled");
        self.schedule.push(arrival, train);
    }

    /// All scheduled trains in ascending arrival order.
    ///
    /// Operates on a clone of the heap, so repeated calls are idempotent and
    /// the live schedule is never mutated. O(n log n).
    pub fn upcoming(&self) -> Vec<Train> {
        let mut copy = self.schedule.clone();
        let mut trains = Vec::with_capacity(copy.len());
        while let Some((_, train)) = copy.pop() {
            trains.push(train);
        }
        trains
    }

    /// Trains whose next station is `station`, in ascending arrival order.
    pub fn trains_at_station(&self, station: StationId) -> Vec<Train> {
        self.upcoming()
            .into_iter()
            .filter(|t| t.next_station == station)
            .collect()
    }

    /// Inject the fixed peak-hour specials when `is_peak` is set.
    ///
    /// Off-peak calls mutate nothing. Returns the number of trains added;
    /// the injected set is the same on every peak call.
    pub fn optimize_frequency(&mut self, is_peak: bool) -> usize {
        if !is_peak {
            debug!("off-peak, standard frequency maintained");
            return 0;
        }

        for &(id, name, minutes) in &PEAK_SPECIALS {
            let arrival = ServiceTime::new(minutes).expect("peak special times are in range");
            self.schedule(TrainId(id), name, arrival, PEAK_SPECIAL_ORIGIN);
        }
        info!(added = PEAK_SPECIALS.len(), "peak frequency increase");
        PEAK_SPECIALS.len()
    }

    /// Number of scheduled trains.
    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    /// Whether no trains are scheduled.
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}
