//! Domain types for the transit engine.
//!
//! This module contains the core domain model types that represent validated
//! network data. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod station;
mod time;
mod train;

pub use station::{DEFAULT_PLATFORMS, InvalidStation, Line, Station, StationId};
pub use time::{MINUTES_PER_DAY, ServiceTime, TimeError};
pub use train::{DEFAULT_CAPACITY, Train, TrainId, TrainStatus};
