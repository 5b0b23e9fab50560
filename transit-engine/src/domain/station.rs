//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a station id is out of range for the structure it
/// was passed to.
///
/// This is a hard contract violation, never a normal miss: lookups that can
/// legitimately fail (name not found, destination unreachable) return
/// `Option` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {id} (network has {station_count} stations)")]
pub struct InvalidStation {
    /// The offending id.
    pub id: StationId,
    /// Number of stations the structure knows about.
    pub station_count: usize,
}

/// A dense station identifier.
///
/// Ids are assigned sequentially at registration time and double as indices
/// into the network's adjacency list. They are never reused.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StationId(pub usize);

impl StationId {
    /// The raw index value.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The suburban lines served by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Western,
    Central,
    Harbour,
    TransHarbour,
}

impl Line {
    /// Human-readable line name.
    pub fn name(&self) -> &'static str {
        match self {
            Line::Western => "Western Line",
            Line::Central => "Central Line",
            Line::Harbour => "Harbour Line",
            Line::TransHarbour => "Trans-Harbour Line",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default number of platforms for a newly registered station.
pub const DEFAULT_PLATFORMS: u8 = 2;

/// A station record.
///
/// Created once during network bootstrap. The name and id are immutable;
/// only the passenger count changes afterwards, and the interchange flag is
/// set when the same name is registered under a second line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Dense identifier, also the adjacency-list index.
    pub id: StationId,

    /// Display name, immutable once created.
    pub name: String,

    /// The line the station was first registered under.
    pub line: Line,

    /// Number of platforms.
    pub platforms: u8,

    /// Current passenger load. The only field mutated after creation.
    pub passenger_count: u32,

    /// Whether the station is shared by more than one line.
    pub is_interchange: bool,
}

impl Station {
    /// Create a station record with an empty passenger load.
    pub fn new(id: StationId, name: impl Into<String>, line: Line, platforms: u8) -> Self {
        Self {
            id,
            name: name.into(),
            line,
            platforms,
            passenger_count: 0,
            is_interchange: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_station_defaults() {
        let s = Station::new(StationId(3), "Dadar", Line::Western, 6);
        assert_eq!(s.id, StationId(3));
        assert_eq!(s.name, "Dadar");
        assert_eq!(s.line, Line::Western);
        assert_eq!(s.platforms, 6);
        assert_eq!(s.passenger_count, 0);
        assert!(!s.is_interchange);
    }

    #[test]
    fn line_names() {
        assert_eq!(Line::Western.name(), "Western Line");
        assert_eq!(Line::Central.name(), "Central Line");
        assert_eq!(Line::Harbour.name(), "Harbour Line");
        assert_eq!(Line::TransHarbour.name(), "Trans-Harbour Line");
    }

    #[test]
    fn station_id_display() {
        assert_eq!(StationId(7).to_string(), "7");
        assert_eq!(format!("{:?}", StationId(7)), "StationId(7)");
    }

    #[test]
    fn station_serializes_as_flat_record() {
        let s = Station::new(StationId(0), "Churchgate", Line::Western, 4);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["name"], "Churchgate");
        assert_eq!(json["line"], "Western");
        let back: Station = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
