//! Station registry.
//!
//! Owns the station records and the name → id mapping used during network
//! bootstrap. A single instance replaces the ambient global tables the rest
//! of the engine borrows from; nothing here is shared mutable state.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{InvalidStation, Line, Station, StationId};

/// Owner of all [`Station`] records.
///
/// Ids are dense and assigned in registration order, so they index directly
/// into the adjacency list of a [`NetworkGraph`](crate::network::NetworkGraph)
/// created with the same station count. Stations are never removed.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
    /// Case-folded name → id, used to detect interchange registration.
    by_name: HashMap<String, StationId>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station, assigning the next dense id.
    ///
    /// Registering a name that already exists (case-insensitively) does not
    /// create a second record: the existing station is marked as an
    /// interchange when the line differs, and its id is returned.
    pub fn register(&mut self, name: &str, line: Line, platforms: u8) -> StationId {
        let key = name.to_lowercase();
        if let Some(&id) = self.by_name.get(&key) {
            let station = &mut self.stations[id.index()];
            if station.line != line && !station.is_interchange {
                station.is_interchange = true;
                debug!(station = %station.name, line = %line, "marked as interchange");
            }
            return id;
        }

        let id = StationId(self.stations.len());
        self.stations.push(Station::new(id, name, line, platforms));
        self.by_name.insert(key, id);
        id
    }

    /// The station with the given id.
    pub fn get(&self, id: StationId) -> Result<&Station, InvalidStation> {
        self.stations.get(id.index()).ok_or(InvalidStation {
            id,
            station_count: self.stations.len(),
        })
    }

    /// Add passengers to a station's current load.
    ///
    /// This is the only mutation a station record sees after creation.
    pub fn record_passengers(&mut self, id: StationId, count: u32) -> Result<(), InvalidStation> {
        let station_count = self.stations.len();
        let station = self
            .stations
            .get_mut(id.index())
            .ok_or(InvalidStation { id, station_count })?;
        station.passenger_count = station.passenger_count.saturating_add(count);
        Ok(())
    }

    /// Number of registered stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate over all stations in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_sequential() {
        let mut reg = StationRegistry::new();
        let a = reg.register("Churchgate", Line::Western, 4);
        let b = reg.register("Marine Lines", Line::Western, 2);
        assert_eq!(a, StationId(0));
        assert_eq!(b, StationId(1));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn reregistering_under_other_line_marks_interchange() {
        let mut reg = StationRegistry::new();
        let dadar = reg.register("Dadar", Line::Western, 6);
        assert!(!reg.get(dadar).unwrap().is_interchange);

        let again = reg.register("Dadar", Line::Central, 6);
        assert_eq!(again, dadar);
        assert_eq!(reg.len(), 1);

        let station = reg.get(dadar).unwrap();
        assert!(station.is_interchange);
        // First registration's line is kept.
        assert_eq!(station.line, Line::Western);
    }

    #[test]
    fn reregistering_same_line_is_not_interchange() {
        let mut reg = StationRegistry::new();
        let id = reg.register("Thane", Line::Central, 4);
        reg.register("THANE", Line::Central, 4);
        assert!(!reg.get(id).unwrap().is_interchange);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        let mut reg = StationRegistry::new();
        let id = reg.register("Kurla", Line::Central, 4);
        assert_eq!(reg.register("KURLA", Line::Harbour, 4), id);
        assert!(reg.get(id).unwrap().is_interchange);
    }

    #[test]
    fn record_passengers_accumulates() {
        let mut reg = StationRegistry::new();
        let id = reg.register("Andheri", Line::Western, 8);

        reg.record_passengers(id, 150).unwrap();
        reg.record_passengers(id, 50).unwrap();
        assert_eq!(reg.get(id).unwrap().passenger_count, 200);
    }

    #[test]
    fn out_of_range_id_is_hard_error() {
        let mut reg = StationRegistry::new();
        reg.register("Vashi", Line::Harbour, 2);

        let bogus = StationId(7);
        let err = reg.get(bogus).unwrap_err();
        assert_eq!(err.id, bogus);
        assert_eq!(err.station_count, 1);
        assert!(reg.record_passengers(bogus, 1).is_err());
    }
}
