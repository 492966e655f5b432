use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::ids::{RouteId, StationId};

/// A stop as described by the timetable, before the catalog assigns it an id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationStop {
    pub name: String,
    #[serde(default)]
    pub arrival: Option<NaiveTime>,
    #[serde(default)]
    pub departure: Option<NaiveTime>,
}

impl StationStop {
    pub fn origin(name: impl Into<String>, departure: NaiveTime) -> Self {
        Self { name: name.into(), arrival: None, departure: Some(departure) }
    }

    pub fn intermediate(name: impl Into<String>, arrival: NaiveTime, departure: NaiveTime) -> Self {
        Self { name: name.into(), arrival: Some(arrival), departure: Some(departure) }
    }

    pub fn terminus(name: impl Into<String>, arrival: NaiveTime) -> Self {
        Self { name: name.into(), arrival: Some(arrival), departure: None }
    }
}

/// A stop on a route. Identity is the id, never the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub arrival: Option<NaiveTime>,
    pub departure: Option<NaiveTime>,
}

impl Station {
    pub fn new(id: StationId, stop: StationStop) -> Self {
        Self {
            id,
            name: stop.name,
            arrival: stop.arrival,
            departure: stop.departure,
        }
    }

    /// Human readable timing, e.g. "Arr 07:30 | Dep 07:45"
    pub fn time_info(&self) -> String {
        match (self.arrival, self.departure) {
            (None, Some(dep)) => format!("Dep {}", dep.format("%H:%M")),
            (Some(arr), None) => format!("Arr {}", arr.format("%H:%M")),
            (Some(arr), Some(dep)) => format!("Arr {} | Dep {}", arr.format("%H:%M"), dep.format("%H:%M")),
            (None, None) => "No times".to_string(),
        }
    }
}

/// Ordered list of stations a train runs through
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    pub stations: Vec<Station>,
}

impl Route {
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Case-insensitive lookup of a source/destination pair by name.
    ///
    /// The destination is the first stop with that name after the source, so a
    /// route that revisits a town still resolves to a forward journey.
    pub fn find_pair(&self, source_name: &str, destination_name: &str) -> Option<(&Station, &Station)> {
        let source_name = source_name.trim();
        let destination_name = destination_name.trim();

        let src_idx = self
            .stations
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(source_name))?;
        let dst = self.stations[src_idx + 1..]
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(destination_name))?;

        Some((&self.stations[src_idx], dst))
    }

    pub fn serves(&self, source_name: &str, destination_name: &str) -> bool {
        self.find_pair(source_name, destination_name).is_some()
    }

    pub fn station_names(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.name.as_str()).collect()
    }
}
