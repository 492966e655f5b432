use rail_core::{Route, Station, StationId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One hop between adjacent stations; the unit seats are accounted in.
///
/// Keyed by station identity so that a route revisiting a town by name still
/// produces distinct segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentKey {
    pub from: StationId,
    pub to: StationId,
}

impl SegmentKey {
    pub fn new(from: StationId, to: StationId) -> Self {
        Self { from, to }
    }

    /// "Chennai-Vellore" style label using the route's station names
    pub fn label(&self, route: &Route) -> String {
        let name = |id: StationId| {
            route
                .station(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.to_string())
        };
        format!("{}-{}", name(self.from), name(self.to))
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Every segment of a route, in running order
pub fn route_segments(stations: &[Station]) -> Vec<SegmentKey> {
    stations
        .windows(2)
        .map(|pair| SegmentKey::new(pair[0].id, pair[1].id))
        .collect()
}

/// Segments crossed travelling from `source` to `destination`.
///
/// Empty when either station is missing or the destination does not come
/// after the source.
pub fn resolve_segments(stations: &[Station], source: StationId, destination: StationId) -> Vec<SegmentKey> {
    let Some(src) = stations.iter().position(|s| s.id == source) else {
        return Vec::new();
    };
    let Some(offset) = stations[src + 1..].iter().position(|s| s.id == destination) else {
        return Vec::new();
    };

    route_segments(&stations[src..=src + 1 + offset])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rail_core::{RouteId, StationStop};

    fn route(names: &[&str]) -> Route {
        Route {
            id: RouteId(1),
            stations: names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    Station::new(
                        StationId(i as u32 + 10),
                        StationStop { name: name.to_string(), arrival: None, departure: None },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_resolve_inner_journey() {
        let route = route(&["Delhi", "Agra", "Ujjain", "Vadodara", "Mumbai"]);
        let segments = resolve_segments(&route.stations, StationId(11), StationId(13));
        assert_eq!(
            segments,
            vec![
                SegmentKey::new(StationId(11), StationId(12)),
                SegmentKey::new(StationId(12), StationId(13)),
            ]
        );
        assert_eq!(segments[0].label(&route), "Agra-Ujjain");
    }

    #[test]
    fn test_resolve_rejects_reverse_and_unknown() {
        let route = route(&["Delhi", "Agra", "Mumbai"]);
        assert!(resolve_segments(&route.stations, StationId(12), StationId(10)).is_empty());
        assert!(resolve_segments(&route.stations, StationId(10), StationId(10)).is_empty());
        assert!(resolve_segments(&route.stations, StationId(10), StationId(99)).is_empty());
        assert!(resolve_segments(&route.stations, StationId(99), StationId(12)).is_empty());
    }

    #[test]
    fn test_revisited_name_is_disambiguated_by_id() {
        let route = route(&["Chennai", "Vellore", "Chennai", "Hosur"]);
        let segments = resolve_segments(&route.stations, StationId(12), StationId(13));
        assert_eq!(segments, vec![SegmentKey::new(StationId(12), StationId(13))]);
        assert_eq!(segments[0].label(&route), "Chennai-Hosur");
    }

    #[test]
    fn test_route_segments_covers_whole_route() {
        let route = route(&["A", "B", "C", "D"]);
        assert_eq!(route_segments(&route.stations).len(), 3);
        assert!(route_segments(&route.stations[..1]).is_empty());
    }
}
