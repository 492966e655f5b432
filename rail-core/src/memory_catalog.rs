use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::debug;

use crate::catalog::{CatalogError, RouteCatalog, TrainCatalog};
use crate::ids::{RouteId, StationId, TrainNumber};
use crate::route::{Route, Station, StationStop};
use crate::train::Train;

/// In-memory route and train catalog.
///
/// Station and route ids come from sequences owned by the catalog instance,
/// so two catalogs never share id state.
pub struct InMemoryCatalog {
    routes: RwLock<HashMap<RouteId, Route>>,
    trains: RwLock<HashMap<TrainNumber, Train>>,
    next_station_id: AtomicU32,
    next_route_id: AtomicU32,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(HashMap::new()),
            trains: RwLock::new(HashMap::new()),
            next_station_id: AtomicU32::new(1),
            next_route_id: AtomicU32::new(1),
        }
    }

    /// Register a route from its ordered stops and return the id it was given
    pub fn add_route(&self, stops: Vec<StationStop>) -> Result<RouteId, CatalogError> {
        if stops.len() < 2 {
            return Err(CatalogError::InvalidRoute(format!(
                "a route needs at least two stops, got {}",
                stops.len()
            )));
        }

        let route_id = RouteId(self.next_route_id.fetch_add(1, Ordering::Relaxed));
        let stations: Vec<Station> = stops
            .into_iter()
            .map(|stop| {
                let id = StationId(self.next_station_id.fetch_add(1, Ordering::Relaxed));
                Station::new(id, stop)
            })
            .collect();

        debug!(route = %route_id, stops = stations.len(), "Route registered");
        self.routes.write().insert(route_id, Route { id: route_id, stations });
        Ok(route_id)
    }

    /// Register a train on an existing route
    pub fn add_train(&self, train: Train) -> Result<(), CatalogError> {
        if !self.routes.read().contains_key(&train.route_id) {
            return Err(CatalogError::RouteNotFound(train.route_id));
        }

        let mut trains = self.trains.write();
        if trains.contains_key(&train.number) {
            return Err(CatalogError::DuplicateTrain(train.number));
        }

        debug!(train = %train.number, route = %train.route_id, "Train registered");
        trains.insert(train.number, train);
        Ok(())
    }

    pub fn get_route(&self, route_id: RouteId) -> Option<Route> {
        self.routes.read().get(&route_id).cloned()
    }

    pub fn get_train(&self, number: TrainNumber) -> Option<Train> {
        self.trains.read().get(&number).cloned()
    }

    pub fn all_trains(&self) -> Vec<Train> {
        let mut trains: Vec<Train> = self.trains.read().values().cloned().collect();
        trains.sort_by_key(|t| t.number);
        trains
    }

    /// Trains whose route visits `source` and later `destination` (names, case-insensitive)
    pub fn search_trains(&self, source: &str, destination: &str) -> Vec<Train> {
        if source.trim().is_empty() || destination.trim().is_empty() {
            return Vec::new();
        }

        let routes = self.routes.read();
        let mut matches: Vec<Train> = self
            .trains
            .read()
            .values()
            .filter(|train| {
                routes
                    .get(&train.route_id)
                    .is_some_and(|route| route.serves(source, destination))
            })
            .cloned()
            .collect();

        matches.sort_by_key(|t| t.number);
        matches
    }

    /// Turn station names typed at the boundary into the stations of a train's route
    pub fn resolve_stations(
        &self,
        train: TrainNumber,
        source: &str,
        destination: &str,
    ) -> Option<(Station, Station)> {
        let route_id = self.trains.read().get(&train)?.route_id;
        let routes = self.routes.read();
        let route = routes.get(&route_id)?;
        route
            .find_pair(source, destination)
            .map(|(src, dst)| (src.clone(), dst.clone()))
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteCatalog for InMemoryCatalog {
    async fn route(&self, route_id: RouteId) -> Result<Option<Route>, CatalogError> {
        Ok(self.get_route(route_id))
    }
}

#[async_trait]
impl TrainCatalog for InMemoryCatalog {
    async fn train(&self, number: TrainNumber) -> Result<Option<Train>, CatalogError> {
        Ok(self.get_train(number))
    }
}
