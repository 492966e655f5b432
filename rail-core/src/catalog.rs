use async_trait::async_trait;

use crate::ids::{RouteId, TrainNumber};
use crate::route::Route;
use crate::train::Train;

/// Ordered station lists, by route id
#[async_trait]
pub trait RouteCatalog: Send + Sync {
    async fn route(&self, route_id: RouteId) -> Result<Option<Route>, CatalogError>;
}

/// Train definitions (capacities and route), by train number
#[async_trait]
pub trait TrainCatalog: Send + Sync {
    async fn train(&self, number: TrainNumber) -> Result<Option<Train>, CatalogError>;
}

/// Everything the booking engine needs to look up
pub trait Catalog: RouteCatalog + TrainCatalog {}

impl<T: RouteCatalog + TrainCatalog> Catalog for T {}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Route not found: {0}")]
    RouteNotFound(RouteId),

    #[error("Train already registered: {0}")]
    DuplicateTrain(TrainNumber),
}
