pub mod ids;
pub mod route;
pub mod train;
pub mod passenger;
pub mod preference;
pub mod status;
pub mod journey;
pub mod catalog;
pub mod memory_catalog;

pub use ids::{JourneyKey, RouteId, StationId, TicketId, TrainNumber};
pub use route::{Route, Station, StationStop};
pub use train::{TierCapacity, Train};
pub use passenger::{Gender, Passenger};
pub use preference::{SeatPosition, SeatPreference};
pub use status::TicketStatus;
pub use journey::JourneyRequest;
pub use catalog::{Catalog, CatalogError, RouteCatalog, TrainCatalog};
pub use memory_catalog::InMemoryCatalog;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
