use rail_core::{CatalogError, JourneyKey, RouteId, StationId, TicketId, TrainNumber};
use rail_inventory::InventoryError;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("No route from {from} to {to} on train {train}")]
    InvalidRoute {
        train: TrainNumber,
        from: StationId,
        to: StationId,
    },

    #[error("All booking tiers are full for {key}")]
    CapacityExhausted { key: JourneyKey },

    #[error("Ticket not found: {0}")]
    UnknownTicket(TicketId),

    #[error("Ticket already cancelled: {0}")]
    AlreadyCancelled(TicketId),

    /// Each segment has a free confirmed seat but none is free for the whole
    /// journey. Reachable on valid input once partial journeys fragment a train.
    #[error("No seat free across the whole journey on {key}")]
    NoSeatAvailable { key: JourneyKey },

    #[error("Train not found: {0}")]
    UnknownTrain(TrainNumber),

    #[error("Route {route} for train {train} not found")]
    UnknownRoute { train: TrainNumber, route: RouteId },

    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

pub type BookingResult<T> = Result<T, BookingError>;
