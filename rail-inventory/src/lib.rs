pub mod segments;
pub mod seats;
pub mod store;
pub mod queues;
pub mod allocation;
pub mod ledger;
pub mod error;

pub use segments::{resolve_segments, route_segments, SegmentKey};
pub use seats::{generate_confirmed_seats, RacBerth, SeatAssignment, SeatId};
pub use store::SeatInventory;
pub use queues::{QueueEntry, TierQueues};
pub use allocation::{AllocationEngine, Availability};
pub use ledger::{InventoryLedger, JourneyInventory, SharedJourney};
pub use error::InventoryError;
