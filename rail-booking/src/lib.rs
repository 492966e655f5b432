pub mod models;
pub mod repository;
pub mod pnr;
pub mod events;
pub mod error;
pub mod cascade;
pub mod orchestrator;

pub use models::{Cancellation, Promotion, StatusChange, Ticket};
pub use repository::TicketRepository;
pub use pnr::generate_pnr;
pub use events::EventPublisher;
pub use error::{BookingError, BookingResult};
pub use cascade::PromotionCascade;
pub use orchestrator::BookingOrchestrator;
