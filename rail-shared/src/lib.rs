pub mod models;
pub mod pii;

pub use models::events::{TicketEvent, TicketEventKind};
pub use pii::Masked;
