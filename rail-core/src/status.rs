use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking tier a ticket currently sits in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Confirmed,
    Rac,
    WaitingList,
    Cancelled,
}

impl TicketStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Confirmed => "CONFIRMED",
            TicketStatus::Rac => "RAC",
            TicketStatus::WaitingList => "WAITING_LIST",
            TicketStatus::Cancelled => "CANCELLED",
        }
    }

    /// Cancelled is terminal; everything else can still move
    pub fn is_active(self) -> bool {
        self != TicketStatus::Cancelled
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
