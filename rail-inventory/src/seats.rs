use rail_core::SeatPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A confirmed-class seat, rendered as `C{coach}-{W|M|A}{number}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId {
    pub coach: u32,
    pub position: SeatPosition,
    pub number: u8,
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}-{}{}", self.coach, self.position.code(), self.number)
    }
}

/// Confirmed seats for one segment, in allocation order.
///
/// Each coach holds one window, middle and aisle seat before the next coach starts.
pub fn generate_confirmed_seats(count: u32) -> Vec<SeatId> {
    let per_coach = SeatPosition::CYCLE.len() as u32;
    (0..count)
        .map(|i| {
            let slot = (i % per_coach) as usize;
            SeatId {
                coach: i / per_coach + 1,
                position: SeatPosition::CYCLE[slot],
                number: slot as u8 + 1,
            }
        })
        .collect()
}

/// A physical seat shared by two RAC passengers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RacBerth(pub u32);

impl RacBerth {
    /// Queue positions 2k-1 and 2k share berth k
    pub fn for_position(position: u32) -> Self {
        RacBerth(position.div_ceil(2))
    }
}

impl fmt::Display for RacBerth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RAC-SEAT-{}", self.0)
    }
}

/// Where a ticket currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatAssignment {
    Confirmed { seat: SeatId },
    Rac { position: u32, berth: RacBerth },
    Waiting { position: u32 },
}

impl SeatAssignment {
    pub fn rac(position: u32) -> Self {
        SeatAssignment::Rac {
            position,
            berth: RacBerth::for_position(position),
        }
    }

    pub fn waiting(position: u32) -> Self {
        SeatAssignment::Waiting { position }
    }

    /// Short passenger-facing label: `C1-W1`, `RAC3`, `WL2`
    pub fn label(&self) -> String {
        match self {
            SeatAssignment::Confirmed { seat } => seat.to_string(),
            SeatAssignment::Rac { position, .. } => format!("RAC{}", position),
            SeatAssignment::Waiting { position } => format!("WL{}", position),
        }
    }

    pub fn confirmed_seat(&self) -> Option<SeatId> {
        match self {
            SeatAssignment::Confirmed { seat } => Some(*seat),
            _ => None,
        }
    }

    pub fn rac_berth(&self) -> Option<RacBerth> {
        match self {
            SeatAssignment::Rac { berth, .. } => Some(*berth),
            _ => None,
        }
    }
}

impl fmt::Display for SeatAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatAssignment::Confirmed { seat } => write!(f, "{}", seat),
            SeatAssignment::Rac { position, berth } => write!(f, "{} (RAC{})", berth, position),
            SeatAssignment::Waiting { position } => write!(f, "WL{}", position),
        }
    }
}
