use rail_core::JourneyKey;

use crate::seats::SeatId;
use crate::segments::SegmentKey;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("No inventory for {0}")]
    UnknownJourney(JourneyKey),

    #[error("Segment not initialized: {0}")]
    UnknownSegment(SegmentKey),

    #[error("Seat {seat} does not exist on segment {segment}")]
    UnknownSeat {
        seat: SeatId,
        segment: SegmentKey,
    },

    #[error("Seat {seat} already booked on segment {segment}")]
    SeatTaken {
        seat: SeatId,
        segment: SegmentKey,
    },
}
