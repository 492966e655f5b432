use chrono::{DateTime, NaiveDate, Utc};
use rail_core::{JourneyKey, Passenger, SeatPreference, Station, TicketId, TicketStatus, TrainNumber};
use rail_inventory::{SeatAssignment, SegmentKey};
use serde::{Deserialize, Serialize};

/// One entry in a ticket's status history
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusChange {
    pub status: TicketStatus,
    pub at: DateTime<Utc>,
}

/// A booked journey.
///
/// Everything except `status`, `seat` and `updated_at` is fixed when the ticket
/// is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub pnr: String,
    pub train_number: TrainNumber,
    pub train_name: String,
    pub passenger: Passenger,
    pub source: Station,
    pub destination: Station,
    pub journey_date: NaiveDate,
    pub preference: SeatPreference,
    pub segments: Vec<SegmentKey>,
    pub status: TicketStatus,
    pub seat: SeatAssignment,
    pub booked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    pub fn key(&self) -> JourneyKey {
        JourneyKey::new(self.train_number, self.journey_date)
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// One-line summary for logs and booking history listings
    pub fn summary(&self) -> String {
        format!(
            "PNR {} | {} {} | {} -> {} | {} | {} {}",
            self.pnr,
            self.train_number,
            self.train_name,
            self.source.name,
            self.destination.name,
            self.journey_date.format("%Y-%m-%d"),
            self.status,
            self.seat.label()
        )
    }
}

/// The tier a seat assignment belongs to
pub fn status_for(seat: &SeatAssignment) -> TicketStatus {
    match seat {
        SeatAssignment::Confirmed { .. } => TicketStatus::Confirmed,
        SeatAssignment::Rac { .. } => TicketStatus::Rac,
        SeatAssignment::Waiting { .. } => TicketStatus::WaitingList,
    }
}

/// A ticket moved up a tier by a cancellation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Promotion {
    pub ticket: Ticket,
    pub from: TicketStatus,
}

/// Outcome of a successful cancellation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cancellation {
    pub ticket: Ticket,
    pub previous_status: TicketStatus,
    pub promotions: Vec<Promotion>,
    /// Set to the RAC head when no queued RAC passenger fits the freed seat
    pub stalled: Option<TicketId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rail_core::{Gender, SeatPosition, StationId, StationStop};
    use rail_inventory::SeatId;

    #[test]
    fn test_summary_and_key() {
        let now = Utc::now();
        let time = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        let ticket = Ticket {
            id: TicketId::new(),
            pnr: "Q7X2KD".to_string(),
            train_number: TrainNumber(12007),
            train_name: "Shatabdi Express".to_string(),
            passenger: Passenger::new("u1", "Ravi", 34, Gender::Male),
            source: Station::new(StationId(1), StationStop::origin("Chennai", time)),
            destination: Station::new(StationId(2), StationStop::terminus("Vellore", time)),
            journey_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            preference: SeatPreference::Window,
            segments: vec![SegmentKey::new(StationId(1), StationId(2))],
            status: TicketStatus::Confirmed,
            seat: SeatAssignment::Confirmed {
                seat: SeatId { coach: 1, position: SeatPosition::Window, number: 1 },
            },
            booked_at: now,
            updated_at: now,
        };

        assert_eq!(ticket.key().to_string(), "12007_2026-01-15");
        assert_eq!(
            ticket.summary(),
            "PNR Q7X2KD | 12007 Shatabdi Express | Chennai -> Vellore | 2026-01-15 | CONFIRMED C1-W1"
        );
        assert_eq!(status_for(&ticket.seat), TicketStatus::Confirmed);
        assert_eq!(status_for(&SeatAssignment::rac(3)), TicketStatus::Rac);
        assert_eq!(status_for(&SeatAssignment::waiting(1)), TicketStatus::WaitingList);

        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["status"], "CONFIRMED");
        assert_eq!(json["seat"]["kind"], "CONFIRMED");
        assert_eq!(json["preference"], "window");
    }
}
