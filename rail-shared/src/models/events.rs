use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What happened to a ticket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketEventKind {
    Booked,
    Promoted,
    Cancelled,
}

/// Broadcast whenever a ticket changes tier
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TicketEvent {
    pub ticket_id: Uuid,
    pub pnr: String,
    pub train_number: u32,
    pub journey_date: NaiveDate,
    pub kind: TicketEventKind,
    pub status: String,
    pub seat: String,
    pub timestamp: i64,
}

impl TicketEvent {
    /// Routing key for downstream consumers, one stream per train and date
    pub fn partition_key(&self) -> String {
        format!("{}_{}", self.train_number, self.journey_date.format("%Y-%m-%d"))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = TicketEvent {
            ticket_id: Uuid::new_v4(),
            pnr: "A1B2C3".to_string(),
            train_number: 12007,
            journey_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            kind: TicketEventKind::Promoted,
            status: "CONFIRMED".to_string(),
            seat: "C1-W1".to_string(),
            timestamp: 0,
        };

        let json = event.to_json().unwrap();
        assert!(json.contains("\"kind\":\"PROMOTED\""));
        assert_eq!(event.partition_key(), "12007_2026-01-15");

        let parsed: TicketEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind, TicketEventKind::Promoted);
        assert_eq!(parsed.seat, "C1-W1");
    }
}
