use chrono::Utc;
use rail_shared::{TicketEvent, TicketEventKind};
use tokio::sync::broadcast;

use crate::models::Ticket;

/// Fans ticket status changes out to any number of subscribers
#[derive(Clone)]
pub struct EventPublisher {
    sender: broadcast::Sender<TicketEvent>,
}

impl EventPublisher {
    pub fn new(buffer: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TicketEvent> {
        self.sender.subscribe()
    }

    /// Publishing with nobody listening is fine; the event is dropped
    pub fn publish(&self, ticket: &Ticket, kind: TicketEventKind) {
        if self.sender.send(ticket_event(ticket, kind)).is_err() {
            tracing::trace!(pnr = %ticket.pnr, kind = ?kind, "No event subscribers");
        }
    }
}

pub fn ticket_event(ticket: &Ticket, kind: TicketEventKind) -> TicketEvent {
    TicketEvent {
        ticket_id: ticket.id.0,
        pnr: ticket.pnr.clone(),
        train_number: ticket.train_number.0,
        journey_date: ticket.journey_date,
        kind,
        status: ticket.status.as_str().to_string(),
        seat: ticket.seat.to_string(),
        timestamp: Utc::now().timestamp(),
    }
}
