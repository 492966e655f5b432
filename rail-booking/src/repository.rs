use chrono::Utc;
use parking_lot::RwLock;
use rail_core::{JourneyKey, TicketId, TicketStatus};
use rail_inventory::SeatAssignment;
use std::collections::HashMap;

use crate::models::{StatusChange, Ticket};

#[derive(Default)]
struct Tables {
    tickets: HashMap<TicketId, Ticket>,
    history: HashMap<TicketId, Vec<StatusChange>>,
    by_pnr: HashMap<String, TicketId>,
    order: Vec<TicketId>,
}

/// In-memory ticket store with per-ticket status history.
///
/// Callers that also hold a journey lock must take it before touching the
/// repository.
#[derive(Default)]
pub struct TicketRepository {
    tables: RwLock<Tables>,
}

impl TicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new ticket and record its initial status.
    ///
    /// Returns false and stores nothing if the PNR is already taken.
    pub fn insert(&self, ticket: Ticket) -> bool {
        let mut tables = self.tables.write();
        if tables.by_pnr.contains_key(&ticket.pnr) {
            return false;
        }
        tables
            .history
            .entry(ticket.id)
            .or_default()
            .push(StatusChange { status: ticket.status, at: ticket.booked_at });
        tables.by_pnr.insert(ticket.pnr.clone(), ticket.id);
        tables.order.push(ticket.id);
        tables.tickets.insert(ticket.id, ticket);
        true
    }

    pub fn get(&self, id: TicketId) -> Option<Ticket> {
        self.tables.read().tickets.get(&id).cloned()
    }

    pub fn find_by_pnr(&self, pnr: &str) -> Option<Ticket> {
        let tables = self.tables.read();
        let id = tables.by_pnr.get(&pnr.trim().to_uppercase())?;
        tables.tickets.get(id).cloned()
    }

    /// Booking history for one user, newest first
    pub fn find_by_user(&self, user_id: &str) -> Vec<Ticket> {
        let tables = self.tables.read();
        tables
            .order
            .iter()
            .rev()
            .filter_map(|id| tables.tickets.get(id))
            .filter(|ticket| ticket.passenger.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Every ticket for one train-day, in booking order
    pub fn find_by_journey(&self, key: JourneyKey) -> Vec<Ticket> {
        let tables = self.tables.read();
        tables
            .order
            .iter()
            .filter_map(|id| tables.tickets.get(id))
            .filter(|ticket| ticket.key() == key)
            .cloned()
            .collect()
    }

    pub fn history(&self, id: TicketId) -> Vec<StatusChange> {
        self.tables.read().history.get(&id).cloned().unwrap_or_default()
    }

    /// Move a ticket to a new tier and append the change to its history
    pub fn transition(&self, id: TicketId, status: TicketStatus, seat: SeatAssignment) -> Option<Ticket> {
        let mut tables = self.tables.write();
        let now = Utc::now();
        let ticket = tables.tickets.get_mut(&id)?;
        ticket.status = status;
        ticket.seat = seat;
        ticket.updated_at = now;
        let updated = ticket.clone();
        tables.history.entry(id).or_default().push(StatusChange { status, at: now });
        Some(updated)
    }

    /// Update the queue label only. Not a status change, so history is untouched.
    pub fn reassign_seat(&self, id: TicketId, seat: SeatAssignment) -> Option<Ticket> {
        let mut tables = self.tables.write();
        let ticket = tables.tickets.get_mut(&id)?;
        ticket.seat = seat;
        ticket.updated_at = Utc::now();
        Some(ticket.clone())
    }

}
