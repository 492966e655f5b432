use rail_core::{TicketId, TicketStatus};
use rail_inventory::{AllocationEngine, JourneyInventory, RacBerth, SeatAssignment};

use crate::error::{BookingError, BookingResult};
use crate::models::{Cancellation, Promotion, Ticket};
use crate::repository::TicketRepository;

enum RacPromotion {
    Promoted,
    Stalled(TicketId),
    Empty,
}

/// Cancels one ticket and moves the queues up behind it.
///
/// Runs entirely under the caller's journey lock. A freed confirmed seat goes
/// to the earliest RAC passenger it fits, and the RAC slot that opens goes to
/// the waiting-list head.
/// Remaining queue members are relabelled by rank afterwards.
pub struct PromotionCascade<'a> {
    journey: &'a mut JourneyInventory,
    tickets: &'a TicketRepository,
    promotions: Vec<Promotion>,
}

impl<'a> PromotionCascade<'a> {
    pub fn new(journey: &'a mut JourneyInventory, tickets: &'a TicketRepository) -> Self {
        Self {
            journey,
            tickets,
            promotions: Vec::new(),
        }
    }

    pub fn cancel(mut self, ticket: Ticket) -> BookingResult<Cancellation> {
        let previous_status = ticket.status;
        if !previous_status.is_active() {
            return Err(BookingError::AlreadyCancelled(ticket.id));
        }

        let cancelled = self
            .tickets
            .transition(ticket.id, TicketStatus::Cancelled, ticket.seat)
            .ok_or(BookingError::UnknownTicket(ticket.id))?;

        let mut stalled = None;
        match previous_status {
            TicketStatus::Confirmed => {
                if let Some(seat) = ticket.seat.confirmed_seat() {
                    self.journey.seats.release(seat, &ticket.segments);
                }
                match self.promote_from_rac()? {
                    RacPromotion::Promoted | RacPromotion::Empty => self.promote_from_waiting(),
                    RacPromotion::Stalled(id) => stalled = Some(id),
                }
            }
            TicketStatus::Rac => {
                self.journey.queues.remove_rac(ticket.id);
                if let Some(berth) = ticket.seat.rac_berth() {
                    self.journey.seats.release_rac_berth(berth, ticket.id, &ticket.segments);
                }
                self.relabel_rac();
                self.promote_from_waiting();
            }
            TicketStatus::WaitingList => {
                self.journey.queues.remove_waiting(ticket.id);
                self.relabel_waiting();
            }
            TicketStatus::Cancelled => {}
        }

        Ok(Cancellation {
            ticket: cancelled,
            previous_status,
            promotions: self.promotions,
            stalled,
        })
    }

    /// Seat the first RAC passenger, in queue order, whose whole journey has a free seat.
    ///
    /// Usually the head. An entry is passed over only when no seat covers its
    /// journey, so a freed seat never sits idle while someone queued could use it.
    fn promote_from_rac(&mut self) -> BookingResult<RacPromotion> {
        let head_id = match self.journey.queues.peek_rac() {
            Some(head) => head.ticket_id,
            None => return Ok(RacPromotion::Empty),
        };

        let JourneyInventory { seats, queues, key, .. } = &*self.journey;
        let found = queues.rac().find_map(|(_, entry)| {
            AllocationEngine::select_seat(seats, &entry.segments, entry.preference).map(|seat| (entry.clone(), seat))
        });

        let (head, seat) = match found {
            Some(found) => found,
            None => {
                tracing::warn!(key = %key, head = %head_id, "No RAC passenger fits the freed seat; promotion stalled");
                return Ok(RacPromotion::Stalled(head_id));
            }
        };
        if head.ticket_id != head_id {
            tracing::debug!(key = %key, head = %head_id, promoted = %head.ticket_id, "RAC head does not fit; promoting next in line");
        }

        self.journey.seats.book(seat, &head.segments)?;
        self.journey.queues.remove_rac(head.ticket_id);

        let held = self.tickets.get(head.ticket_id).and_then(|t| t.seat.rac_berth());
        if let Some(berth) = held {
            self.journey.seats.release_rac_berth(berth, head.ticket_id, &head.segments);
        }

        if let Some(ticket) = self.tickets.transition(
            head.ticket_id,
            TicketStatus::Confirmed,
            SeatAssignment::Confirmed { seat },
        ) {
            tracing::info!(pnr = %ticket.pnr, seat = %seat, "Promoted from RAC to confirmed");
            self.promotions.push(Promotion { ticket, from: TicketStatus::Rac });
        }

        self.relabel_rac();
        Ok(RacPromotion::Promoted)
    }

    /// Move the waiting-list head into a free RAC slot
    fn promote_from_waiting(&mut self) {
        if self.journey.queues.rac_len() as u32 >= self.journey.capacity.rac {
            return;
        }
        let entry = match self.journey.queues.pop_waiting() {
            Some(entry) => entry,
            None => return,
        };

        let ticket_id = entry.ticket_id;
        let segments = entry.segments.clone();
        let position = self.journey.queues.push_rac(entry);
        self.journey
            .seats
            .hold_rac_berth(RacBerth::for_position(position), ticket_id, &segments);

        if let Some(ticket) = self
            .tickets
            .transition(ticket_id, TicketStatus::Rac, SeatAssignment::rac(position))
        {
            tracing::info!(pnr = %ticket.pnr, position, "Promoted from waiting list to RAC");
            self.promotions.push(Promotion { ticket, from: TicketStatus::WaitingList });
        }

        self.relabel_waiting();
    }

    fn relabel_rac(&mut self) {
        let JourneyInventory { seats, queues, .. } = &mut *self.journey;
        for (position, entry) in queues.rac() {
            let current = match self.tickets.get(entry.ticket_id) {
                Some(ticket) => ticket.seat,
                None => continue,
            };
            let desired = SeatAssignment::rac(position);
            if current == desired {
                continue;
            }
            if let Some(berth) = current.rac_berth() {
                seats.release_rac_berth(berth, entry.ticket_id, &entry.segments);
            }
            seats.hold_rac_berth(RacBerth::for_position(position), entry.ticket_id, &entry.segments);
            self.tickets.reassign_seat(entry.ticket_id, desired);
        }
    }

    fn relabel_waiting(&mut self) {
        for (position, entry) in self.journey.queues.waiting() {
            let desired = SeatAssignment::waiting(position);
            let stale = self
                .tickets
                .get(entry.ticket_id)
                .is_some_and(|ticket| ticket.seat != desired);
            if stale {
                self.tickets.reassign_seat(entry.ticket_id, desired);
            }
        }
    }
}
