use chrono::{NaiveDate, Utc};
use rail_core::{
    Catalog, JourneyKey, JourneyRequest, Passenger, Route, RouteId, StationId, TicketId, TicketStatus,
    TierCapacity, Train, TrainNumber,
};
use rail_inventory::{
    resolve_segments, route_segments, AllocationEngine, Availability, InventoryError, InventoryLedger,
    JourneyInventory, QueueEntry, RacBerth, SeatAssignment, SeatInventory, SegmentKey, TierQueues,
};
use rail_shared::{TicketEvent, TicketEventKind};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::cascade::PromotionCascade;
use crate::error::{BookingError, BookingResult};
use crate::events::EventPublisher;
use crate::models::{status_for, Cancellation, StatusChange, Ticket};
use crate::pnr::generate_pnr;
use crate::repository::TicketRepository;

/// Entry point for booking and cancelling tickets.
///
/// Catalog lookups are awaited before any lock is taken. Everything that
/// touches seats or queues for one train-day then runs under that key's lock,
/// so a booking's allocate-then-mark and a cancellation's whole cascade are
/// atomic with respect to each other.
pub struct BookingOrchestrator {
    catalog: Arc<dyn Catalog>,
    ledger: Arc<InventoryLedger>,
    tickets: Arc<TicketRepository>,
    events: EventPublisher,
}

impl BookingOrchestrator {
    pub fn new(catalog: Arc<dyn Catalog>, event_buffer: usize) -> Self {
        Self {
            catalog,
            ledger: Arc::new(InventoryLedger::new()),
            tickets: Arc::new(TicketRepository::new()),
            events: EventPublisher::new(event_buffer),
        }
    }

    /// Set up seat inventory for a train-day. Repeat calls keep existing bookings.
    pub async fn initialize_inventory(
        &self,
        train: TrainNumber,
        date: NaiveDate,
        route_id: RouteId,
        capacity: TierCapacity,
    ) -> BookingResult<()> {
        let route = self
            .catalog
            .route(route_id)
            .await?
            .ok_or(BookingError::UnknownRoute { train, route: route_id })?;

        let key = JourneyKey::new(train, date);
        self.ledger.initialize(key, &route_segments(&route.stations), capacity);
        Ok(())
    }

    /// Segments a journey crosses, empty if the stations are not in travel order on the route
    pub async fn get_segments_between(
        &self,
        train: TrainNumber,
        source: StationId,
        destination: StationId,
    ) -> BookingResult<Vec<SegmentKey>> {
        let (_, route) = self.train_and_route(train).await?;
        Ok(resolve_segments(&route.stations, source, destination))
    }

    /// Free capacity per tier for a journey, `None` when the journey is not on the route
    pub async fn get_availability(
        &self,
        train: TrainNumber,
        date: NaiveDate,
        source: StationId,
        destination: StationId,
    ) -> BookingResult<Option<Availability>> {
        let (train_info, route) = self.train_and_route(train).await?;
        let segments = resolve_segments(&route.stations, source, destination);
        if segments.is_empty() {
            return Ok(None);
        }

        let availability = match self.ledger.get(&JourneyKey::new(train, date)) {
            Some(journey) => {
                let guard = journey.lock();
                guard.availability(&segments)
            }
            None => AllocationEngine::availability(
                &SeatInventory::new(),
                &TierQueues::new(),
                train_info.capacity,
                &segments,
            ),
        };
        Ok(Some(availability))
    }

    /// Book one passenger into the best tier with room.
    ///
    /// Returns `NoSeatAvailable` when every segment still has a free confirmed
    /// seat but no single seat is free end to end. The booking is refused rather
    /// than queued, even if RAC has room, and no ticket is created.
    pub async fn book_ticket(
        &self,
        train: TrainNumber,
        passenger: Passenger,
        journey: JourneyRequest,
    ) -> BookingResult<Ticket> {
        let (train_info, route) = self.train_and_route(train).await?;
        let segments = resolve_segments(&route.stations, journey.source, journey.destination);
        let stations = route
            .station(journey.source)
            .cloned()
            .zip(route.station(journey.destination).cloned());

        let (source, destination) = match stations {
            Some(pair) if !segments.is_empty() => pair,
            _ => {
                warn!(train = %train, from = %journey.source, to = %journey.destination, "Journey not on route");
                return Err(BookingError::InvalidRoute {
                    train,
                    from: journey.source,
                    to: journey.destination,
                });
            }
        };

        let key = JourneyKey::new(train, journey.date);
        let shared = self
            .ledger
            .initialize(key, &route_segments(&route.stations), train_info.capacity);

        let ticket = {
            let mut guard = shared.lock();
            let id = TicketId::new();
            let seat = Self::place(&mut guard, id, &segments, &journey)?;
            let now = Utc::now();
            let ticket = Ticket {
                id,
                pnr: String::new(),
                train_number: train,
                train_name: train_info.name.clone(),
                passenger,
                source,
                destination,
                journey_date: journey.date,
                preference: journey.preference,
                segments,
                status: status_for(&seat),
                seat,
                booked_at: now,
                updated_at: now,
            };
            self.store_with_pnr(ticket)
        };

        info!(
            pnr = %ticket.pnr,
            key = %key,
            passenger = %ticket.passenger.name,
            status = %ticket.status,
            seat = %ticket.seat,
            "Ticket booked"
        );
        debug!(summary = %ticket.summary(), "Ticket stored");
        self.events.publish(&ticket, TicketEventKind::Booked);
        Ok(ticket)
    }

    /// Tier decision for a new booking: confirmed, then RAC, then waiting list
    fn place(
        journey: &mut JourneyInventory,
        id: TicketId,
        segments: &[SegmentKey],
        request: &JourneyRequest,
    ) -> BookingResult<SeatAssignment> {
        let key = journey.key;

        if AllocationEngine::is_confirmed_available(&journey.seats, segments) {
            let seat = AllocationEngine::select_seat(&journey.seats, segments, request.preference)
                .ok_or(BookingError::NoSeatAvailable { key })?;
            journey.seats.book(seat, segments)?;
            return Ok(SeatAssignment::Confirmed { seat });
        }

        if (journey.queues.rac_len() as u32) < journey.capacity.rac {
            let entry = QueueEntry::new(id, segments.to_vec(), request.preference);
            let position = journey.queues.push_rac(entry);
            journey
                .seats
                .hold_rac_berth(RacBerth::for_position(position), id, segments);
            return Ok(SeatAssignment::rac(position));
        }

        if (journey.queues.waiting_len() as u32) < journey.capacity.waiting {
            let entry = QueueEntry::new(id, segments.to_vec(), request.preference);
            let position = journey.queues.push_waiting(entry);
            return Ok(SeatAssignment::waiting(position));
        }

        debug!(key = %key, "Every tier full");
        Err(BookingError::CapacityExhausted { key })
    }

    /// Cancel a ticket and promote whoever can move up behind it.
    ///
    /// Unknown and already-cancelled tickets are rejected without touching any state.
    pub fn cancel_ticket(&self, id: TicketId) -> BookingResult<Cancellation> {
        let ticket = self.tickets.get(id).ok_or(BookingError::UnknownTicket(id))?;
        if !ticket.is_active() {
            return Err(BookingError::AlreadyCancelled(id));
        }

        let key = ticket.key();
        let shared = self
            .ledger
            .get(&key)
            .ok_or(InventoryError::UnknownJourney(key))?;

        let cancellation = {
            let mut guard = shared.lock();
            // Another cancel may have won the race for the lock
            let current = self.tickets.get(id).ok_or(BookingError::UnknownTicket(id))?;
            PromotionCascade::new(&mut guard, &self.tickets).cancel(current)?
        };

        info!(
            pnr = %cancellation.ticket.pnr,
            key = %key,
            previous = %cancellation.previous_status,
            promoted = cancellation.promotions.len(),
            "Ticket cancelled"
        );

        self.events.publish(&cancellation.ticket, TicketEventKind::Cancelled);
        for promotion in &cancellation.promotions {
            self.events.publish(&promotion.ticket, TicketEventKind::Promoted);
        }
        Ok(cancellation)
    }

    pub fn ticket(&self, id: TicketId) -> Option<Ticket> {
        self.tickets.get(id)
    }

    pub fn ticket_by_pnr(&self, pnr: &str) -> Option<Ticket> {
        self.tickets.find_by_pnr(pnr)
    }

    pub fn ticket_history(&self, id: TicketId) -> Vec<StatusChange> {
        self.tickets.history(id)
    }

    /// A user's bookings, newest first
    pub fn tickets_for_user(&self, user_id: &str) -> Vec<Ticket> {
        self.tickets.find_by_user(user_id)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TicketEvent> {
        self.events.subscribe()
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    /// Count of active tickets per tier for one train-day
    pub fn tier_counts(&self, train: TrainNumber, date: NaiveDate) -> (usize, usize, usize) {
        let key = JourneyKey::new(train, date);
        self.tickets
            .find_by_journey(key)
            .iter()
            .fold((0, 0, 0), |(c, r, w), t| match t.status {
                TicketStatus::Confirmed => (c + 1, r, w),
                TicketStatus::Rac => (c, r + 1, w),
                TicketStatus::WaitingList => (c, r, w + 1),
                TicketStatus::Cancelled => (c, r, w),
            })
    }

    async fn train_and_route(&self, number: TrainNumber) -> BookingResult<(Train, Route)> {
        let train = self
            .catalog
            .train(number)
            .await?
            .ok_or(BookingError::UnknownTrain(number))?;
        let route = self
            .catalog
            .route(train.route_id)
            .await?
            .ok_or(BookingError::UnknownRoute { train: number, route: train.route_id })?;
        Ok((train, route))
    }

    /// Draw PNRs until one is free. The check and the insert happen under one repository lock.
    fn store_with_pnr(&self, mut ticket: Ticket) -> Ticket {
        let mut rng = rand::thread_rng();
        loop {
            ticket.pnr = generate_pnr(&mut rng);
            if self.tickets.insert(ticket.clone()) {
                return ticket;
            }
            debug!(pnr = %ticket.pnr, "PNR collision, drawing again");
        }
    }
}
