use rail_core::TicketId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::InventoryError;
use crate::seats::{generate_confirmed_seats, RacBerth, SeatId};
use crate::segments::SegmentKey;

/// Seat occupancy for one train on one day.
///
/// Confirmed seats are generated per segment; a seat is free on a segment when
/// it is in that segment's list and not in its booked set. RAC berths are
/// tracked separately by the tickets holding them so a berth stays occupied
/// while either partner is still on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatInventory {
    seats: HashMap<SegmentKey, Vec<SeatId>>,
    booked: HashMap<SegmentKey, HashSet<SeatId>>,
    rac_holders: HashMap<SegmentKey, BTreeMap<RacBerth, BTreeSet<TicketId>>>,
}

impl SeatInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate seats for every segment that has none yet.
    ///
    /// Populated segments are left alone, so calling this again never resets
    /// bookings. Returns how many segments were newly populated.
    pub fn ensure_segments(&mut self, segments: &[SegmentKey], confirmed: u32) -> usize {
        let mut populated = 0;
        for segment in segments {
            if !self.seats.contains_key(segment) {
                self.seats.insert(*segment, generate_confirmed_seats(confirmed));
                populated += 1;
            }
            self.booked.entry(*segment).or_default();
        }
        populated
    }

    pub fn seats(&self, segment: &SegmentKey) -> Option<&[SeatId]> {
        self.seats.get(segment).map(Vec::as_slice)
    }

    pub fn booked_count(&self, segment: &SegmentKey) -> usize {
        self.booked.get(segment).map_or(0, HashSet::len)
    }

    pub fn is_booked(&self, segment: &SegmentKey, seat: &SeatId) -> bool {
        self.booked.get(segment).is_some_and(|booked| booked.contains(seat))
    }

    /// Seat exists on the segment and nobody holds it there
    pub fn is_free(&self, segment: &SegmentKey, seat: &SeatId) -> bool {
        self.seats
            .get(segment)
            .is_some_and(|seats| seats.contains(seat))
            && !self.is_booked(segment, seat)
    }

    /// Unbooked confirmed seats on a segment, `None` if the segment was never initialized
    pub fn free_confirmed(&self, segment: &SegmentKey) -> Option<usize> {
        let total = self.seats.get(segment)?.len();
        Some(total.saturating_sub(self.booked_count(segment)))
    }

    /// Mark `seat` occupied on every segment.
    ///
    /// Validates all segments first and changes nothing on failure.
    pub fn book(&mut self, seat: SeatId, segments: &[SegmentKey]) -> Result<(), InventoryError> {
        for segment in segments {
            let seats = self
                .seats
                .get(segment)
                .ok_or(InventoryError::UnknownSegment(*segment))?;
            if !seats.contains(&seat) {
                return Err(InventoryError::UnknownSeat { seat, segment: *segment });
            }
            if self.is_booked(segment, &seat) {
                return Err(InventoryError::SeatTaken { seat, segment: *segment });
            }
        }

        for segment in segments {
            self.booked.entry(*segment).or_default().insert(seat);
        }
        Ok(())
    }

    /// Free `seat` on every segment. Returns the number of segments it was booked on.
    pub fn release(&mut self, seat: SeatId, segments: &[SegmentKey]) -> usize {
        segments
            .iter()
            .filter(|segment| {
                self.booked
                    .get_mut(*segment)
                    .is_some_and(|booked| booked.remove(&seat))
            })
            .count()
    }

    pub fn hold_rac_berth(&mut self, berth: RacBerth, ticket: TicketId, segments: &[SegmentKey]) {
        for segment in segments {
            self.rac_holders
                .entry(*segment)
                .or_default()
                .entry(berth)
                .or_default()
                .insert(ticket);
        }
    }

    /// Drop `ticket`'s hold on a RAC berth.
    ///
    /// The berth is only freed on a segment once no partner still holds it
    /// there. Returns the segments where it became free.
    pub fn release_rac_berth(&mut self, berth: RacBerth, ticket: TicketId, segments: &[SegmentKey]) -> Vec<SegmentKey> {
        let mut freed = Vec::new();
        for segment in segments {
            let Some(berths) = self.rac_holders.get_mut(segment) else {
                continue;
            };
            let Some(holders) = berths.get_mut(&berth) else {
                continue;
            };
            if holders.remove(&ticket) && holders.is_empty() {
                berths.remove(&berth);
                freed.push(*segment);
            }
        }
        freed
    }

    pub fn rac_berth_holders(&self, segment: &SegmentKey, berth: RacBerth) -> usize {
        self.rac_holders
            .get(segment)
            .and_then(|berths| berths.get(&berth))
            .map_or(0, BTreeSet::len)
    }

    pub fn is_rac_berth_held(&self, segment: &SegmentKey, berth: RacBerth) -> bool {
        self.rac_berth_holders(segment, berth) > 0
    }
}
