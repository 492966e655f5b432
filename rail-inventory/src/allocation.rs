use rail_core::{SeatPreference, TierCapacity};
use serde::{Deserialize, Serialize};

use crate::queues::TierQueues;
use crate::seats::SeatId;
use crate::segments::SegmentKey;
use crate::store::SeatInventory;

/// Free capacity per tier for one journey
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Availability {
    pub confirmed: u32,
    pub rac: u32,
    pub waiting: u32,
}

/// Seat decisions over a multi-segment journey. Holds no state of its own.
pub struct AllocationEngine;

impl AllocationEngine {
    /// True only if every segment has at least one unbooked confirmed seat
    pub fn is_confirmed_available(inventory: &SeatInventory, segments: &[SegmentKey]) -> bool {
        !segments.is_empty()
            && segments
                .iter()
                .all(|segment| inventory.free_confirmed(segment).is_some_and(|free| free > 0))
    }

    /// Pick one seat free on every segment of the journey.
    ///
    /// Tries the passenger's preference first and falls back to any seat.
    pub fn select_seat(
        inventory: &SeatInventory,
        segments: &[SegmentKey],
        preference: SeatPreference,
    ) -> Option<SeatId> {
        Self::select_matching(inventory, segments, preference).or_else(|| {
            if preference.is_specific() {
                Self::select_matching(inventory, segments, SeatPreference::NoPreference)
            } else {
                None
            }
        })
    }

    fn select_matching(
        inventory: &SeatInventory,
        segments: &[SegmentKey],
        preference: SeatPreference,
    ) -> Option<SeatId> {
        let (first, rest) = segments.split_first()?;

        let mut candidates: Vec<SeatId> = inventory
            .seats(first)?
            .iter()
            .filter(|seat| preference.accepts(seat.position) && !inventory.is_booked(first, seat))
            .copied()
            .collect();

        for segment in rest {
            if candidates.is_empty() {
                break;
            }
            candidates.retain(|seat| inventory.is_free(segment, seat));
        }

        candidates.first().copied()
    }

    /// Reporting view of free capacity.
    ///
    /// Confirmed is bounded by the tightest segment; a segment that was never
    /// initialized counts as fully free.
    pub fn availability(
        inventory: &SeatInventory,
        queues: &TierQueues,
        capacity: TierCapacity,
        segments: &[SegmentKey],
    ) -> Availability {
        let confirmed = segments
            .iter()
            .map(|segment| {
                inventory
                    .free_confirmed(segment)
                    .unwrap_or(capacity.confirmed as usize)
            })
            .min()
            .unwrap_or(0);

        Availability {
            confirmed: confirmed as u32,
            rac: capacity.rac.saturating_sub(queues.rac_len() as u32),
            waiting: capacity.waiting.saturating_sub(queues.waiting_len() as u32),
        }
    }
}
