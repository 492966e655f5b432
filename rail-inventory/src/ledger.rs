use parking_lot::{Mutex, RwLock};
use rail_core::{JourneyKey, TierCapacity};
use std::collections::HashMap;
use std::sync::Arc;

use crate::allocation::{AllocationEngine, Availability};
use crate::queues::TierQueues;
use crate::segments::SegmentKey;
use crate::store::SeatInventory;

/// Everything that changes when a ticket is booked or cancelled on one train-day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyInventory {
    pub key: JourneyKey,
    pub capacity: TierCapacity,
    pub seats: SeatInventory,
    pub queues: TierQueues,
}

impl JourneyInventory {
    pub fn new(key: JourneyKey, capacity: TierCapacity) -> Self {
        Self {
            key,
            capacity,
            seats: SeatInventory::new(),
            queues: TierQueues::new(),
        }
    }

    pub fn availability(&self, segments: &[SegmentKey]) -> Availability {
        AllocationEngine::availability(&self.seats, &self.queues, self.capacity, segments)
    }
}

pub type SharedJourney = Arc<Mutex<JourneyInventory>>;

/// Inventory for every train-day, one lock per key.
///
/// The outer map is only write-locked to insert a new key; all booking work
/// happens under the key's own mutex, so different trains or dates never
/// contend with each other.
#[derive(Default)]
pub struct InventoryLedger {
    journeys: RwLock<HashMap<JourneyKey, SharedJourney>>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the inventory for `key` and make sure every route segment has seats.
    ///
    /// Safe to call repeatedly; capacities are fixed by the first call for a key
    /// and existing bookings are never reset.
    pub fn initialize(
        &self,
        key: JourneyKey,
        segments: &[SegmentKey],
        capacity: TierCapacity,
    ) -> SharedJourney {
        let journey = match self.get(&key) {
            Some(journey) => journey,
            None => {
                let mut journeys = self.journeys.write();
                journeys
                    .entry(key)
                    .or_insert_with(|| {
                        tracing::info!(
                            key = %key,
                            confirmed = capacity.confirmed,
                            rac = capacity.rac,
                            waiting = capacity.waiting,
                            "Inventory created"
                        );
                        Arc::new(Mutex::new(JourneyInventory::new(key, capacity)))
                    })
                    .clone()
            }
        };

        {
            let mut guard = journey.lock();
            let confirmed = guard.capacity.confirmed;
            let populated = guard.seats.ensure_segments(segments, confirmed);
            if populated > 0 {
                tracing::debug!(key = %key, populated, "Segments populated");
            }
        }

        journey
    }

    pub fn get(&self, key: &JourneyKey) -> Option<SharedJourney> {
        self.journeys.read().get(key).cloned()
    }

    pub fn contains(&self, key: &JourneyKey) -> bool {
        self.journeys.read().contains_key(key)
    }

    pub fn keys(&self) -> Vec<JourneyKey> {
        let mut keys: Vec<JourneyKey> = self.journeys.read().keys().copied().collect();
        keys.sort();
        keys
    }
}
