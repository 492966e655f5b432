use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::StationId;
use crate::preference::SeatPreference;

/// What the passenger asked for: where from, where to, which day, which seat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JourneyRequest {
    pub source: StationId,
    pub destination: StationId,
    pub date: NaiveDate,
    #[serde(default)]
    pub preference: SeatPreference,
}

impl JourneyRequest {
    pub fn new(source: StationId, destination: StationId, date: NaiveDate) -> Self {
        Self {
            source,
            destination,
            date,
            preference: SeatPreference::NoPreference,
        }
    }

    pub fn with_preference(mut self, preference: SeatPreference) -> Self {
        self.preference = preference;
        self
    }
}
