use serde::{Deserialize, Serialize};

use crate::ids::{RouteId, TrainNumber};

/// How many passengers each booking tier can hold for one run of a train
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TierCapacity {
    pub confirmed: u32,
    pub rac: u32,
    pub waiting: u32,
}

impl TierCapacity {
    pub fn new(confirmed: u32, rac: u32, waiting: u32) -> Self {
        Self { confirmed, rac, waiting }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Train {
    pub number: TrainNumber,
    pub name: String,
    pub route_id: RouteId,
    pub capacity: TierCapacity,
}
