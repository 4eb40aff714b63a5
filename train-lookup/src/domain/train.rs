//! The train schedule record.

use std::fmt;

use super::{StationId, TimeOfDay};

/// Numeric train identifier.
///
/// Unlike [`StationId`], no range constraint applies; the dataset may carry
/// any integer here, and duplicates are permitted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainId(i64);

impl TrainId {
    pub const fn new(id: i64) -> Self {
        TrainId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single schedule record: one train running between two stations.
///
/// Records are immutable once decoded; the dataset is a read-only sequence
/// of these.
#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    pub train_id: TrainId,
    pub departure_station: StationId,
    pub arrival_station: StationId,
    pub price: f32,
    pub arrival_time: TimeOfDay,
    pub departure_time: TimeOfDay,
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrainID: {} DepartureStationID: {} ArrivalStationID: {} Price: {:.2} ArrivalTime: {} DepartureTime: {}",
            self.train_id,
            self.departure_station,
            self.arrival_station,
            self.price,
            self.arrival_time,
            self.departure_time
        )
    }
}
