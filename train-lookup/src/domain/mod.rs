//! Domain types for the train lookup tool.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod station;
mod time;
mod train;

pub use station::{InvalidStationId, StationId};
pub use time::{TimeError, TimeOfDay};
pub use train::{Train, TrainId};
