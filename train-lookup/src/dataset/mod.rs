//! The local schedule dataset.
//!
//! This module reads the `data.json` schedule file and turns it into
//! validated domain records.
//!
//! Key characteristics of the source:
//! - It is **loosely typed** - any field of a record may carry a value of
//!   the wrong JSON type, and decoding must report which field is bad
//! - Unrecognized keys are ignored; absent keys decode to zero values
//! - Times are "HH:MM:SS" strings with no date component

mod convert;
mod loader;
mod types;

pub use convert::{DecodeError, decode_record};
pub use loader::{DEFAULT_DATASET_PATH, DatasetError, from_bytes, load};
pub use types::TrainRecord;
