//! Dataset loading.
//!
//! The schedule file is read once per invocation and decoded fully before
//! any search runs. Any problem with the file is unrecoverable at this
//! point, so errors propagate to the entry point, which decides whether to
//! terminate the process.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::Train;

use super::convert::{DecodeError, decode_record};
use super::types::TrainRecord;

/// Default schedule file name, resolved against the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data.json";

/// Error while loading the schedule dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file is missing or unreadable
    #[error("cannot read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not syntactically valid JSON, or not an array of objects
    #[error("dataset is not a valid JSON array: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed to decode
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        source: DecodeError,
    },
}

/// Load and decode the schedule file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Train>, DatasetError> {
    let bytes = fs::read(path)?;
    from_bytes(&bytes)
}

/// Decode a schedule dataset from raw JSON bytes.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<Train>, DatasetError> {
    let records: Vec<TrainRecord> = serde_json::from_slice(bytes)?;

    let mut trains = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let train =
            decode_record(record).map_err(|source| DatasetError::Record { index, source })?;
        trains.push(train);
    }

    debug!(records = trains.len(), "dataset loaded");

    Ok(trains)
}
