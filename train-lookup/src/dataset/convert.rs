//! Conversion from raw schedule records to domain types.
//!
//! This module handles the transformation of loosely-typed records into
//! validated [`Train`] values. Each field is checked against its expected
//! JSON type, and failures name the offending field.

use serde_json::Value;

use crate::domain::{StationId, TimeError, TimeOfDay, Train, TrainId};

use super::types::TrainRecord;

/// Error during record to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A numeric field carried a non-numeric value
    #[error("field {0} must be a number")]
    NotANumber(&'static str),

    /// A time field carried a non-string value
    #[error("field {0} must be a string")]
    NotAString(&'static str),

    /// A station field carried a negative identifier
    #[error("field {0} must be a non-negative station identifier")]
    NegativeStationId(&'static str),

    /// A time field failed to parse as "HH:MM:SS"
    #[error("field {0}: {1}")]
    InvalidTime(&'static str, TimeError),
}

impl DecodeError {
    /// The JSON key of the field that failed to decode.
    pub fn field(&self) -> &'static str {
        match self {
            DecodeError::NotANumber(field)
            | DecodeError::NotAString(field)
            | DecodeError::NegativeStationId(field)
            | DecodeError::InvalidTime(field, _) => field,
        }
    }
}

/// Convert a raw record to a domain [`Train`].
///
/// Fields absent from the record decode to zero values: integer 0, price
/// 0.0, midnight. Present fields must have the expected JSON type.
pub fn decode_record(record: &TrainRecord) -> Result<Train, DecodeError> {
    Ok(Train {
        train_id: TrainId::new(number(&record.train_id, "trainId")? as i64),
        departure_station: station(&record.departure_station_id, "departureStationId")?,
        arrival_station: station(&record.arrival_station_id, "arrivalStationId")?,
        price: number(&record.price, "price")? as f32,
        arrival_time: time(&record.arrival_time, "arrivalTime")?,
        departure_time: time(&record.departure_time, "departureTime")?,
    })
}

/// Extract a numeric field; fractional values are kept and truncated by the
/// caller where an integer is expected.
fn number(value: &Option<Value>, field: &'static str) -> Result<f64, DecodeError> {
    match value {
        None => Ok(0.0),
        Some(v) => v.as_f64().ok_or(DecodeError::NotANumber(field)),
    }
}

/// Extract a station identifier field.
fn station(value: &Option<Value>, field: &'static str) -> Result<StationId, DecodeError> {
    let n = number(value, field)?;
    if n < 0.0 {
        return Err(DecodeError::NegativeStationId(field));
    }
    Ok(StationId::new(n as u32))
}

/// Extract a time-of-day field.
fn time(value: &Option<Value>, field: &'static str) -> Result<TimeOfDay, DecodeError> {
    match value {
        None => Ok(TimeOfDay::MIDNIGHT),
        Some(v) => {
            let s = v.as_str().ok_or(DecodeError::NotAString(field))?;
            TimeOfDay::parse(s).map_err(|e| DecodeError::InvalidTime(field, e))
        }
    }
}
