//! Raw schedule record DTOs.
//!
//! These types map directly to the objects in the `data.json` array. Every
//! field is an untyped [`Value`] because the source file is loosely typed:
//! type checking happens per field during conversion, so that a mistyped
//! field can be reported by name instead of as a position in the byte
//! stream. Keys not listed here are ignored by serde.

use serde::Deserialize;
use serde_json::Value;

/// One record of the schedule file, fields still untyped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRecord {
    /// Numeric train identifier.
    pub train_id: Option<Value>,

    /// Station the train departs from.
    pub departure_station_id: Option<Value>,

    /// Station the train arrives at.
    pub arrival_station_id: Option<Value>,

    /// Ticket price.
    pub price: Option<Value>,

    /// Arrival time as "HH:MM:SS".
    pub arrival_time: Option<Value>,

    /// Departure time as "HH:MM:SS".
    pub departure_time: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "trainId": 1177,
            "departureStationId": 1902,
            "arrivalStationId": 1929,
            "price": 164.65,
            "arrivalTime": "10:25:00",
            "departureTime": "16:36:00"
        }"#;

        let record: TrainRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.train_id, Some(Value::from(1177)));
        assert_eq!(record.departure_station_id, Some(Value::from(1902)));
        assert_eq!(record.arrival_station_id, Some(Value::from(1929)));
        assert_eq!(record.price, Some(Value::from(164.65)));
        assert_eq!(record.arrival_time, Some(Value::from("10:25:00")));
        assert_eq!(record.departure_time, Some(Value::from("16:36:00")));
    }

    #[test]
    fn absent_keys_are_none() {
        let record: TrainRecord = serde_json::from_str(r#"{"trainId": 1}"#).unwrap();

        assert!(record.train_id.is_some());
        assert!(record.departure_station_id.is_none());
        assert!(record.arrival_station_id.is_none());
        assert!(record.price.is_none());
        assert!(record.arrival_time.is_none());
        assert!(record.departure_time.is_none());
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let json = r#"{
            "trainId": 1177,
            "operator": "UZ",
            "carriages": 12,
            "price": 164.65
        }"#;

        let record: TrainRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.train_id, Some(Value::from(1177)));
        assert_eq!(record.price, Some(Value::from(164.65)));
    }

    #[test]
    fn mistyped_values_still_deserialize() {
        // Type checking is deferred to conversion; the DTO accepts any value.
        let json = r#"{"price": "expensive", "arrivalTime": 42}"#;

        let record: TrainRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.price, Some(Value::from("expensive")));
        assert_eq!(record.arrival_time, Some(Value::from(42)));
    }
}
