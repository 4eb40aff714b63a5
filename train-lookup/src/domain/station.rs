//! Station identifier types.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStationId {
    /// The input was empty.
    #[error("empty station identifier")]
    Empty,

    /// The input was not a non-negative integer.
    #[error("station identifier must be a non-negative integer")]
    Malformed,
}

/// A non-negative integer station identifier.
///
/// Station identifiers in the dataset and in user input are plain
/// non-negative integers. This type guarantees that any `StationId`
/// value is valid by construction.
///
/// # Examples
///
/// ```
/// use train_lookup::domain::StationId;
///
/// let station = StationId::parse("1902").unwrap();
/// assert_eq!(station.value(), 1902);
///
/// // Empty input is rejected
/// assert!(StationId::parse("").is_err());
///
/// // Negative and non-numeric input is rejected
/// assert!(StationId::parse("-5").is_err());
/// assert!(StationId::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(u32);

impl StationId {
    /// Wrap an already-validated identifier.
    pub const fn new(id: u32) -> Self {
        StationId(id)
    }

    /// Parse a station identifier from a string.
    ///
    /// The input must be non-empty and parse as a non-negative integer.
    /// The two failure cases are reported separately so callers can tell
    /// an empty field from a malformed one.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId::Empty);
        }

        s.parse::<u32>()
            .map(StationId)
            .map_err(|_| InvalidStationId::Malformed)
    }

    /// Returns the numeric identifier.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
