//! Sort criteria for search results.

use std::fmt;

/// The field search results are sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriteria {
    /// Ascending by ticket price.
    Price,

    /// Chronological by arrival time.
    ArrivalTime,

    /// Chronological by departure time.
    DepartureTime,
}

impl SortCriteria {
    /// Parse a criteria from its wire spelling.
    ///
    /// Recognized spellings are `price`, `arrival-time` and
    /// `departure-time`; anything else returns `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortCriteria::Price),
            "arrival-time" => Some(SortCriteria::ArrivalTime),
            "departure-time" => Some(SortCriteria::DepartureTime),
            _ => None,
        }
    }

    /// Returns the wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriteria::Price => "price",
            SortCriteria::ArrivalTime => "arrival-time",
            SortCriteria::DepartureTime => "departure-time",
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_spellings() {
        assert_eq!(SortCriteria::parse("price"), Some(SortCriteria::Price));
        assert_eq!(
            SortCriteria::parse("arrival-time"),
            Some(SortCriteria::ArrivalTime)
        );
        assert_eq!(
            SortCriteria::parse("departure-time"),
            Some(SortCriteria::DepartureTime)
        );
    }

    #[test]
    fn reject_unrecognized_spellings() {
        assert_eq!(SortCriteria::parse(""), None);
        assert_eq!(SortCriteria::parse("bogus"), None);
        assert_eq!(SortCriteria::parse("Price"), None);
        assert_eq!(SortCriteria::parse("arrival_time"), None);
        assert_eq!(SortCriteria::parse(" price"), None);
    }

    #[test]
    fn display_roundtrip() {
        for criteria in [
            SortCriteria::Price,
            SortCriteria::ArrivalTime,
            SortCriteria::DepartureTime,
        ] {
            assert_eq!(SortCriteria::parse(criteria.as_str()), Some(criteria));
            assert_eq!(criteria.to_string(), criteria.as_str());
        }
    }
}
