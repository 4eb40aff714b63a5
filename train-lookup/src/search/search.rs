//! The search-filter-sort pipeline.

use tracing::debug;

use crate::domain::{InvalidStationId, StationId, Train};

use super::config::SearchConfig;
use super::criteria::SortCriteria;

/// Error from schedule search.
///
/// Every variant is an input-validation failure; results and errors never
/// mix. An empty result is reported through [`SearchResult`], not here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("empty departure station")]
    EmptyDepartureStation,

    #[error("bad departure station input")]
    MalformedDepartureStation,

    #[error("empty arrival station")]
    EmptyArrivalStation,

    #[error("bad arrival station input")]
    MalformedArrivalStation,

    #[error("unsupported criteria: {0:?}")]
    UnsupportedCriteria(String),
}

/// Request for schedule search: the three user inputs, as typed.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Departure station identifier, not yet validated.
    pub departure_station: String,

    /// Arrival station identifier, not yet validated.
    pub arrival_station: String,

    /// Sort criteria spelling, not yet validated.
    pub criteria: String,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        departure_station: impl Into<String>,
        arrival_station: impl Into<String>,
        criteria: impl Into<String>,
    ) -> Self {
        Self {
            departure_station: departure_station.into(),
            arrival_station: arrival_station.into(),
            criteria: criteria.into(),
        }
    }
}

/// Result of schedule search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Matching records, sorted by the requested criteria and capped.
    pub trains: Vec<Train>,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self { trains: Vec::new() }
    }

    /// True when no trains matched. This is a successful outcome,
    /// distinct from every [`SearchError`].
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}

/// Search the dataset for trains between two stations.
///
/// The pipeline validates the departure station, then the arrival station,
/// then filters, and only then validates the criteria: an unsupported
/// criteria is reported even when no train matches the stations. Matches
/// are stable-sorted ascending by the chosen field, so records with equal
/// keys keep their dataset order, and the result is capped at
/// `config.max_results`.
///
/// The dataset itself is never mutated; the result is a fresh list.
pub fn search(
    dataset: &[Train],
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let departure = parse_station(
        &request.departure_station,
        SearchError::EmptyDepartureStation,
        SearchError::MalformedDepartureStation,
    )?;

    let arrival = parse_station(
        &request.arrival_station,
        SearchError::EmptyArrivalStation,
        SearchError::MalformedArrivalStation,
    )?;

    let mut matches: Vec<Train> = dataset
        .iter()
        .filter(|t| t.departure_station == departure && t.arrival_station == arrival)
        .cloned()
        .collect();

    // Criteria is checked only after filtering, so a request with an
    // unsupported criteria fails the same way whether or not any train
    // runs between the stations.
    let criteria = SortCriteria::parse(&request.criteria)
        .ok_or_else(|| SearchError::UnsupportedCriteria(request.criteria.clone()))?;

    match criteria {
        SortCriteria::Price => matches.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortCriteria::ArrivalTime => matches.sort_by(|a, b| a.arrival_time.cmp(&b.arrival_time)),
        SortCriteria::DepartureTime => {
            matches.sort_by(|a, b| a.departure_time.cmp(&b.departure_time))
        }
    }

    debug!(
        departure = departure.value(),
        arrival = arrival.value(),
        criteria = criteria.as_str(),
        matches = matches.len(),
        "search complete"
    );

    matches.truncate(config.max_results);

    Ok(SearchResult { trains: matches })
}

/// Parse a station input, mapping the empty and malformed cases to the
/// station-specific errors.
fn parse_station(
    input: &str,
    on_empty: SearchError,
    on_malformed: SearchError,
) -> Result<StationId, SearchError> {
    StationId::parse(input).map_err(|e| match e {
        InvalidStationId::Empty => on_empty,
        InvalidStationId::Malformed => on_malformed,
    })
}
