use airline_core::AirportCode;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::flight::Flight;

/// Route and date to search for. The date is a UTC calendar date.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub source: AirportCode,
    pub destination: AirportCode,
    pub date: NaiveDate,
    /// Skip flights with fewer free seats than this. Zero keeps sold-out flights.
    #[serde(default)]
    pub min_available_seats: u32,
}

impl SearchQuery {
    pub fn new(source: AirportCode, destination: AirportCode, date: NaiveDate) -> Self {
        Self {
            source,
            destination,
            date,
            min_available_seats: 0,
        }
    }

    pub fn with_min_available_seats(mut self, seats: u32) -> Self {
        self.min_available_seats = seats;
        self
    }
}

/// Stateless route/date filter over a flight collection.
pub struct FlightSearch;

impl FlightSearch {
    /// Matching flights in the order they appear in `flights`.
    pub fn search(flights: &[Arc<Flight>], query: &SearchQuery) -> Vec<Arc<Flight>> {
        let results: Vec<Arc<Flight>> = flights
            .iter()
            .filter(|flight| flight.serves(&query.source, &query.destination))
            .filter(|flight| flight.departs_on(query.date))
            .filter(|flight| {
                query.min_available_seats == 0
                    || flight.remaining_seats() >= query.min_available_seats
            })
            .cloned()
            .collect();

        tracing::debug!(
            "Search {} -> {} on {}: {} of {} flights match",
            query.source,
            query.destination,
            query.date,
            results.len(),
            flights.len()
        );

        results
    }
}
