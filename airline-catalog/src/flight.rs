use airline_core::{Aircraft, AirportCode, CoreError, CoreResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::inventory::{Seat, SeatError, SeatReservation, SeatTable};

/// One scheduled departure.
///
/// Everything except seat state is fixed at construction. Flights are shared
/// as `Arc<Flight>`; seat state lives behind the flight's own [`SeatTable`].
#[derive(Debug)]
pub struct Flight {
    id: Uuid,
    pub flight_number: String,
    pub source: AirportCode,
    pub destination: AirportCode,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    aircraft: Arc<Aircraft>,
    seats: SeatTable,
}

impl Flight {
    pub fn new(
        flight_number: &str,
        source: AirportCode,
        destination: AirportCode,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        aircraft: Arc<Aircraft>,
    ) -> CoreResult<Self> {
        let flight_number = flight_number.trim();
        if flight_number.is_empty() {
            return Err(CoreError::Validation("flight number must not be empty".to_string()));
        }
        if source == destination {
            return Err(CoreError::Validation(format!(
                "flight {} departs and arrives at {}",
                flight_number, source
            )));
        }
        if arrival <= departure {
            return Err(CoreError::Validation(format!(
                "flight {} arrives before it departs",
                flight_number
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            flight_number: flight_number.to_string(),
            source,
            destination,
            departure,
            arrival,
            seats: SeatTable::new(aircraft.total_seats),
            aircraft,
        })
    }

    /// Assigned at construction and never reused.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn aircraft(&self) -> &Arc<Aircraft> {
        &self.aircraft
    }

    /// Reserve a seat, returning `false` if it is taken or does not exist.
    pub fn book_seat(&self, seat_number: u32) -> bool {
        self.seats.reserve(seat_number)
    }

    /// Reserve a seat and hand back the proof needed to record a booking.
    pub fn reserve_seat(&self, seat_number: u32) -> Result<SeatReservation, SeatError> {
        self.seats.try_reserve(seat_number)?;
        Ok(SeatReservation::new(self.id, &self.flight_number, seat_number))
    }

    /// Calendar-date match on the departure instant, evaluated in UTC.
    pub fn departs_on(&self, date: NaiveDate) -> bool {
        self.departure.date_naive() == date
    }

    pub fn serves(&self, source: &AirportCode, destination: &AirportCode) -> bool {
        &self.source == source && &self.destination == destination
    }

    pub fn total_seats(&self) -> u32 {
        self.seats.total_seats()
    }

    pub fn remaining_seats(&self) -> u32 {
        self.seats.remaining_seats()
    }

    pub fn available_seats(&self) -> Vec<u32> {
        self.seats.available_seats()
    }

    pub fn is_seat_booked(&self, seat_number: u32) -> Option<bool> {
        self.seats.is_booked(seat_number)
    }

    pub fn seat_map(&self) -> Vec<Seat> {
        self.seats.snapshot()
    }

    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            flight_id: self.id,
            flight_number: self.flight_number.clone(),
            departure_time: self.departure,
            arrival_time: self.arrival,
            origin: self.source.to_string(),
            destination: self.destination.to_string(),
            aircraft_model: self.aircraft.model.clone(),
            tail_number: self.aircraft.tail_number.clone(),
            remaining_seats: self.remaining_seats(),
        }
    }
}

/// Point-in-time, serializable view of a flight for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub flight_id: Uuid,
    pub flight_number: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub origin: String,
    pub destination: String,
    pub aircraft_model: String,
    pub tail_number: String,
    pub remaining_seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn aircraft(seats: u32) -> Arc<Aircraft> {
        Arc::new(Aircraft::new("N1", "E175", seats).unwrap())
    }

    fn code(s: &str) -> AirportCode {
        AirportCode::new(s).unwrap()
    }

    fn flight(seats: u32) -> Flight {
        Flight::new(
            "AA1",
            code("SFO"),
            code("JFK"),
            Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 16, 30, 0).unwrap(),
            aircraft(seats),
        )
        .unwrap()
    }

    #[test]
    fn test_seats_follow_aircraft_capacity() {
        let flight = flight(3);
        assert_eq!(flight.total_seats(), 3);
        let numbers: Vec<u32> = flight.seat_map().iter().map(|s| s.seat_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_book_seat_true_then_false() {
        let flight = flight(2);
        assert!(flight.book_seat(1));
        assert!(!flight.book_seat(1));
        assert!(!flight.book_seat(0));
        assert!(!flight.book_seat(3));
        assert_eq!(flight.remaining_seats(), 1);
    }

    #[test]
    fn test_reserve_seat_carries_flight_identity() {
        let flight = flight(2);
        let reservation = flight.reserve_seat(2).unwrap();
        assert_eq!(reservation.flight_id(), flight.id());
        assert_eq!(reservation.flight_number(), "AA1");
        assert_eq!(reservation.seat_number(), 2);
        assert_eq!(flight.reserve_seat(2), Err(SeatError::SeatUnavailable(2)));
    }

    #[test]
    fn test_departure_date_is_compared_in_utc() {
        let late = Flight::new(
            "UA9",
            code("SFO"),
            code("JFK"),
            Utc.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 2, 7, 0, 0).unwrap(),
            aircraft(1),
        )
        .unwrap();

        assert!(late.departs_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(!late.departs_on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
    }

    #[test]
    fn test_rejects_inconsistent_schedule() {
        let dep = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let arr = dep + chrono::Duration::hours(1);
        assert!(Flight::new("AA1", code("SFO"), code("SFO"), dep, arr, aircraft(1)).is_err());
        assert!(Flight::new("AA1", code("SFO"), code("JFK"), dep, dep, aircraft(1)).is_err());
        assert!(Flight::new(" ", code("SFO"), code("JFK"), dep, arr, aircraft(1)).is_err());
    }

    #[test]
    fn test_each_flight_gets_its_own_id() {
        let a = flight(1);
        let b = flight(1);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.aircraft().tail_number, "N1");
    }

    #[test]
    fn test_summary_reflects_bookings() {
        let flight = flight(2);
        flight.book_seat(1);
        let summary = flight.summary();
        assert_eq!(summary.remaining_seats, 1);
        assert_eq!(summary.origin, "SFO");
        assert_eq!(summary.aircraft_model, "E175");
    }
}
