use airline_core::Passenger;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::inventory::SeatReservation;

/// A confirmed seat on a flight for one passenger.
///
/// Built only from a [`SeatReservation`], so it always follows a successful
/// reservation. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    id: Uuid,
    flight_id: Uuid,
    flight_number: String,
    passenger: Passenger,
    seat_number: u32,
    created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(reservation: SeatReservation, passenger: Passenger) -> Self {
        Self {
            id: Uuid::new_v4(),
            flight_id: reservation.flight_id(),
            flight_number: reservation.flight_number().to_string(),
            passenger,
            seat_number: reservation.seat_number(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn flight_id(&self) -> Uuid {
        self.flight_id
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    pub fn seat_number(&self) -> u32 {
        self.seat_number
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Flight;
    use airline_core::{Aircraft, AirportCode};
    use chrono::TimeZone;
    use std::sync::Arc;

    #[test]
    fn test_booking_from_reservation() {
        let dep = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let flight = Flight::new(
            "AA1",
            AirportCode::new("SFO").unwrap(),
            AirportCode::new("JFK").unwrap(),
            dep,
            dep + chrono::Duration::hours(5),
            Arc::new(Aircraft::new("N1", "A320", 2).unwrap()),
        )
        .unwrap();
        let passenger = Passenger::new("P1", "Grace Hopper", "grace@example.com", "555-0101");

        let booking = Booking::new(flight.reserve_seat(1).unwrap(), passenger.clone());
        assert_eq!(booking.flight_id(), flight.id());
        assert_eq!(booking.flight_number(), "AA1");
        assert_eq!(booking.seat_number(), 1);
        assert_eq!(booking.passenger(), &passenger);

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["seat_number"], 1);
        assert_eq!(json["passenger"]["email"], "grace@example.com");
    }
}
