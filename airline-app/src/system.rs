use airline_catalog::{Booking, Flight, FlightSearch, SearchQuery};
use airline_core::{Aircraft, AirportCode, Passenger, Payment, PaymentMethod, PaymentStatus};
use airline_store::{BookingStore, PaymentStore};
use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AirlineError, AirlineResult};

/// Registered aircraft and scheduled flights. Both collections sit behind one
/// lock so a search never observes a half-applied registration.
#[derive(Default)]
struct Fleet {
    aircraft: Vec<Arc<Aircraft>>,
    aircraft_by_tail: HashMap<String, Arc<Aircraft>>,
    flights: Vec<Arc<Flight>>,
    flights_by_id: HashMap<Uuid, Arc<Flight>>,
}

/// Entry point for registering the fleet, scheduling, searching, booking and
/// recording payments.
///
/// Lock discipline: the fleet lock is never held while a seat is reserved,
/// and a flight's seat lock is always released before the booking store is
/// written. No two of these locks are ever held at once.
pub struct AirlineManagementSystem {
    fleet: RwLock<Fleet>,
    bookings: Arc<BookingStore>,
    payments: Arc<PaymentStore>,
    default_payment_method: PaymentMethod,
}

impl AirlineManagementSystem {
    pub fn new(bookings: Arc<BookingStore>, payments: Arc<PaymentStore>) -> Self {
        Self {
            fleet: RwLock::new(Fleet::default()),
            bookings,
            payments,
            default_payment_method: PaymentMethod::default(),
        }
    }

    /// Facade wired to the process-wide booking and payment stores.
    pub fn with_global_stores() -> Self {
        Self::new(BookingStore::global(), PaymentStore::global())
    }

    /// Method used by [`Self::record_default_payment`].
    pub fn with_default_payment_method(mut self, method: PaymentMethod) -> Self {
        self.default_payment_method = method;
        self
    }

    pub fn default_payment_method(&self) -> PaymentMethod {
        self.default_payment_method
    }

    pub fn register_aircraft(
        &self,
        tail_number: &str,
        model: &str,
        total_seats: u32,
    ) -> AirlineResult<Arc<Aircraft>> {
        self.add_aircraft(Aircraft::new(tail_number, model, total_seats)?)
    }

    pub fn add_aircraft(&self, mut aircraft: Aircraft) -> AirlineResult<Arc<Aircraft>> {
        aircraft.tail_number = aircraft.tail_number.trim().to_string();
        aircraft.validate()?;

        let mut fleet = self.fleet.write();
        if fleet.aircraft_by_tail.contains_key(&aircraft.tail_number) {
            return Err(AirlineError::DuplicateAircraft(aircraft.tail_number));
        }

        let aircraft = Arc::new(aircraft);
        fleet
            .aircraft_by_tail
            .insert(aircraft.tail_number.clone(), aircraft.clone());
        fleet.aircraft.push(aircraft.clone());

        info!(
            "Aircraft registered: {} ({}, {} seats)",
            aircraft.tail_number, aircraft.model, aircraft.total_seats
        );
        Ok(aircraft)
    }

    /// Schedule a departure on a registered aircraft. Seats are created from
    /// the aircraft's capacity.
    pub fn schedule_flight(
        &self,
        flight_number: &str,
        source: &str,
        destination: &str,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        tail_number: &str,
    ) -> AirlineResult<Arc<Flight>> {
        let source = AirportCode::new(source)?;
        let destination = AirportCode::new(destination)?;
        let tail_number = tail_number.trim();

        let mut fleet = self.fleet.write();
        let aircraft = fleet
            .aircraft_by_tail
            .get(tail_number)
            .cloned()
            .ok_or_else(|| AirlineError::UnknownAircraft(tail_number.to_string()))?;

        let flight = Flight::new(flight_number, source, destination, departure, arrival, aircraft)?;
        Ok(Self::insert_flight(&mut fleet, flight))
    }

    /// Add an already built flight. Its aircraft must be the one registered
    /// here under the same tail number.
    pub fn add_flight(&self, flight: Flight) -> AirlineResult<Arc<Flight>> {
        let mut fleet = self.fleet.write();
        let tail_number = &flight.aircraft().tail_number;
        let registered = fleet
            .aircraft_by_tail
            .get(tail_number)
            .ok_or_else(|| AirlineError::UnknownAircraft(tail_number.clone()))?;

        if !Arc::ptr_eq(registered, flight.aircraft()) && **registered != **flight.aircraft() {
            return Err(AirlineError::AircraftMismatch(
                flight.flight_number.clone(),
                tail_number.clone(),
            ));
        }
        if fleet.flights_by_id.contains_key(&flight.id()) {
            return Err(AirlineError::DuplicateFlight(flight.id()));
        }

        Ok(Self::insert_flight(&mut fleet, flight))
    }

    fn insert_flight(fleet: &mut Fleet, flight: Flight) -> Arc<Flight> {
        let flight = Arc::new(flight);
        fleet.flights_by_id.insert(flight.id(), flight.clone());
        fleet.flights.push(flight.clone());

        info!(
            "Flight scheduled: {} {} -> {} departing {} ({} seats)",
            flight.flight_number,
            flight.source,
            flight.destination,
            flight.departure.to_rfc3339(),
            flight.total_seats()
        );
        flight
    }

    /// Flights on the route departing on `date` (UTC), in scheduling order.
    pub fn search_flights(
        &self,
        source: &str,
        destination: &str,
        date: NaiveDate,
    ) -> AirlineResult<Vec<Arc<Flight>>> {
        let query = SearchQuery::new(
            AirportCode::new(source)?,
            AirportCode::new(destination)?,
            date,
        );
        Ok(self.search(&query))
    }

    /// Like [`Self::search_flights`], skipping flights with fewer than
    /// `min_available_seats` free seats.
    pub fn search_available_flights(
        &self,
        source: &str,
        destination: &str,
        date: NaiveDate,
        min_available_seats: u32,
    ) -> AirlineResult<Vec<Arc<Flight>>> {
        let query = SearchQuery::new(
            AirportCode::new(source)?,
            AirportCode::new(destination)?,
            date,
        )
        .with_min_available_seats(min_available_seats);
        Ok(self.search(&query))
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<Arc<Flight>> {
        let fleet = self.fleet.read();
        FlightSearch::search(&fleet.flights, query)
    }

    /// Reserve `seat_number` on the flight and record the booking.
    ///
    /// This is the only way a booking comes into existence. On failure no
    /// store is touched.
    pub fn book_seat(
        &self,
        flight_id: Uuid,
        passenger: Passenger,
        seat_number: u32,
    ) -> AirlineResult<Arc<Booking>> {
        let flight = self
            .get_flight(&flight_id)
            .ok_or(AirlineError::UnknownFlight(flight_id))?;

        let reservation = match flight.reserve_seat(seat_number) {
            Ok(reservation) => reservation,
            Err(err) => {
                warn!(
                    "Seat {} on flight {} rejected for passenger {}: {}",
                    seat_number, flight.flight_number, passenger.id, err
                );
                return Err(err.into());
            }
        };

        let booking = self.bookings.add_booking(Booking::new(reservation, passenger));
        info!(
            "Booking {} confirmed: flight {} seat {} passenger {}",
            booking.id(),
            booking.flight_number(),
            booking.seat_number(),
            booking.passenger().id
        );
        Ok(booking)
    }

    /// Record a successful payment against a booking.
    pub fn record_payment(
        &self,
        booking_id: Uuid,
        amount: Decimal,
        method: PaymentMethod,
    ) -> AirlineResult<Arc<Payment>> {
        self.record_payment_outcome(booking_id, amount, method, PaymentStatus::Succeeded)
    }

    /// Record a successful payment using the configured default method.
    pub fn record_default_payment(
        &self,
        booking_id: Uuid,
        amount: Decimal,
    ) -> AirlineResult<Arc<Payment>> {
        self.record_payment(booking_id, amount, self.default_payment_method)
    }

    /// Record whatever outcome the payment provider reported.
    pub fn record_payment_outcome(
        &self,
        booking_id: Uuid,
        amount: Decimal,
        method: PaymentMethod,
        status: PaymentStatus,
    ) -> AirlineResult<Arc<Payment>> {
        if self.bookings.get_booking(&booking_id).is_none() {
            return Err(AirlineError::UnknownBooking(booking_id));
        }

        let payment = self
            .payments
            .add_payment(Payment::new(booking_id, amount, method, status)?);
        info!(
            "Payment {} for booking {}: {} via {} ({:?})",
            payment.id, booking_id, payment.amount, payment.method, payment.status
        );
        Ok(payment)
    }

    pub fn get_booking(&self, booking_id: &Uuid) -> Option<Arc<Booking>> {
        self.bookings.get_booking(booking_id)
    }

    pub fn get_payment(&self, payment_id: &Uuid) -> Option<Arc<Payment>> {
        self.payments.get_payment(payment_id)
    }

    pub fn bookings_for_flight(&self, flight_id: &Uuid) -> Vec<Arc<Booking>> {
        self.bookings.bookings_for_flight(flight_id)
    }

    pub fn payments_for_booking(&self, booking_id: &Uuid) -> Vec<Arc<Payment>> {
        self.payments.payments_for_booking(booking_id)
    }

    pub fn get_flight(&self, flight_id: &Uuid) -> Option<Arc<Flight>> {
        self.fleet.read().flights_by_id.get(flight_id).cloned()
    }

    pub fn get_aircraft(&self, tail_number: &str) -> Option<Arc<Aircraft>> {
        self.fleet
            .read()
            .aircraft_by_tail
            .get(tail_number.trim())
            .cloned()
    }

    pub fn flights(&self) -> Vec<Arc<Flight>> {
        self.fleet.read().flights.clone()
    }

    pub fn aircraft(&self) -> Vec<Arc<Aircraft>> {
        self.fleet.read().aircraft.clone()
    }
}
