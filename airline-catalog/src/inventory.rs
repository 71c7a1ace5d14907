use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One bookable seat on one flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub seat_number: u32,
    pub is_booked: bool,
}

/// Per-flight seat inventory.
///
/// Seats are numbered densely from 1 to `total_seats` and never added or
/// removed. The only mutation is `Available -> Booked`, performed under the
/// table's own mutex so the availability check and the write happen as one
/// step. Tables for different flights never share a lock.
#[derive(Debug)]
pub struct SeatTable {
    total_seats: u32,
    seats: Mutex<Vec<Seat>>,
}

impl SeatTable {
    pub fn new(total_seats: u32) -> Self {
        let seats = (1..=total_seats)
            .map(|seat_number| Seat {
                seat_number,
                is_booked: false,
            })
            .collect();

        Self {
            total_seats,
            seats: Mutex::new(seats),
        }
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Atomically book `seat_number`.
    ///
    /// Fails with [`SeatError::InvalidSeat`] outside `1..=total_seats` and with
    /// [`SeatError::SeatUnavailable`] when the seat is already taken. Neither
    /// failure touches any seat.
    pub fn try_reserve(&self, seat_number: u32) -> Result<(), SeatError> {
        let index = self.index_of(seat_number)?;

        let mut seats = self.seats.lock();
        let seat = seats.get_mut(index).ok_or(SeatError::InvalidSeat {
            seat: seat_number,
            total: self.total_seats,
        })?;

        if seat.is_booked {
            return Err(SeatError::SeatUnavailable(seat_number));
        }

        seat.is_booked = true;
        Ok(())
    }

    /// Boolean form of [`SeatTable::try_reserve`].
    pub fn reserve(&self, seat_number: u32) -> bool {
        self.try_reserve(seat_number).is_ok()
    }

    /// `None` when the seat number does not exist on this flight.
    pub fn is_booked(&self, seat_number: u32) -> Option<bool> {
        let index = self.index_of(seat_number).ok()?;
        self.seats.lock().get(index).map(|seat| seat.is_booked)
    }

    /// Free seat numbers in ascending order.
    pub fn available_seats(&self) -> Vec<u32> {
        self.seats
            .lock()
            .iter()
            .filter(|seat| !seat.is_booked)
            .map(|seat| seat.seat_number)
            .collect()
    }

    pub fn remaining_seats(&self) -> u32 {
        self.seats.lock().iter().filter(|seat| !seat.is_booked).count() as u32
    }

    pub fn snapshot(&self) -> Vec<Seat> {
        self.seats.lock().clone()
    }

    fn index_of(&self, seat_number: u32) -> Result<usize, SeatError> {
        if seat_number == 0 || seat_number > self.total_seats {
            return Err(SeatError::InvalidSeat {
                seat: seat_number,
                total: self.total_seats,
            });
        }
        Ok((seat_number - 1) as usize)
    }
}

/// Proof that a seat moved to `Booked`.
///
/// Only [`crate::Flight::reserve_seat`] hands these out, and a
/// [`crate::Booking`] can only be built from one, so a booking can never
/// exist for a seat whose reservation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatReservation {
    flight_id: Uuid,
    flight_number: String,
    seat_number: u32,
    reserved_at: DateTime<Utc>,
}

impl SeatReservation {
    pub(crate) fn new(flight_id: Uuid, flight_number: &str, seat_number: u32) -> Self {
        Self {
            flight_id,
            flight_number: flight_number.to_string(),
            seat_number,
            reserved_at: Utc::now(),
        }
    }

    pub fn flight_id(&self) -> Uuid {
        self.flight_id
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn seat_number(&self) -> u32 {
        self.seat_number
    }

    pub fn reserved_at(&self) -> DateTime<Utc> {
        self.reserved_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("Invalid seat {seat}: flight has seats 1..={total}")]
    InvalidSeat { seat: u32, total: u32 },

    #[error("Seat {0} is already booked")]
    SeatUnavailable(u32),
}
