use airline_catalog::Booking;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;
use uuid::Uuid;

use crate::{StoreError, StoreResult};

static GLOBAL: OnceLock<Arc<BookingStore>> = OnceLock::new();

/// In-memory registry of confirmed bookings, keyed by booking id.
///
/// Reads share the lock; a write excludes everyone. Records are stored as
/// `Arc<Booking>` and inserted whole, so a reader sees either no record or
/// the complete one.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: RwLock<HashMap<Uuid, Arc<Booking>>>,
}

impl BookingStore {
    /// A fresh, independent store. Tests and embedders use this directly.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store, created on first access.
    pub fn global() -> Arc<Self> {
        GLOBAL.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Insert under the booking's id. An existing entry is replaced.
    pub fn add_booking(&self, booking: Booking) -> Arc<Booking> {
        let booking = Arc::new(booking);
        let previous = self
            .bookings
            .write()
            .insert(booking.id(), booking.clone());

        if previous.is_some() {
            debug!("Booking {} replaced", booking.id());
        } else {
            debug!("Booking {} stored", booking.id());
        }
        booking
    }

    /// Insert only if the id is unused.
    pub fn try_add_booking(&self, booking: Booking) -> StoreResult<Arc<Booking>> {
        let mut bookings = self.bookings.write();
        if bookings.contains_key(&booking.id()) {
            return Err(StoreError::DuplicateKey(booking.id().to_string()));
        }

        let booking = Arc::new(booking);
        bookings.insert(booking.id(), booking.clone());
        debug!("Booking {} stored", booking.id());
        Ok(booking)
    }

    pub fn get_booking(&self, booking_id: &Uuid) -> Option<Arc<Booking>> {
        self.bookings.read().get(booking_id).cloned()
    }

    /// Bookings on one flight, oldest first.
    pub fn bookings_for_flight(&self, flight_id: &Uuid) -> Vec<Arc<Booking>> {
        let mut found: Vec<Arc<Booking>> = self
            .bookings
            .read()
            .values()
            .filter(|booking| booking.flight_id() == *flight_id)
            .cloned()
            .collect();
        found.sort_by_key(|booking| (booking.created_at(), booking.seat_number()));
        found
    }

    pub fn len(&self) -> usize {
        self.bookings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.read().is_empty()
    }
}
