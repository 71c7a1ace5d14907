pub mod booking;
pub mod flight;
pub mod inventory;
pub mod search;

pub use booking::Booking;
pub use flight::{Flight, FlightSummary};
pub use inventory::{Seat, SeatError, SeatReservation, SeatTable};
pub use search::{FlightSearch, SearchQuery};
