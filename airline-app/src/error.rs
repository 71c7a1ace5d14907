use airline_catalog::SeatError;
use airline_core::CoreError;
use uuid::Uuid;

/// Everything a facade caller can get back instead of a result.
///
/// Lookups that find nothing return `None`; they are not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AirlineError {
    #[error("Invalid seat {seat}: flight has seats 1..={total}")]
    InvalidSeat { seat: u32, total: u32 },

    #[error("Seat {0} is already booked")]
    SeatUnavailable(u32),

    #[error("Unknown flight: {0}")]
    UnknownFlight(Uuid),

    #[error("Unknown aircraft: {0}")]
    UnknownAircraft(String),

    #[error("Aircraft already registered: {0}")]
    DuplicateAircraft(String),

    #[error("Flight {0} does not use the aircraft registered under {1}")]
    AircraftMismatch(String, String),

    #[error("Flight already scheduled: {0}")]
    DuplicateFlight(Uuid),

    #[error("Unknown booking: {0}")]
    UnknownBooking(Uuid),

    #[error(transparent)]
    Validation(#[from] CoreError),
}

impl From<SeatError> for AirlineError {
    fn from(err: SeatError) -> Self {
        match err {
            SeatError::InvalidSeat { seat, total } => AirlineError::InvalidSeat { seat, total },
            SeatError::SeatUnavailable(seat) => AirlineError::SeatUnavailable(seat),
        }
    }
}

pub type AirlineResult<T> = Result<T, AirlineError>;
