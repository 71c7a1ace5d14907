pub mod aircraft;
pub mod iata;
pub mod passenger;
pub mod payment;

pub use aircraft::Aircraft;
pub use iata::AirportCode;
pub use passenger::Passenger;
pub use payment::{Payment, PaymentMethod, PaymentStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
