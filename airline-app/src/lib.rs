pub mod error;
pub mod system;

pub use error::{AirlineError, AirlineResult};
pub use system::AirlineManagementSystem;
