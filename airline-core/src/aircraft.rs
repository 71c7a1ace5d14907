use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// A physical airframe. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    pub tail_number: String,
    pub model: String,
    pub total_seats: u32,
}

impl Aircraft {
    /// Upper bound on cabin size. Comfortably above any widebody layout.
    pub const MAX_SEATS: u32 = 1_000;

    pub fn new(tail_number: &str, model: &str, total_seats: u32) -> CoreResult<Self> {
        let aircraft = Self {
            tail_number: tail_number.trim().to_string(),
            model: model.to_string(),
            total_seats,
        };
        aircraft.validate()?;
        Ok(aircraft)
    }

    /// Checks a record that may have been built field by field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tail_number.trim().is_empty() {
            return Err(CoreError::Validation("tail number must not be empty".to_string()));
        }
        if self.total_seats == 0 {
            return Err(CoreError::Validation(format!(
                "aircraft {} must have at least one seat",
                self.tail_number
            )));
        }
        if self.total_seats > Self::MAX_SEATS {
            return Err(CoreError::Validation(format!(
                "aircraft {} has {} seats, more than the limit of {}",
                self.tail_number,
                self.total_seats,
                Self::MAX_SEATS
            )));
        }
        Ok(())
    }
}
