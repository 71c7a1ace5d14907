use airline_shared::Masked;
use serde::{Deserialize, Serialize};

/// A traveller. Provisioned outside the booking core and only read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: String,
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
}

impl Passenger {
    pub fn new(id: &str, name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: Masked::new(email.to_string()),
            phone: Masked::new(phone.to_string()),
        }
    }
}
