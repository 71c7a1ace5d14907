use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Three-letter IATA airport code, stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    pub fn new(code: &str) -> CoreResult<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::Validation(format!(
                "airport code must be three letters, got {:?}",
                code
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AirportCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for AirportCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalises_case() {
        let code = AirportCode::new("sfo").unwrap();
        assert_eq!(code.as_str(), "SFO");
        assert!(code == *"SFO");
    }

    #[test]
    fn test_rejects_malformed_codes() {
        assert!(AirportCode::new("").is_err());
        assert!(AirportCode::new("JFKX").is_err());
        assert!(AirportCode::new("J1K").is_err());
    }

    #[test]
    fn test_deserialization_validates() {
        let code: AirportCode = serde_json::from_str("\"lhr\"").unwrap();
        assert_eq!(code.to_string(), "LHR");
        assert!(serde_json::from_str::<AirportCode>("\"LONDON\"").is_err());
    }
}
