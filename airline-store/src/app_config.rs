use airline_core::{AirportCode, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub payments: PaymentsConfig,
    #[serde(default)]
    pub fleet: Vec<AircraftConfig>,
    #[serde(default)]
    pub schedule: Vec<FlightConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentsConfig {
    pub default_method: PaymentMethod,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AircraftConfig {
    pub tail_number: String,
    pub model: String,
    pub total_seats: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlightConfig {
    pub flight_number: String,
    pub source: AirportCode,
    pub destination: AirportCode,
    /// RFC 3339; stored and compared in UTC.
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub tail_number: String,
}

const DEFAULT_LOG_FILTER: &str = "airline_app=info,airline_catalog=info,airline_store=info";

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::builder()?
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `AIRLINE__LOGGING__FILTER=debug`
            .add_source(config::Environment::with_prefix("AIRLINE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse a single TOML document on top of the built-in defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .set_default("payments.default_method", "CREDIT_CARD")
    }
}
