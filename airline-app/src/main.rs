use airline_app::AirlineManagementSystem;
use airline_catalog::FlightSummary;
use airline_store::Config;
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Composition root: the single long-lived facade over the process-wide stores.
    let system = AirlineManagementSystem::with_global_stores()
        .with_default_payment_method(config.payments.default_method);

    for aircraft in &config.fleet {
        system
            .register_aircraft(&aircraft.tail_number, &aircraft.model, aircraft.total_seats)
            .with_context(|| format!("Failed to register aircraft {}", aircraft.tail_number))?;
    }

    for flight in &config.schedule {
        system
            .schedule_flight(
                &flight.flight_number,
                flight.source.as_str(),
                flight.destination.as_str(),
                flight.departure,
                flight.arrival,
                &flight.tail_number,
            )
            .with_context(|| format!("Failed to schedule flight {}", flight.flight_number))?;
    }

    tracing::info!(
        "Loaded {} aircraft and {} flights; default payment method {}",
        system.aircraft().len(),
        system.flights().len(),
        system.default_payment_method()
    );

    let summaries: Vec<FlightSummary> = system.flights().iter().map(|f| f.summary()).collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);

    Ok(())
}
