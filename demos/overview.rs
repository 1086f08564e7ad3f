//! demos/overview.rs
//!
//! Loads the forecast of a city from OpenWeatherMap and prints the three
//! dashboard projections as JSON, followed by the current conditions.
//!
//! To run this example:
//! OPENWEATHER_API_KEY=... cargo run --example overview -- "Porto Alegre"

use forecast_dashboard::{Dashboard, DashboardError, SearchOutcome};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Set RUST_LOG=info (or debug) to see requests and applied responses
    env_logger::init();

    let dashboard = Dashboard::new()?;
    let city = env::args().skip(1).collect::<Vec<_>>().join(" ");

    let outcome = if city.trim().is_empty() {
        dashboard.load_default().await
    } else {
        dashboard.search(&city).await
    };

    match outcome {
        Ok(SearchOutcome::Applied) => {}
        Ok(other) => println!("Search was not applied: {:?}", other),
        Err(e) if e.is_city_not_found() => {
            eprintln!("City not found. Check the name and try again.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    }

    let Some(projections) = dashboard.projections().await else {
        return Err(DashboardError::NoCitySelected.into());
    };
    println!("{}", serde_json::to_string_pretty(&projections)?);

    if let Some(current) = dashboard.current_conditions(&projections.city).await? {
        println!(
            "Now in {}: {:.1}°C, humidity {}%, wind {:.1} m/s, requested at {}",
            current.city,
            current.temperature,
            current.humidity,
            current.wind_speed,
            current.requested_at.format("%H:%M:%S")
        );
        for row in current.description_summary() {
            println!("  {}: {}", row.label, row.count);
        }
    }

    Ok(())
}
