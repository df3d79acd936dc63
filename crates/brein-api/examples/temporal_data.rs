//! Resolve temporal data for a location and a coordinate.
//!
//! Run with: cargo run --example temporal_data
//!
//! Requires BREINIFY_API_KEY (and optionally BREINIFY_SECRET) in the
//! environment or a .env file.

use brein_api::{BreinRequest, BreinTemporalData, BreinTemporalDataResult, BreinUser, Breinify};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let client = Breinify::from_env()?;

    // Geocoding of a free-text location
    let request = BreinTemporalData::new().with_location("The Big Apple");
    let result = client.temporal_data(&request).await?;
    let temporal = BreinTemporalDataResult::new(&result);

    if let Some(location) = temporal.location() {
        println!(
            "The Big Apple is {:?}, {:?} ({:?}, {:?})",
            location.city(),
            location.state(),
            location.lat(),
            location.lon()
        );
    }

    // Reverse geocoding with shapes
    let request = BreinTemporalData::new()
        .with_latitude(37.7609295)
        .with_longitude(-122.4194155)
        .add_shape_types(["CITY", "NEIGHBORHOOD"]);
    let result = client.temporal_data(&request).await?;
    let temporal = BreinTemporalDataResult::new(&result);

    if let Some(location) = temporal.location() {
        for shape in location.geo_json_types() {
            println!("Got GeoJSON for {}", shape);
        }
    }

    // Temporal data of a user
    let request = BreinTemporalData::new()
        .with_user(BreinUser::for_email("fred.firestone@email.com").with_first_name("Fred"))
        .with_look_up_ip_address("74.115.209.58")
        .with_timezone("America/Los_Angeles");
    let result = client.temporal_data(&request).await?;
    let temporal = BreinTemporalDataResult::new(&result);

    if let Some(weather) = temporal.weather() {
        println!(
            "Weather: {:?} at {:?}°C",
            weather.description(),
            weather.temperature_celsius()
        );
    }
    for holiday in temporal.holidays() {
        println!("Holiday: {:?} ({:?})", holiday.name(), holiday.source());
    }
    for event in temporal.events() {
        println!("Event: {:?}", event.name());
    }

    Ok(())
}
