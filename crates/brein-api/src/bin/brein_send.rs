use std::env;

use brein_api::{
    BreinActivity, BreinRequest, BreinTemporalData, BreinTemporalDataResult, BreinUser, Breinify,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage:
  brein_send activity <type> [category] [description]
  brein_send temporal <location>";

fn user_from_env() -> BreinUser {
    match env::var("BREINIFY_USER_EMAIL") {
        Ok(email) => BreinUser::for_email(email),
        Err(_) => BreinUser::new().with_session_id(format!("brein-send-{}", std::process::id())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let client = Breinify::from_env()?;

    match args.first().map(String::as_str) {
        Some("activity") if args.len() >= 2 => {
            let mut activity = BreinActivity::new()
                .with_user(user_from_env())
                .with_activity_type(&args[1]);
            if let Some(category) = args.get(2) {
                activity = activity.with_category(category);
            }
            if let Some(description) = args.get(3) {
                activity = activity.with_description(description);
            }

            let result = client.activity(&activity).await?;
            println!("{}", result);
        }
        Some("temporal") if args.len() >= 2 => {
            let temporal_data = BreinTemporalData::new()
                .with_user(user_from_env())
                .with_location(args[1..].join(" "));

            let result = client.temporal_data(&temporal_data).await?;
            let temporal = BreinTemporalDataResult::new(&result);
            if let Some(location) = temporal.location() {
                println!(
                    "Location: {}, {}, {}",
                    location.city().unwrap_or("-"),
                    location.state().unwrap_or("-"),
                    location.country().unwrap_or("-")
                );
            }
            if let Some(time) = temporal.local_date_time() {
                println!("Local time: {}", time);
            }
            println!("{}", result);
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    }

    Ok(())
}
