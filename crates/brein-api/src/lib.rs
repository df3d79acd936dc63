//! Breinify API client library.
//!
//! This crate provides an async Rust client for the Breinify
//! behavioral-analytics and personalization API. It supports:
//!
//! - Reporting user activities (logins, page visits, purchases, ...)
//! - Requesting recommendations
//! - Resolving temporal data (time, weather, holidays, events) and
//!   (reverse) geocoding locations
//! - Looking up user dimensions
//! - Signing requests with HMAC-SHA256 when a secret is configured
//!
//! # Example
//!
//! ```no_run
//! use brein_api::{BreinActivity, BreinConfig, BreinRequest, BreinUser, Breinify};
//! use brein_api::types::{activity_type, category};
//!
//! # async fn example() -> Result<(), brein_api::BreinError> {
//! let config = BreinConfig::with_secret("API-KEY", "SECRET");
//! let client = Breinify::new(config)?;
//!
//! let activity = BreinActivity::new()
//!     .with_user(BreinUser::for_email("user@example.com"))
//!     .with_activity_type(activity_type::LOGIN)
//!     .with_category(category::HOME);
//!
//! let result = client.activity(&activity).await?;
//! println!("Response: {}", result);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod request;
pub mod result;
pub mod signature;
pub mod types;
pub mod user;
pub mod util;

pub use client::Breinify;
pub use config::BreinConfig;
pub use engine::{HttpRestEngine, RestEngine};
pub use error::BreinError;
pub use request::{
    BreinActivity, BreinDimension, BreinLookup, BreinRecommendation, BreinRequest,
    BreinTemporalData, RequestBase,
};
pub use result::{
    BreinEventResult, BreinHolidayResult, BreinLocationResult, BreinResult,
    BreinTemporalDataResult, BreinWeatherResult,
};
pub use user::BreinUser;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
