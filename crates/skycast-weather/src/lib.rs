//! Weather data for SkyCast
//!
//! Provides the normalized `WeatherSnapshot` every advisory consumes and an
//! OpenWeatherMap client that produces it.

pub mod provider;
pub mod retry;
pub mod types;

pub use provider::WeatherProvider;
pub use retry::{RetryConfig, RetryDecision};
pub use types::*;
