//! Async backends for the dashboard.
//! Network work runs on the runtime; results come back over mpsc.

pub mod suggestion_service;
pub mod travel_service;
pub mod weather_service;

pub use suggestion_service::{request_suggestion, SuggestionServiceMessage};
pub use travel_service::{request_city_weather, TravelServiceMessage};
pub use weather_service::{request_fetch as request_weather_fetch, FetchError, WeatherServiceMessage};
