//! Headless UI-shell plumbing for the SkyCast dashboard.
//!
//! The shell owns all mutable state and threads it explicitly into the
//! advisory and theme engines. Network work runs on a tokio runtime and
//! reports back over a channel, tagged with request ids so that only the
//! newest fetch can update what is displayed.

pub mod dashboard;
pub mod debounce;
mod error_mapping;
pub mod feature;
pub mod request;
pub mod services;
pub mod state;
pub mod travel;

pub use dashboard::{Dashboard, ShellEvent};
pub use debounce::Debouncer;
pub use feature::Feature;
pub use request::{RequestId, RequestTracker};
pub use services::FetchError;
pub use state::{DashboardState, SuggestionView, WeatherView};
pub use travel::{CityWeather, Destination, TravelError, TravelList};
