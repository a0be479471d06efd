//! Weather advisories for SkyCast.
//!
//! Every advisor is a pure function of a [`WeatherSnapshot`]: same snapshot,
//! same recommendation. Thresholds live as constants next to the rule that
//! uses them.
//!
//! [`WeatherSnapshot`]: skycast_weather::WeatherSnapshot

pub mod alerts;
pub mod clothing;
pub mod domain;
pub mod engine;
pub mod fitness;
pub mod gardening;
pub mod mood;
pub mod pet;
pub mod productivity;
pub mod stargazing;
pub mod timer;
pub mod travel;

pub use alerts::MicroAlert;
pub use clothing::ClothingItem;
pub use domain::{AdvisoryDomain, Advisor, Recommendation, Severity};
pub use engine::AdvisoryEngine;
pub use fitness::FitnessAdvice;
pub use gardening::GardenAdvice;
pub use mood::Mood;
pub use pet::{PetHazard, PetSafety};
pub use productivity::FocusFraming;
pub use stargazing::{StargazingQuality, StargazingReport};
pub use timer::FocusTimer;
