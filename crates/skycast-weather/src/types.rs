use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::retry::{self, RetryDecision};

/// Sky condition categories reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
    Mist,
    Haze,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 8] = [
        Self::Clear,
        Self::Clouds,
        Self::Rain,
        Self::Drizzle,
        Self::Snow,
        Self::Thunderstorm,
        Self::Mist,
        Self::Haze,
    ];

    /// Map a provider keyword (`weather[0].main`) to a condition.
    /// Unknown keywords default to clear.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim() {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Snow" => Self::Snow,
            "Thunderstorm" => Self::Thunderstorm,
            "Mist" => Self::Mist,
            "Haze" => Self::Haze,
            other => {
                tracing::debug!("Unrecognized condition keyword {:?}, using Clear", other);
                Self::Clear
            }
        }
    }

    /// Provider keyword, also used in prompts
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Mist => "Mist",
            Self::Haze => "Haze",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::Clouds => "Cloudy",
            Self::Rain => "Rain",
            Self::Drizzle => "Light drizzle",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Mist => "Mist",
            Self::Haze => "Haze",
        }
    }

    /// Icon name for renderers
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun",
            Self::Clouds => "cloud",
            Self::Rain | Self::Drizzle => "cloud_rain",
            Self::Snow => "cloud_snow",
            Self::Thunderstorm => "cloud_lightning",
            Self::Mist | Self::Haze => "eye",
        }
    }

    /// Rain, drizzle or thunderstorm
    pub fn is_wet(&self) -> bool {
        matches!(self, Self::Rain | Self::Drizzle | Self::Thunderstorm)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A numeric reading the provider may not supply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Reading {
    Value(f64),
    #[default]
    Unavailable,
}

impl Reading {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    /// Strictly greater than `threshold`. An unavailable reading never exceeds.
    pub fn exceeds(self, threshold: f64) -> bool {
        self.value().is_some_and(|v| v > threshold)
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unavailable, Self::Value)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v),
            Self::Unavailable => f.write_str("N/A"),
        }
    }
}

/// One fetched weather reading for a location.
///
/// Immutable once built; a refresh produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    temperature_c: f64,
    condition: WeatherCondition,
    wind_kph: f64,
    humidity_pct: u8,
    uv_index: Reading,
    air_quality_index: Reading,
    cloud_cover_pct: u8,
    location_name: String,
    fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn builder(location_name: impl Into<String>) -> SnapshotBuilder {
        SnapshotBuilder::new(location_name)
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn condition(&self) -> WeatherCondition {
        self.condition
    }

    pub fn wind_kph(&self) -> f64 {
        self.wind_kph
    }

    pub fn humidity_pct(&self) -> u8 {
        self.humidity_pct
    }

    pub fn uv_index(&self) -> Reading {
        self.uv_index
    }

    pub fn air_quality_index(&self) -> Reading {
        self.air_quality_index
    }

    pub fn cloud_cover_pct(&self) -> u8 {
        self.cloud_cover_pct
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Builder for [`WeatherSnapshot`]. Percentages clamp to 100, wind to >= 0.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    temperature_c: f64,
    condition: WeatherCondition,
    wind_kph: f64,
    humidity_pct: u8,
    uv_index: Reading,
    air_quality_index: Reading,
    cloud_cover_pct: u8,
    location_name: String,
    fetched_at: Option<DateTime<Utc>>,
}

impl SnapshotBuilder {
    fn new(location_name: impl Into<String>) -> Self {
        Self {
            temperature_c: 20.0,
            condition: WeatherCondition::Clear,
            wind_kph: 0.0,
            humidity_pct: 50,
            uv_index: Reading::Unavailable,
            air_quality_index: Reading::Unavailable,
            cloud_cover_pct: 0,
            location_name: location_name.into(),
            fetched_at: None,
        }
    }

    pub fn temperature_c(mut self, value: f64) -> Self {
        self.temperature_c = value;
        self
    }

    pub fn condition(mut self, value: WeatherCondition) -> Self {
        self.condition = value;
        self
    }

    pub fn wind_kph(mut self, value: f64) -> Self {
        self.wind_kph = value.max(0.0);
        self
    }

    pub fn humidity_pct(mut self, value: u8) -> Self {
        self.humidity_pct = value.min(100);
        self
    }

    pub fn uv_index(mut self, value: Reading) -> Self {
        self.uv_index = value;
        self
    }

    pub fn air_quality_index(mut self, value: Reading) -> Self {
        self.air_quality_index = value;
        self
    }

    pub fn cloud_cover_pct(mut self, value: u8) -> Self {
        self.cloud_cover_pct = value.min(100);
        self
    }

    pub fn fetched_at(mut self, value: DateTime<Utc>) -> Self {
        self.fetched_at = Some(value);
        self
    }

    pub fn build(self) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: self.temperature_c,
            condition: self.condition,
            wind_kph: self.wind_kph,
            humidity_pct: self.humidity_pct,
            uv_index: self.uv_index,
            air_quality_index: self.air_quality_index,
            cloud_cover_pct: self.cloud_cover_pct,
            location_name: self.location_name,
            fetched_at: self.fetched_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("City not found: {0}")]
    LocationNotFound(String),
    #[error("Weather provider returned status {status}")]
    ProviderUnavailable { status: u16 },
    #[error("Weather API key is not configured")]
    MissingCredential,
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Message shown inline in place of the weather panel.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::LocationNotFound(_) => "City not found. Please check the spelling.",
            Self::MissingCredential => "Weather API key is missing. Add it to your settings.",
            Self::Network(_) | Self::ProviderUnavailable { .. } | Self::Parse(_) => {
                "Could not fetch weather data. Please try again."
            }
        }
    }
}

impl retry::Retryable for WeatherError {
    fn retry_decision(&self) -> RetryDecision {
        match self {
            Self::Network(e) => retry::is_retryable_error(e),
            Self::ProviderUnavailable { status } => match reqwest::StatusCode::from_u16(*status) {
                Ok(status) => retry::is_retryable_status(status),
                Err(_) => RetryDecision::NoRetry,
            },
            Self::LocationNotFound(_) | Self::MissingCredential | Self::Parse(_) => {
                RetryDecision::NoRetry
            }
        }
    }
}
