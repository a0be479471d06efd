//! Centralized error types for SkyCast.
//!
//! This module provides a typed error hierarchy that:
//! - Lets the shell tell "city not found" apart from provider outages
//! - Provides user-friendly messages suitable for inline display
//! - Preserves full error context for logging

use thiserror::Error;

/// Top-level application error type.
///
/// All errors surfaced to the dashboard should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not available: {0}")]
    NotFound(String),

    #[error("Failed to read configuration: {0}")]
    Read(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "No configuration directory found on this system.",
            ConfigError::Read(_) => "Configuration file could not be read. Check its permissions.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
        }
    }
}

/// Weather provider errors as seen by the dashboard.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Weather provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Weather API key is not configured")]
    MissingCredential,

    #[error("Invalid weather response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::LocationNotFound(_) => "City not found. Please check the spelling.",
            WeatherError::ProviderUnavailable(_) | WeatherError::InvalidResponse(_) => {
                "Could not fetch weather data. Please try again."
            }
            WeatherError::MissingCredential => {
                "Weather API key is missing. Add it to your settings."
            }
        }
    }
}
