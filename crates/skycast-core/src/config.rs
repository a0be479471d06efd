use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Environment variable that overrides `weather.api_key`.
pub const WEATHER_API_KEY_ENV: &str = "SKYCAST_WEATHER_API_KEY";

/// Environment variable that overrides `suggestions.api_key`.
pub const SUGGEST_API_KEY_ENV: &str = "SKYCAST_SUGGEST_API_KEY";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Suggestion provider settings
    #[serde(default)]
    pub suggestions: SuggestionConfig,

    /// Travel companion settings
    #[serde(default)]
    pub travel: TravelConfig,

    /// Theme settings applied at session start
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key (`SKYCAST_WEATHER_API_KEY` takes precedence)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Provider base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// City shown when the dashboard opens
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Delay between the last keystroke and a new fetch
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Per-request timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_city() -> String {
    "london".to_string()
}

fn default_debounce_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            default_city: default_city(),
            debounce_ms: default_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Gemini API key (`SKYCAST_SUGGEST_API_KEY` takes precedence)
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_suggest_base_url")]
    pub base_url: String,

    #[serde(default = "default_suggest_model")]
    pub model: String,
}

fn default_suggest_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_suggest_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_suggest_base_url(),
            model: default_suggest_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Destinations listed when the travel companion opens
    #[serde(default = "default_travel_cities")]
    pub cities: Vec<String>,
}

fn default_travel_cities() -> Vec<String> {
    vec!["Paris".to_string(), "Rome".to_string()]
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            cities: default_travel_cities(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme id selected at session start (default, sunset, forest, custom)
    #[serde(default = "default_theme")]
    pub initial: String,

    #[serde(default = "default_custom_start")]
    pub custom_background_start: String,

    #[serde(default = "default_custom_end")]
    pub custom_background_end: String,

    #[serde(default = "default_custom_accent")]
    pub custom_accent: String,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_custom_start() -> String {
    "#4f46e5".to_string()
}

fn default_custom_end() -> String {
    "#db2777".to_string()
}

fn default_custom_accent() -> String {
    "#a5b4fc".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial: default_theme(),
            custom_background_start: default_custom_start(),
            custom_background_end: default_custom_end(),
            custom_accent: default_custom_accent(),
        }
    }
}

/// Accepts `#rgb` and `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from the default location, creating it if missing,
    /// then apply environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating defaults if missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .map_err(|e| ConfigError::Read(format!("{}: {}", config_path.display(), e)))?;
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            config
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns `ConfigError::Invalid` if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config_path = Self::config_path()?;
        Self::load_validated_from(&config_path)
    }

    pub fn load_validated_from(config_path: &Path) -> Result<(Self, ValidationResult)> {
        let config = Self::load_from(config_path)?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Credentials from the environment win over the file.
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = non_empty(std::env::var(WEATHER_API_KEY_ENV).ok()) {
            self.weather.api_key = Some(key);
        }
        if let Some(key) = non_empty(std::env::var(SUGGEST_API_KEY_ENV).ok()) {
            self.suggestions.api_key = Some(key);
        }
        self.weather.api_key = non_empty(self.weather.api_key.take());
        self.suggestions.api_key = non_empty(self.suggestions.api_key.take());
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);
        self.validate_url(
            &self.suggestions.base_url,
            "suggestions.base_url",
            &mut result,
        );

        if self.weather.api_key.is_none() {
            result.add_warning(
                "weather.api_key",
                "Weather API key not configured - weather cannot be fetched",
            );
        }

        if self.suggestions.api_key.is_none() {
            result.add_warning(
                "suggestions.api_key",
                "Suggestion API key not configured - AI features will show a placeholder",
            );
        }

        if self.weather.default_city.trim().is_empty() {
            result.add_error("weather.default_city", "Default city cannot be empty");
        }

        if self.weather.debounce_ms == 0 {
            result.add_warning(
                "weather.debounce_ms",
                "Debounce disabled (0 ms) - every keystroke triggers a fetch",
            );
        }

        if self.weather.request_timeout_secs == 0 {
            result.add_error(
                "weather.request_timeout_secs",
                "Request timeout must be greater than 0",
            );
        }

        if self.suggestions.model.trim().is_empty() {
            result.add_error("suggestions.model", "Model name cannot be empty");
        }

        for (field, value) in [
            ("theme.custom_background_start", &self.theme.custom_background_start),
            ("theme.custom_background_end", &self.theme.custom_background_end),
            ("theme.custom_accent", &self.theme.custom_accent),
        ] {
            if !is_hex_color(value) {
                result.add_error(field, format!("Expected a #rrggbb color, got: {}", value));
            }
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound("no platform config directory".into()))?
            .join("skycast");

        Ok(config_dir.join("config.toml"))
    }
}
