//! OpenWeatherMap client producing [`WeatherSnapshot`]s.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::retry::{self, RetryConfig};
use crate::types::{Reading, WeatherCondition, WeatherError, WeatherSnapshot};

const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org";

/// Provider AQI is ordinal 1-5; scale onto ~0-100.
pub const AQI_SCALE: f64 = 20.0;

/// m/s to km/h
pub const MPS_TO_KPH: f64 = 3.6;

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    coord: Coord,
    #[serde(default)]
    weather: Vec<ConditionEntry>,
    main: MainBlock,
    #[serde(default)]
    wind: WindBlock,
    #[serde(default)]
    clouds: CloudsBlock,
    name: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Coord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    main: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Default, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct CloudsBlock {
    #[serde(default)]
    all: f64,
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    main: AirPollutionMain,
}

#[derive(Debug, Deserialize)]
struct AirPollutionMain {
    aqi: f64,
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherProvider {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key,
            base_url: OPENWEATHER_API_BASE.to_string(),
        })
    }

    /// Point the client at another host (self-hosted proxy, mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch current weather for a city, then its air quality.
    ///
    /// Air quality is best-effort: if that call fails the snapshot carries
    /// `Reading::Unavailable`.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingCredential)?;

        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::LocationNotFound(String::new()));
        }

        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("units", "metric"), ("appid", api_key)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!("City not found: {}", city);
            return Err(WeatherError::LocationNotFound(city.to_string()));
        }
        if !status.is_success() {
            tracing::warn!("Weather request for {} returned {}", city, status);
            return Err(WeatherError::ProviderUnavailable {
                status: status.as_u16(),
            });
        }

        let current: CurrentResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(format!("current weather: {}", e)))?;

        let air_quality = self.fetch_air_quality(api_key, current.coord).await;

        let condition = current
            .weather
            .first()
            .map(|entry| WeatherCondition::from_keyword(&entry.main))
            .unwrap_or_default();

        let snapshot = WeatherSnapshot::builder(current.name)
            .temperature_c(current.main.temp)
            .condition(condition)
            .wind_kph(current.wind.speed * MPS_TO_KPH)
            .humidity_pct(percent(current.main.humidity))
            .cloud_cover_pct(percent(current.clouds.all))
            .air_quality_index(air_quality)
            // Not offered on this provider tier
            .uv_index(Reading::Unavailable)
            .build();

        tracing::debug!(
            "Fetched {}: {}°C {}",
            snapshot.location_name(),
            snapshot.temperature_c(),
            snapshot.condition()
        );
        Ok(snapshot)
    }

    /// Fetch with exponential backoff on transient failures.
    pub async fn fetch_with_retry(
        &self,
        city: &str,
        config: &RetryConfig,
    ) -> Result<WeatherSnapshot, WeatherError> {
        retry::with_retry(config, || self.fetch(city)).await
    }

    async fn fetch_air_quality(&self, api_key: &str, coord: Coord) -> Reading {
        let url = format!("{}/data/2.5/air_pollution", self.base_url);
        let lat = coord.lat.to_string();
        let lon = coord.lon.to_string();

        let response = match self
            .client
            .get(&url)
            .query(&[("lat", lat.as_str()), ("lon", lon.as_str()), ("appid", api_key)])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Could not fetch air quality data: {}", e);
                return Reading::Unavailable;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Air quality request returned status {}", response.status());
            return Reading::Unavailable;
        }

        match response.json::<AirPollutionResponse>().await {
            Ok(body) => body
                .list
                .first()
                .map(|entry| entry.main.aqi * AQI_SCALE)
                .into(),
            Err(e) => {
                tracing::warn!("Air quality parse error: {}", e);
                Reading::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn current_body(name: &str, condition: &str) -> serde_json::Value {
        serde_json::json!({
            "coord": {"lat": 51.51, "lon": -0.13},
            "weather": [{"id": 500, "main": condition, "description": "light rain"}],
            "main": {"temp": 12.5, "humidity": 81},
            "wind": {"speed": 5.0},
            "clouds": {"all": 75},
            "name": name
        })
    }

    fn provider(server: &MockServer) -> WeatherProvider {
        WeatherProvider::new(Some("test_key".to_string()), Duration::from_secs(5))
            .unwrap()
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_fetch_maps_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "london"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body("London", "Rain")))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/air_pollution"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [{"main": {"aqi": 3}}]
            })))
            .mount(&mock_server)
            .await;

        let snapshot = provider(&mock_server).fetch("london").await.unwrap();

        assert_eq!(snapshot.location_name(), "London");
        assert_eq!(snapshot.condition(), WeatherCondition::Rain);
        assert_eq!(snapshot.temperature_c(), 12.5);
        assert!((snapshot.wind_kph() - 18.0).abs() < 1e-9);
        assert_eq!(snapshot.humidity_pct(), 81);
        assert_eq!(snapshot.cloud_cover_pct(), 75);
        assert_eq!(snapshot.air_quality_index(), Reading::Value(60.0));
        assert_eq!(snapshot.uv_index(), Reading::Unavailable);
    }

    #[tokio::test]
    async fn test_unknown_condition_falls_back_to_clear() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Delhi", "Smoke")))
            .mount(&mock_server)
            .await;

        let snapshot = provider(&mock_server).fetch("delhi").await.unwrap();
        assert_eq!(snapshot.condition(), WeatherCondition::Clear);
    }

    #[tokio::test]
    async fn test_air_quality_failure_is_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Rome", "Clear")))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/air_pollution"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let snapshot = provider(&mock_server).fetch("rome").await.unwrap();
        assert_eq!(snapshot.air_quality_index(), Reading::Unavailable);
    }

    #[tokio::test]
    async fn test_city_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "cod": "404", "message": "city not found"
            })))
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server).fetch("Atlantis").await;
        assert!(matches!(result, Err(WeatherError::LocationNotFound(ref c)) if c == "Atlantis"));
    }

    #[tokio::test]
    async fn test_server_error_is_provider_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server).fetch("london").await;
        assert!(matches!(
            result,
            Err(WeatherError::ProviderUnavailable { status: 401 })
        ));
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let provider = WeatherProvider::new(None, Duration::from_secs(5))
            .unwrap()
            .with_base_url(mock_server.uri());

        let result = provider.fetch("london").await;
        assert!(matches!(result, Err(WeatherError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_retry_recovers_from_outage() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris", "Clouds")))
            .mount(&mock_server)
            .await;

        let snapshot = provider(&mock_server)
            .fetch_with_retry("paris", &RetryConfig::new(2, 1, 5))
            .await
            .unwrap();

        assert_eq!(snapshot.location_name(), "Paris");
    }

    #[tokio::test]
    async fn test_retry_does_not_repeat_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server)
            .fetch_with_retry("Atlantis", &RetryConfig::new(3, 1, 5))
            .await;

        assert!(matches!(result, Err(WeatherError::LocationNotFound(_))));
    }
}
