//! Travel companion destinations with independent per-city weather.

use skycast_advisory::travel::destination_summary;
use skycast_core::AppError;
use skycast_weather::WeatherSnapshot;
use thiserror::Error;

use crate::request::{RequestId, RequestTracker};
use crate::services::FetchError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelError {
    #[error("City name is empty")]
    EmptyName,
    #[error("{0} is already in the list")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CityWeather {
    Pending,
    Loaded(WeatherSnapshot),
    /// User-facing message
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    name: String,
    weather: CityWeather,
    /// Lookup whose result may still land on this row
    in_flight: Option<RequestId>,
}

impl Destination {
    fn new(name: String) -> Self {
        Self {
            name,
            weather: CityWeather::Pending,
            in_flight: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weather(&self) -> &CityWeather {
        &self.weather
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.weather {
            CityWeather::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// One-line status for the destination row.
    pub fn summary(&self) -> String {
        match &self.weather {
            CityWeather::Pending => "Loading...".to_string(),
            CityWeather::Loaded(snapshot) => destination_summary(snapshot),
            CityWeather::Failed(message) => message.clone(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// Ordered destination list. Names are unique ignoring ASCII case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelList {
    destinations: Vec<Destination>,
    requests: RequestTracker,
}

impl TravelList {
    /// Seed from config; blanks and duplicates are skipped.
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for city in cities {
            if let Err(e) = list.add(city.as_ref()) {
                tracing::debug!("Skipping travel city: {}", e);
            }
        }
        list
    }

    pub fn add(&mut self, name: &str) -> Result<(), TravelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TravelError::EmptyName);
        }
        if let Some(existing) = self.get(name) {
            return Err(TravelError::Duplicate(existing.name.clone()));
        }
        self.destinations.push(Destination::new(name.to_string()));
        Ok(())
    }

    /// Returns false if no destination had that name.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.destinations.len();
        self.destinations.retain(|d| !d.matches(name));
        self.destinations.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.matches(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Issue a lookup token for every pending destination that has none in
    /// flight. Returns `(token, city)` pairs for the caller to dispatch.
    pub fn begin_pending(&mut self) -> Vec<(RequestId, String)> {
        let mut started = Vec::new();
        for destination in self
            .destinations
            .iter_mut()
            .filter(|d| d.weather == CityWeather::Pending && d.in_flight.is_none())
        {
            let request_id = self.requests.begin();
            destination.in_flight = Some(request_id);
            started.push((request_id, destination.name.clone()));
        }
        started
    }

    /// Reset one destination to pending with a fresh token. Any lookup
    /// already in flight for it becomes stale.
    pub fn begin_city(&mut self, name: &str) -> Option<(RequestId, String)> {
        let destination = self.destinations.iter_mut().find(|d| d.matches(name))?;
        let request_id = self.requests.begin();
        destination.weather = CityWeather::Pending;
        destination.in_flight = Some(request_id);
        Some((request_id, destination.name.clone()))
    }

    /// Apply a finished lookup. Returns false if the city was removed or
    /// the token was superseded.
    pub fn apply(
        &mut self,
        city: &str,
        request_id: RequestId,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> bool {
        let Some(destination) = self.destinations.iter_mut().find(|d| d.matches(city)) else {
            tracing::debug!("Dropping travel result {} for removed city {:?}", request_id, city);
            return false;
        };
        if destination.in_flight != Some(request_id) {
            tracing::debug!("Dropping stale travel result {} for {}", request_id, city);
            return false;
        }

        destination.in_flight = None;
        destination.weather = match result {
            Ok(snapshot) => CityWeather::Loaded(snapshot),
            Err(e) => {
                tracing::warn!("Travel weather for {} failed: {}", city, e);
                CityWeather::Failed(AppError::from(e).user_message().to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use skycast_weather::{Reading, WeatherCondition};

    fn snapshot(name: &str, temp: f64) -> WeatherSnapshot {
        WeatherSnapshot::builder(name)
            .temperature_c(temp)
            .condition(WeatherCondition::Clouds)
            .humidity_pct(60)
            .wind_kph(10.8)
            .cloud_cover_pct(20)
            .uv_index(Reading::Unavailable)
            .air_quality_index(Reading::Value(40.0))
            .build()
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicates() {
        let mut list = TravelList::new(["Paris", "Rome"]);
        assert_eq!(
            list.add("paris"),
            Err(TravelError::Duplicate("Paris".into()))
        );
        assert_eq!(list.add("  "), Err(TravelError::EmptyName));
        assert!(list.add(" Tokyo ").is_ok());

        let names: Vec<_> = list.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Paris", "Rome", "Tokyo"]);
    }

    #[test]
    fn test_new_skips_duplicates() {
        let list = TravelList::new(["Rome", "ROME", ""]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_by_name() {
        let mut list = TravelList::new(["Paris", "Rome"]);
        assert!(list.remove("rome"));
        assert!(!list.remove("Rome"));
        assert_eq!(list.len(), 1);
        assert!(list.get("Paris").is_some());
    }

    #[test]
    fn test_new_destination_is_pending() {
        let list = TravelList::new(["Paris"]);
        let paris = list.get("Paris").unwrap();
        assert_eq!(paris.weather(), &CityWeather::Pending);
        assert_eq!(paris.summary(), "Loading...");
    }

    #[test]
    fn test_begin_pending_skips_in_flight_and_loaded() {
        let mut list = TravelList::new(["Paris", "Rome"]);
        let started = list.begin_pending();
        assert_eq!(started.len(), 2);
        assert!(list.begin_pending().is_empty());

        let (paris_id, _) = started[0];
        assert!(list.apply("Paris", paris_id, Ok(snapshot("Paris", 12.6))));
        list.add("Oslo").unwrap();

        let cities: Vec<_> = list.begin_pending().into_iter().map(|(_, c)| c).collect();
        assert_eq!(cities, vec!["Oslo"]);
    }

    #[test]
    fn test_failure_is_isolated_per_city() {
        let mut list = TravelList::new(["Paris", "Atlantis"]);
        let started = list.begin_pending();

        assert!(list.apply("Paris", started[0].0, Ok(snapshot("Paris", 12.6))));
        assert!(list.apply(
            "Atlantis",
            started[1].0,
            Err(FetchError::NotFound("Atlantis".into()))
        ));

        assert_eq!(list.get("Paris").unwrap().summary(), "13°C, Clouds");
        assert_eq!(
            list.get("Atlantis").unwrap().weather(),
            &CityWeather::Failed("City not found. Please check the spelling.".into())
        );
    }

    #[test]
    fn test_superseded_lookup_is_dropped() {
        let mut list = TravelList::new(["Oslo"]);
        let (first, _) = list.begin_pending().remove(0);
        let (second, city) = list.begin_city("oslo").unwrap();
        assert_eq!(city, "Oslo");

        assert!(!list.apply("Oslo", first, Err(FetchError::Unavailable("HTTP 503".into()))));
        assert_eq!(list.get("Oslo").unwrap().weather(), &CityWeather::Pending);

        assert!(list.apply("Oslo", second, Ok(snapshot("Oslo", -3.0))));
        assert!(list.get("Oslo").unwrap().snapshot().is_some());
        assert!(list.begin_city("Lima").is_none());
    }

    #[test]
    fn test_result_for_removed_city_is_dropped() {
        let mut list = TravelList::new(["Rome"]);
        let (id, _) = list.begin_pending().remove(0);
        list.remove("Rome");
        list.add("Rome").unwrap();

        assert!(!list.apply("Rome", id, Ok(snapshot("Rome", 20.0))));
        assert_eq!(list.get("Rome").unwrap().weather(), &CityWeather::Pending);
    }
}
