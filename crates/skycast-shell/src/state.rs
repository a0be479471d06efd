//! Dashboard state owned by the shell's event loop.

use skycast_advisory::{AdvisoryEngine, FocusTimer, Mood, Recommendation};
use skycast_core::AppError;
use skycast_theme::{StylePalette, ThemeEngine, ThemeSelection};
use skycast_weather::WeatherSnapshot;

use crate::feature::Feature;
use crate::request::{RequestId, RequestTracker};
use crate::services::FetchError;
use crate::travel::TravelList;

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherView {
    Loading,
    Ready(WeatherSnapshot),
    /// User-facing message; no snapshot is kept
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionView {
    #[default]
    Idle,
    Loading,
    Ready(String),
}

#[derive(Debug)]
pub struct DashboardState {
    query: String,
    view: WeatherView,
    theme: ThemeSelection,
    active_feature: Feature,
    mood: Mood,
    timer: FocusTimer,
    travel: TravelList,
    suggestion: SuggestionView,
    weather_requests: RequestTracker,
    suggestion_requests: RequestTracker,
}

impl DashboardState {
    pub fn new(query: impl Into<String>, theme: ThemeSelection, travel: TravelList) -> Self {
        Self {
            query: query.into(),
            view: WeatherView::Loading,
            theme,
            active_feature: Feature::default(),
            mood: Mood::default(),
            timer: FocusTimer::default(),
            travel,
            suggestion: SuggestionView::default(),
            weather_requests: RequestTracker::new(),
            suggestion_requests: RequestTracker::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Record typed input. Fetching is the caller's (debounced) decision.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn view(&self) -> &WeatherView {
        &self.view
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.view {
            WeatherView::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            WeatherView::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view == WeatherView::Loading
    }

    /// Start a weather fetch; supersedes any in flight.
    pub fn begin_fetch(&mut self) -> RequestId {
        self.view = WeatherView::Loading;
        self.weather_requests.begin()
    }

    /// Apply a finished fetch. Returns false (and changes nothing) when a
    /// newer fetch has started since `request_id` was issued.
    pub fn apply_fetch(
        &mut self,
        request_id: RequestId,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> bool {
        if !self.weather_requests.is_current(request_id) {
            tracing::debug!("Dropping stale weather result {}", request_id);
            return false;
        }

        self.view = match result {
            Ok(snapshot) => {
                tracing::info!(
                    "Weather for {}: {}°C {}",
                    snapshot.location_name(),
                    snapshot.temperature_c(),
                    snapshot.condition()
                );
                WeatherView::Ready(snapshot)
            }
            Err(e) => {
                tracing::warn!("Weather fetch failed: {}", e);
                WeatherView::Failed(AppError::from(e).user_message().to_string())
            }
        };
        // Suggestions were built from the previous snapshot
        self.reset_suggestion();
        true
    }

    pub fn theme(&self) -> &ThemeSelection {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeSelection {
        &mut self.theme
    }

    /// Palette for the current theme and weather; `Clear` while nothing is
    /// loaded.
    pub fn palette(&self) -> StylePalette {
        ThemeEngine::derive(&self.theme, self.snapshot().map(|s| s.condition()))
    }

    pub fn active_feature(&self) -> Feature {
        self.active_feature
    }

    pub fn select_feature(&mut self, feature: Feature) {
        if self.active_feature != feature {
            self.active_feature = feature;
            self.reset_suggestion();
        }
    }

    /// Advisory for the active feature. None while loading or failed, and
    /// for features that are not advisory-driven.
    pub fn recommendation(&self) -> Option<Recommendation> {
        let domain = self.active_feature.advisory_domain()?;
        let snapshot = self.snapshot()?;
        Some(AdvisoryEngine::recommend(domain, snapshot))
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn set_mood(&mut self, mood: Mood) {
        if self.mood != mood {
            self.mood = mood;
            self.reset_suggestion();
        }
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut FocusTimer {
        &mut self.timer
    }

    pub fn travel(&self) -> &TravelList {
        &self.travel
    }

    pub fn travel_mut(&mut self) -> &mut TravelList {
        &mut self.travel
    }

    pub fn suggestion(&self) -> &SuggestionView {
        &self.suggestion
    }

    pub fn begin_suggestion(&mut self) -> RequestId {
        self.suggestion = SuggestionView::Loading;
        self.suggestion_requests.begin()
    }

    pub fn apply_suggestion(&mut self, request_id: RequestId, text: String) -> bool {
        if !self.suggestion_requests.is_current(request_id) {
            tracing::debug!("Dropping stale suggestion {}", request_id);
            return false;
        }
        self.suggestion = SuggestionView::Ready(text);
        true
    }

    fn reset_suggestion(&mut self) {
        self.suggestion_requests.invalidate();
        self.suggestion = SuggestionView::Idle;
    }
}
