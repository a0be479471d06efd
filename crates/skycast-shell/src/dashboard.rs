//! Headless dashboard controller.
//!
//! Owns the [`DashboardState`] and is the only place it is mutated. Async
//! work (debounced input, weather fetches, travel lookups, suggestions)
//! reports back over a single channel; the embedding UI drains it with [`Dashboard::process_pending`]
//! from its event loop or awaits [`Dashboard::process_next`].

use std::sync::Arc;
use std::time::Duration;

use skycast_advisory::mood::mood_prompt;
use skycast_advisory::travel::itinerary_prompt;
use skycast_suggest::SuggestionClient;
use skycast_weather::{RetryConfig, WeatherProvider};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::debounce::Debouncer;
use crate::request::RequestId;
use crate::services::{
    request_city_weather, request_suggestion, request_weather_fetch, SuggestionServiceMessage,
    TravelServiceMessage, WeatherServiceMessage,
};
use crate::state::DashboardState;

#[derive(Debug)]
pub enum ShellEvent {
    /// Typing stopped on this query
    QuerySettled(String),
    Weather(WeatherServiceMessage),
    Travel(TravelServiceMessage),
    Suggestion(SuggestionServiceMessage),
}

impl From<WeatherServiceMessage> for ShellEvent {
    fn from(msg: WeatherServiceMessage) -> Self {
        ShellEvent::Weather(msg)
    }
}

impl From<TravelServiceMessage> for ShellEvent {
    fn from(msg: TravelServiceMessage) -> Self {
        ShellEvent::Travel(msg)
    }
}

impl From<SuggestionServiceMessage> for ShellEvent {
    fn from(msg: SuggestionServiceMessage) -> Self {
        ShellEvent::Suggestion(msg)
    }
}

pub struct Dashboard {
    state: DashboardState,
    weather: Arc<WeatherProvider>,
    suggestions: Arc<SuggestionClient>,
    retry: RetryConfig,
    runtime: Handle,
    debouncer: Debouncer,
    tx: UnboundedSender<ShellEvent>,
    rx: UnboundedReceiver<ShellEvent>,
}

impl Dashboard {
    pub fn new(
        state: DashboardState,
        weather: Arc<WeatherProvider>,
        suggestions: Arc<SuggestionClient>,
        debounce: Duration,
        runtime: Handle,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            weather,
            suggestions,
            retry: RetryConfig::default(),
            debouncer: Debouncer::new(debounce, runtime.clone()),
            runtime,
            tx,
            rx,
        }
    }

    /// Backoff used by travel destination lookups.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Record typed input and fetch once it has been stable for the
    /// debounce delay. Blank input cancels any pending fetch.
    pub fn input_query(&mut self, query: &str) {
        self.state.set_query(query);

        let query = query.trim().to_string();
        if query.is_empty() {
            self.debouncer.cancel();
            return;
        }

        let tx = self.tx.clone();
        self.debouncer.schedule(async move {
            let _ = tx.send(ShellEvent::QuerySettled(query));
        });
    }

    /// Fetch the current query immediately. None if the query is blank.
    pub fn refresh(&mut self) -> Option<RequestId> {
        self.debouncer.cancel();
        let city = self.state.query().trim().to_string();
        if city.is_empty() {
            tracing::debug!("Ignoring refresh of a blank query");
            return None;
        }
        Some(self.fetch(city))
    }

    fn fetch(&mut self, city: String) -> RequestId {
        let request_id = self.state.begin_fetch();
        tracing::info!("Fetching weather for {:?} ({})", city, request_id);
        request_weather_fetch(
            &self.tx,
            &self.runtime,
            Arc::clone(&self.weather),
            request_id,
            city,
        );
        request_id
    }

    /// Ask for an activity matching the current mood and weather. None
    /// while no snapshot is loaded.
    pub fn request_mood_suggestion(&mut self) -> Option<RequestId> {
        let prompt = mood_prompt(self.state.snapshot()?, self.state.mood());
        Some(self.suggest(prompt))
    }

    /// Ask for an itinerary for a loaded travel destination.
    pub fn request_itinerary(&mut self, city: &str) -> Option<RequestId> {
        let destination = self.state.travel().get(city)?;
        let prompt = itinerary_prompt(destination.name(), destination.snapshot()?);
        Some(self.suggest(prompt))
    }

    fn suggest(&mut self, prompt: String) -> RequestId {
        let request_id = self.state.begin_suggestion();
        request_suggestion(
            &self.tx,
            &self.runtime,
            Arc::clone(&self.suggestions),
            request_id,
            prompt,
        );
        request_id
    }

    /// Start a lookup for every pending travel destination. Returns the
    /// number of lookups dispatched; each reports back as its own event.
    pub fn refresh_travel(&mut self) -> usize {
        let started = self.state.travel_mut().begin_pending();
        let count = started.len();
        for (request_id, city) in started {
            self.dispatch_city(request_id, city);
        }
        count
    }

    /// Reload one destination. None if it is not in the list.
    pub fn retry_destination(&mut self, city: &str) -> Option<RequestId> {
        let (request_id, city) = self.state.travel_mut().begin_city(city)?;
        self.dispatch_city(request_id, city);
        Some(request_id)
    }

    fn dispatch_city(&self, request_id: RequestId, city: String) {
        tracing::debug!("Fetching travel weather for {:?} ({})", city, request_id);
        request_city_weather(
            &self.tx,
            &self.runtime,
            Arc::clone(&self.weather),
            self.retry.clone(),
            request_id,
            city,
        );
    }

    /// Apply every event already queued without waiting.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next event and apply it. Returns false if the event
    /// was a stale result and left the state untouched.
    pub async fn process_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => self.handle(event),
            // Unreachable while self.tx is alive
            None => false,
        }
    }

    fn handle(&mut self, event: ShellEvent) -> bool {
        match event {
            ShellEvent::QuerySettled(query) => {
                // Input may have changed after the debounce timer fired
                if query != self.state.query().trim() {
                    tracing::debug!("Dropping settled query {:?}", query);
                    return false;
                }
                self.fetch(query);
                true
            }
            ShellEvent::Weather(WeatherServiceMessage::FetchDone {
                request_id,
                city,
                result,
            }) => {
                tracing::debug!("Weather result {} for {:?}", request_id, city);
                self.state.apply_fetch(request_id, result)
            }
            ShellEvent::Travel(TravelServiceMessage::CityDone {
                request_id,
                city,
                result,
            }) => self.state.travel_mut().apply(&city, request_id, result),
            ShellEvent::Suggestion(SuggestionServiceMessage::SuggestionDone {
                request_id,
                text,
            }) => self.state.apply_suggestion(request_id, text),
        }
    }
}
