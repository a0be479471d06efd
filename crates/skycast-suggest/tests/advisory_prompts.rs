//! Advisory prompts relayed through the suggestion client.

use std::time::Duration;

use skycast_advisory::mood::mood_prompt;
use skycast_advisory::travel::itinerary_prompt;
use skycast_advisory::Mood;
use skycast_suggest::SuggestionClient;
use skycast_weather::{WeatherCondition, WeatherSnapshot};
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

fn client(server: &MockServer) -> SuggestionClient {
    SuggestionClient::new(Some("test-key".to_string()), Duration::from_secs(5))
        .map(|c| c.with_base_url(server.uri()))
        .unwrap_or_else(|e| panic!("client: {e}"))
}

#[tokio::test]
async fn mood_prompt_reaches_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("I'm feeling energetic."))
        .and(body_string_contains("The weather is Snow at -2°C."))
        .respond_with(reply("Build a **snow fort**."))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = WeatherSnapshot::builder("Oslo")
        .temperature_c(-2.0)
        .condition(WeatherCondition::Snow)
        .build();

    let text = client(&server)
        .suggest(&mood_prompt(&snapshot, Mood::Energetic))
        .await;
    assert_eq!(text, "Build a snow fort.");
}

#[tokio::test]
async fn itinerary_headings_are_stripped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("one-day travel itinerary"))
        .respond_with(reply("### Morning\nCoffee by the Seine"))
        .mount(&server)
        .await;

    let snapshot = WeatherSnapshot::builder("Paris")
        .temperature_c(18.0)
        .condition(WeatherCondition::Clouds)
        .build();

    let text = client(&server)
        .suggest(&itinerary_prompt("Paris", &snapshot))
        .await;
    assert_eq!(text, " Morning\nCoffee by the Seine");
}
