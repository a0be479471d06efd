//! Gemini `generateContent` client.

use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::error::SuggestionError;
use crate::text::strip_markdown;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionClient {
    client: Arc<Client>,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl SuggestionClient {
    /// A blank key counts as unconfigured.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, SuggestionError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: GEMINI_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send `prompt` and return the provider's raw text.
    #[instrument(skip(self, prompt), level = "info")]
    pub async fn try_suggest(&self, prompt: &str) -> Result<String, SuggestionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SuggestionError::MissingCredential)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Suggestion request returned {}", status);
            return Err(SuggestionError::Api {
                status: status.as_u16(),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .into_text()
            .filter(|text| !text.trim().is_empty())
            .ok_or(SuggestionError::EmptyResponse)
    }

    /// Never fails: errors become the matching placeholder. Markdown
    /// markers are stripped from successful responses.
    pub async fn suggest(&self, prompt: &str) -> String {
        match self.try_suggest(prompt).await {
            Ok(text) => strip_markdown(&text),
            Err(e) => {
                tracing::warn!("Suggestion unavailable: {}", e);
                e.user_message().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::error::{EMPTY_RESPONSE_MESSAGE, FAILURE_MESSAGE, MISSING_CREDENTIAL_MESSAGE};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn client(server: &MockServer, key: Option<&str>) -> SuggestionClient {
        SuggestionClient::new(key.map(String::from), Duration::from_secs(5))
            .unwrap()
            .with_base_url(server.uri())
    }

    fn text_response(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        })
    }

    #[tokio::test]
    async fn test_sends_prompt_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", "test-key"))
            .and(body_json(serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Hello" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("**Nap** time")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, Some("test-key"));
        assert_eq!(client.try_suggest("Hello").await.unwrap(), "**Nap** time");
    }

    #[tokio::test]
    async fn test_suggest_strips_markdown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("## Walk\n**Go**")))
            .mount(&server)
            .await;

        let client = client(&server, Some("test-key"));
        assert_eq!(client.suggest("anything").await, " Walk\nGo");
    }

    #[tokio::test]
    async fn test_custom_model_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, Some("test-key")).with_model("gemini-pro");
        assert_eq!(client.suggest("p").await, "ok");
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client(&server, None);
        assert!(!client.has_credential());
        assert_eq!(client.suggest("p").await, MISSING_CREDENTIAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_blank_key_is_missing() {
        let server = MockServer::start().await;
        let client = client(&server, Some("   "));
        assert!(matches!(
            client.try_suggest("p").await,
            Err(SuggestionError::MissingCredential)
        ));
    }

    #[tokio::test]
    async fn test_http_error_degrades() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client(&server, Some("test-key"));
        assert!(matches!(
            client.try_suggest("p").await,
            Err(SuggestionError::Api { status: 500 })
        ));
        assert_eq!(client.suggest("p").await, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_no_candidates_degrades() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let client = client(&server, Some("test-key"));
        assert_eq!(client.suggest("p").await, EMPTY_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unparseable_body_degrades() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client(&server, Some("test-key"));
        assert_eq!(client.suggest("p").await, FAILURE_MESSAGE);
    }
}
