//! Weather backend: async city lookups for the dashboard.

use std::sync::Arc;

use skycast_weather::{WeatherError, WeatherProvider, WeatherSnapshot};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::request::RequestId;

/// Weather failures as the shell sees them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("City not found: {0}")]
    NotFound(String),
    #[error("Weather unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid weather response: {0}")]
    InvalidResponse(String),
    #[error("Weather API key is not configured")]
    MissingCredential,
}

impl From<WeatherError> for FetchError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::LocationNotFound(city) => FetchError::NotFound(city),
            WeatherError::ProviderUnavailable { status } => {
                FetchError::Unavailable(format!("HTTP {}", status))
            }
            WeatherError::Network(e) => FetchError::Unavailable(e.to_string()),
            WeatherError::Parse(s) => FetchError::InvalidResponse(s),
            WeatherError::MissingCredential => FetchError::MissingCredential,
        }
    }
}

/// Messages sent from async operations back to the dashboard
#[derive(Debug)]
pub enum WeatherServiceMessage {
    FetchDone {
        request_id: RequestId,
        city: String,
        result: Result<WeatherSnapshot, FetchError>,
    },
}

/// Fetch `city` on the runtime. Sends `FetchDone` tagged with `request_id`
/// when complete; the receiver decides whether the id is still current.
pub fn request_fetch<M>(
    tx: &UnboundedSender<M>,
    runtime: &Handle,
    provider: Arc<WeatherProvider>,
    request_id: RequestId,
    city: String,
) where
    M: From<WeatherServiceMessage> + Send + 'static,
{
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = provider.fetch(&city).await.map_err(|e| {
            tracing::warn!("Weather fetch {} for {:?} failed: {}", request_id, city, e);
            FetchError::from(e)
        });
        let _ = tx.send(M::from(WeatherServiceMessage::FetchDone {
            request_id,
            city,
            result,
        }));
    });
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::request::RequestTracker;
    use std::time::Duration;

    #[test]
    fn test_error_conversion() {
        assert_eq!(
            FetchError::from(WeatherError::LocationNotFound("Atlantis".into())),
            FetchError::NotFound("Atlantis".into())
        );
        assert_eq!(
            FetchError::from(WeatherError::ProviderUnavailable { status: 503 }),
            FetchError::Unavailable("HTTP 503".into())
        );
        assert_eq!(
            FetchError::from(WeatherError::MissingCredential),
            FetchError::MissingCredential
        );
    }

    #[tokio::test]
    async fn test_missing_credential_reported_over_channel() {
        let provider = match WeatherProvider::new(None, Duration::from_secs(1)) {
            Ok(p) => Arc::new(p),
            Err(e) => panic!("provider: {e}"),
        };
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<WeatherServiceMessage>();
        let id = RequestTracker::new().begin();

        request_fetch(&tx, &Handle::current(), provider, id, "London".into());

        match rx.recv().await {
            Some(WeatherServiceMessage::FetchDone {
                request_id,
                city,
                result,
            }) => {
                assert_eq!(request_id, id);
                assert_eq!(city, "London");
                assert_eq!(result, Err(FetchError::MissingCredential));
            }
            None => panic!("channel closed"),
        }
    }
}
