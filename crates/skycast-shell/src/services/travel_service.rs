//! Travel backend: per-destination lookups with retry.

use std::sync::Arc;

use skycast_weather::{RetryConfig, WeatherProvider, WeatherSnapshot};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::request::RequestId;
use crate::services::FetchError;

#[derive(Debug)]
pub enum TravelServiceMessage {
    CityDone {
        request_id: RequestId,
        city: String,
        result: Result<WeatherSnapshot, FetchError>,
    },
}

/// Look up one destination on the runtime, retrying transient failures.
/// Sends `CityDone` tagged with the destination's token.
pub fn request_city_weather<M>(
    tx: &UnboundedSender<M>,
    runtime: &Handle,
    provider: Arc<WeatherProvider>,
    retry: RetryConfig,
    request_id: RequestId,
    city: String,
) where
    M: From<TravelServiceMessage> + Send + 'static,
{
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = provider
            .fetch_with_retry(&city, &retry)
            .await
            .map_err(FetchError::from);
        let _ = tx.send(M::from(TravelServiceMessage::CityDone {
            request_id,
            city,
            result,
        }));
    });
}
