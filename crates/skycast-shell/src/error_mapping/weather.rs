use crate::services::weather_service::FetchError;
use skycast_core::{AppError, WeatherError};

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::NotFound(city) => AppError::Weather(WeatherError::LocationNotFound(city)),
            FetchError::Unavailable(s) => AppError::Weather(WeatherError::ProviderUnavailable(s)),
            FetchError::InvalidResponse(s) => {
                AppError::Weather(WeatherError::InvalidResponse(s))
            }
            FetchError::MissingCredential => AppError::Weather(WeatherError::MissingCredential),
        }
    }
}
