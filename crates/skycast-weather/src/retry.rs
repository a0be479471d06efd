//! Retry utilities for provider calls with exponential backoff.
//!
//! Retries transient failures:
//! - Timeouts and connection resets
//! - 5xx server errors, 429 and 408
//!
//! It does NOT retry:
//! - 404 (unknown city) or other 4xx client errors
//! - Missing credentials or malformed responses

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;

/// Default retry configuration
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 100;
pub const DEFAULT_MAX_DELAY_MS: u64 = 5000;

/// Retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial delay between retries (doubles each attempt)
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
        }
    }
}

impl RetryConfig {
    pub fn new(max_retries: u32, initial_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_retries,
            initial_delay: Duration::from_millis(initial_delay_ms),
            max_delay: Duration::from_millis(max_delay_ms),
        }
    }

    /// Calculate the delay for a given attempt number
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        // initial_delay * 2^attempt, capped
        let factor = 2u64.saturating_pow(attempt);
        let delay_ms = (self.initial_delay.as_millis() as u64).saturating_mul(factor);
        let capped = delay_ms.min(self.max_delay.as_millis() as u64);
        Duration::from_millis(capped)
    }
}

/// Error classification for retry decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry,
    NoRetry,
}

/// Errors that know whether another attempt could succeed.
pub trait Retryable {
    fn retry_decision(&self) -> RetryDecision;
}

/// Check if a reqwest error is retryable
pub fn is_retryable_error(error: &reqwest::Error) -> RetryDecision {
    if error.is_timeout() {
        tracing::debug!("Request timed out, will retry");
        return RetryDecision::Retry;
    }

    if error.is_connect() {
        tracing::debug!("Connection error, will retry");
        return RetryDecision::Retry;
    }

    if error.is_request() {
        tracing::debug!("Request error, not retryable");
        return RetryDecision::NoRetry;
    }

    if let Some(status) = error.status() {
        return is_retryable_status(status);
    }

    RetryDecision::NoRetry
}

/// Check if a status code is retryable
pub fn is_retryable_status(status: StatusCode) -> RetryDecision {
    if status.is_server_error() {
        tracing::debug!("Server error ({}), will retry", status);
        return RetryDecision::Retry;
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::debug!("Rate limited (429), will retry");
        return RetryDecision::Retry;
    }

    if status == StatusCode::REQUEST_TIMEOUT {
        tracing::debug!("Request timeout (408), will retry");
        return RetryDecision::Retry;
    }

    RetryDecision::NoRetry
}

/// Run `operation` until it succeeds, fails permanently, or retries run out.
///
/// # Example
/// ```ignore
/// let snapshot = with_retry(&RetryConfig::default(), || provider.fetch("Paris")).await?;
/// ```
pub async fn with_retry<T, E, F, Fut>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    tracing::info!("Request succeeded after {} retries", attempt);
                }
                return Ok(value);
            }
            Err(e) => {
                if e.retry_decision() == RetryDecision::NoRetry {
                    tracing::debug!("Non-retryable error: {}", e);
                    return Err(e);
                }

                if attempt >= config.max_retries {
                    tracing::error!("All {} retry attempts exhausted: {}", attempt + 1, e);
                    return Err(e);
                }

                let delay = config.delay_for_attempt(attempt);
                tracing::warn!(
                    "Retryable error on attempt {} of {}: {}, waiting {:?}",
                    attempt + 1,
                    config.max_retries + 1,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
