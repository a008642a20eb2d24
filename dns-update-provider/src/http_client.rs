//! Shared HTTP plumbing for registrar requests.
//!
//! Signing stays with the provider, which hands over a fully built
//! `RequestBuilder`. This module sends it, classifies transport failures,
//! logs traffic (bodies truncated) and applies the retry policy.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Upper bound for a server-suggested `Retry-After` wait.
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// Retry behaviour for transient failures.
///
/// `max_retries == 0` sends each request exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub const fn with_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
        }
    }

    /// Exponential backoff: base, 2×base, 4×base, ... capped at `max_delay`.
    fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1_u32 << attempt.min(20);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    fn delay_for(&self, error: &ProviderError, attempt: u32) -> Duration {
        match error {
            ProviderError::RateLimited {
                retry_after: Some(secs),
                ..
            } => Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS)),
            _ => self.backoff(attempt),
        }
    }
}

/// A raw HTTP exchange result: status code and body text.
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and reads the body.
///
/// HTTP 429 becomes [`ProviderError::RateLimited`]; 502–504 become
/// [`ProviderError::NetworkError`]. Every other status is handed back so the
/// provider can decode its own error envelope.
pub async fn send_once(
    request: RequestBuilder,
    provider: &str,
    action: &str,
) -> Result<RawResponse, ProviderError> {
    log::debug!("[{provider}] -> {action}");

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::Timeout {
                provider: provider.to_string(),
                detail: e.to_string(),
            }
        } else {
            ProviderError::NetworkError {
                provider: provider.to_string(),
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    if status == 429 {
        let body = response.text().await.unwrap_or_default();
        log::warn!("[{provider}] {action} rate limited (HTTP 429), retry_after={retry_after:?}");
        return Err(ProviderError::RateLimited {
            provider: provider.to_string(),
            retry_after,
            raw_message: Some(body),
        });
    }

    if matches!(status, 502..=504) {
        let body = response.text().await.unwrap_or_default();
        log::warn!("[{provider}] {action} upstream unavailable (HTTP {status})");
        return Err(ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

    log::debug!(
        "[{provider}] <- {action} HTTP {status}: {}",
        truncate_for_log(&body)
    );

    Ok(RawResponse { status, body })
}

/// Sends a request under `policy`, retrying only transient failures.
pub async fn send_with_retry(
    request: RequestBuilder,
    provider: &str,
    action: &str,
    policy: RetryPolicy,
) -> Result<RawResponse, ProviderError> {
    if policy.max_retries == 0 {
        return send_once(request, provider, action).await;
    }

    let mut attempt = 0;
    loop {
        let Some(req) = request.try_clone() else {
            log::warn!("[{provider}] {action}: request body is not cloneable, sending once");
            return send_once(request, provider, action).await;
        };

        match send_once(req, provider, action).await {
            Err(e) if attempt < policy.max_retries && is_retryable(&e) => {
                let delay = policy.delay_for(&e, attempt);
                log::warn!(
                    "[{provider}] {action} failed (attempt {}/{}), retrying in {:.1}s: {e}",
                    attempt + 1,
                    policy.max_retries,
                    delay.as_secs_f32(),
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}

/// Decodes a JSON body, logging the (truncated) body on failure.
pub fn parse_json<T: DeserializeOwned>(body: &str, provider: &str) -> Result<T, ProviderError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!(
            "[{provider}] JSON parse failed: {e}; body: {}",
            truncate_for_log(body)
        );
        ProviderError::ParseError {
            provider: provider.to_string(),
            detail: e.to_string(),
        }
    })
}

/// Network errors, timeouts and throttling may succeed later; nothing else does.
fn is_retryable(error: &ProviderError) -> bool {
    matches!(
        error,
        ProviderError::NetworkError { .. }
            | ProviderError::Timeout { .. }
            | ProviderError::RateLimited { .. }
    )
}
