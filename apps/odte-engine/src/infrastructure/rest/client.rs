//! JSON-over-HTTP client with retry logic.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::RestError;
use super::retry::{ErrorCategory, ExponentialBackoff, RetryConfig, categorize_status};

const USER_AGENT: &str = concat!("odte-engine/", env!("CARGO_PKG_VERSION"));

/// Shared REST client for the read-only data providers.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl RestClient {
    /// Create a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `RestError::Network` if the underlying client cannot be built.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        retry_config: RetryConfig,
    ) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RestError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_config,
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with `query` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns a `RestError` on non-success status, undecodable body, or when
    /// retries on transient failures are exhausted.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RestError> {
        let url = format!("{}{path}", self.base_url);
        let mut backoff = ExponentialBackoff::new(&self.retry_config);

        loop {
            let response = match self.client.get(&url).query(query).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    let last_error = e.to_string();
                    if let Some(delay) = backoff.next_backoff() {
                        tracing::warn!(
                            error = %last_error,
                            delay_ms = delay.as_millis(),
                            attempt = backoff.attempt,
                            "Network error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(exhausted(&backoff, last_error));
                }
            };

            let status = response.status();

            if status.is_success() {
                let text = response
                    .text()
                    .await
                    .map_err(|e| RestError::Network(e.to_string()))?;
                return serde_json::from_str(&text)
                    .map_err(|e| RestError::JsonParse(e.to_string()));
            }

            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };

            match categorize_status(status) {
                ErrorCategory::Retryable => {
                    if let Some(delay) = backoff.next_backoff() {
                        tracing::warn!(
                            status = status.as_u16(),
                            delay_ms = delay.as_millis(),
                            attempt = backoff.attempt,
                            "Retryable error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(exhausted(
                        &backoff,
                        format!("HTTP {}: {message}", status.as_u16()),
                    ));
                }
                ErrorCategory::NonRetryable => {
                    return Err(RestError::Status {
                        status: status.as_u16(),
                        message,
                    });
                }
            }
        }
    }
}

fn exhausted(backoff: &ExponentialBackoff, last_error: String) -> RestError {
    RestError::MaxRetriesExceeded {
        attempts: backoff.attempt,
        last_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RestClient::new(
            "https://example.test/",
            Duration::from_secs(1),
            RetryConfig::none(),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://example.test");
    }
}
