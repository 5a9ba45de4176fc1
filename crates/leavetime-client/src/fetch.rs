use std::time::Duration;

use leavetime_types::{FetchError, FetchResult, StatusPayload};

/// Matches the host-network conditions the widget was tuned for.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Client for the commute status endpoint.
///
/// Holds a configured `reqwest::Client` so repeated renders reuse the
/// connection pool, but carries no other state between calls.
pub struct StatusClient {
    client: reqwest::Client,
    endpoint: String,
}

impl StatusClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET, one parse. Transport failures (timeout, refused connection,
    /// DNS) and non-2xx statuses become `Unreachable`; a body that is not a
    /// valid status payload becomes `InvalidPayload`.
    pub async fn fetch_status(&self) -> FetchResult<StatusPayload> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FetchError::Unreachable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Unreachable(format!(
                "server returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Unreachable(err.to_string()))?;

        parse_status_body(&body)
    }
}

/// Validate and parse a response body.
///
/// The payload must at least carry a boolean `active` field; anything less
/// is `InvalidPayload` rather than a guessed default.
pub fn parse_status_body(body: &str) -> FetchResult<StatusPayload> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if !value
        .get("active")
        .is_some_and(serde_json::Value::is_boolean)
    {
        return Err(FetchError::InvalidPayload(
            "missing or non-boolean `active` field".to_string(),
        ));
    }

    Ok(serde_json::from_value(value)?)
}
