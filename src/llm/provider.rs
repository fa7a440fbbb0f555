use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;

use crate::config::credentials::redact_credentials;
use crate::errors::ComparatorError;
use crate::utils::truncation::truncate_error;
use super::catalog::ModelEntry;

/// One provider backend: turns a plain prompt into that provider's wire
/// format and extracts plain text back out.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Send a single-turn prompt to `model` and return the trimmed reply text.
    async fn ask(&self, prompt: &str, model: &str) -> Result<String, ComparatorError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}

/// Executes a registry entry against its backend.
#[async_trait]
pub trait Invoke: Send + Sync {
    async fn invoke(&self, entry: &ModelEntry, prompt: &str) -> Result<String, ComparatorError>;
}

/// Turn a non-success HTTP response into `HttpStatus`, preferring the
/// provider's `error.message` over the raw body. Any of `secrets` echoed back
/// in the body is redacted.
pub(crate) async fn check_status(
    provider: &str,
    resp: Response,
    secrets: &[&str],
) -> Result<Response, ComparatorError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(body);

    Err(ComparatorError::HttpStatus {
        provider: provider.to_string(),
        status: status.as_u16(),
        message: truncate_error(redact_credentials(message.trim(), secrets).as_str()),
    })
}

/// Decode a response body as JSON, reporting a malformed body as a shape error.
pub(crate) async fn read_json(provider: &str, resp: Response) -> Result<Value, ComparatorError> {
    let body = resp
        .text()
        .await
        .map_err(|e| ComparatorError::from_reqwest(provider, e))?;
    serde_json::from_str(&body)
        .map_err(|e| ComparatorError::Shape(format!("Failed to parse {} response: {}", provider, e)))
}
