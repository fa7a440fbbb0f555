use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::LocalConfig;
use crate::errors::ComparatorError;
use super::provider::{check_status, read_json, Adapter};
use super::types::{MAX_TOKENS, REQUEST_TIMEOUT};

/// Self-hosted endpoint speaking the legacy completions shape
/// (`{prompt, max_tokens}` in, `{completion}` out).
pub struct LocalAdapter {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl LocalAdapter {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn from_config(config: &LocalConfig) -> Self {
        Self::new(&config.endpoint)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Adapter for LocalAdapter {
    /// The endpoint picks its own model, so `model` is only logged.
    async fn ask(&self, prompt: &str, model: &str) -> Result<String, ComparatorError> {
        let body = json!({
            "prompt": prompt,
            "max_tokens": MAX_TOKENS,
        });

        let resp = self.client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ComparatorError::from_reqwest("local", e))?;

        let resp = check_status("local", resp, &[]).await?;
        let data = read_json("local", resp).await?;
        let content = extract_completion(&data);

        debug!(endpoint = %self.endpoint, model, chars = content.len(), "Local completion");
        Ok(content)
    }

    fn provider_name(&self) -> &str { "local" }
}

/// A missing or non-string `completion` field yields an empty reply.
fn extract_completion(data: &Value) -> String {
    data["completion"].as_str().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_completion() {
        assert_eq!(extract_completion(&json!({"completion": " 42\n"})), "42");
    }

    #[test]
    fn test_missing_completion_is_empty() {
        assert_eq!(extract_completion(&json!({"text": "elsewhere"})), "");
        assert_eq!(extract_completion(&json!({"completion": null})), "");
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let adapter = LocalAdapter::from_config(&LocalConfig::default());
        assert_eq!(adapter.endpoint, "http://localhost:8000/completions");
        assert_eq!(adapter.timeout, Duration::from_secs(30));
    }
}
