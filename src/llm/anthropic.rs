use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::credentials::ANTHROPIC_KEY_VAR;
use crate::config::HostedProviderConfig;
use crate::errors::ComparatorError;
use super::provider::{check_status, read_json, Adapter};
use super::types::{ANTHROPIC_BASE_URL, ANTHROPIC_VERSION, MAX_TOKENS, REQUEST_TIMEOUT};

pub struct AnthropicAdapter {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl AnthropicAdapter {
    pub fn new(api_key: &str, base_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or(ANTHROPIC_BASE_URL).trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn from_config(config: &HostedProviderConfig) -> Result<Self, ComparatorError> {
        let api_key = config
            .key()
            .ok_or_else(|| ComparatorError::Config(format!("{} not set", ANTHROPIC_KEY_VAR)))?;
        Ok(Self::new(api_key, config.base_url.as_deref()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Adapter for AnthropicAdapter {
    async fn ask(&self, prompt: &str, model: &str) -> Result<String, ComparatorError> {
        let body = json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "messages": [{"role": "user", "content": prompt}]
        });

        let resp = self.client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ComparatorError::from_reqwest("anthropic", e))?;

        let resp = check_status("anthropic", resp, &[&self.api_key]).await?;
        let data = read_json("anthropic", resp).await?;
        let content = extract_text(&data)?;

        let input_tokens = data["usage"]["input_tokens"].as_u64();
        let output_tokens = data["usage"]["output_tokens"].as_u64();
        debug!(model, input_tokens, output_tokens, "Anthropic completion");

        Ok(content)
    }

    fn provider_name(&self) -> &str { "anthropic" }
}

/// The reply is a list of content segments; the first segment's text is used.
fn extract_text(data: &Value) -> Result<String, ComparatorError> {
    data["content"][0]["text"]
        .as_str()
        .map(|text| text.trim().to_string())
        .ok_or_else(|| ComparatorError::Shape("No content in anthropic response".into()))
}
