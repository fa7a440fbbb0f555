use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::credentials::{MISTRAL_KEY_VAR, OPENAI_KEY_VAR};
use crate::config::HostedProviderConfig;
use crate::errors::ComparatorError;
use super::provider::{check_status, read_json, Adapter};
use super::types::{MAX_TOKENS, MISTRAL_BASE_URL, OPENAI_BASE_URL, REQUEST_TIMEOUT};

/// Adapter for the OpenAI chat-completions wire shape. Mistral speaks the
/// same protocol and is served by this type with a different base URL.
pub struct OpenAIAdapter {
    client: Client,
    api_key: String,
    base_url: String,
    provider: &'static str,
    timeout: Duration,
}

impl OpenAIAdapter {
    pub fn new(api_key: &str, base_url: &str, provider: &'static str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            provider,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn openai(config: &HostedProviderConfig) -> Result<Self, ComparatorError> {
        Self::from_config(config, OPENAI_KEY_VAR, OPENAI_BASE_URL, "openai")
    }

    pub fn mistral(config: &HostedProviderConfig) -> Result<Self, ComparatorError> {
        Self::from_config(config, MISTRAL_KEY_VAR, MISTRAL_BASE_URL, "mistral")
    }

    fn from_config(
        config: &HostedProviderConfig,
        key_var: &str,
        default_base_url: &str,
        provider: &'static str,
    ) -> Result<Self, ComparatorError> {
        let api_key = config
            .key()
            .ok_or_else(|| ComparatorError::Config(format!("{} not set", key_var)))?;
        let base_url = config.base_url.as_deref().unwrap_or(default_base_url);
        Ok(Self::new(api_key, base_url, provider))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Adapter for OpenAIAdapter {
    async fn ask(&self, prompt: &str, model: &str) -> Result<String, ComparatorError> {
        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": MAX_TOKENS,
        });

        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ComparatorError::from_reqwest(self.provider, e))?;

        let resp = check_status(self.provider, resp, &[&self.api_key]).await?;

        let data = read_json(self.provider, resp).await?;
        let content = extract_content(self.provider, &data)?;

        debug!(provider = self.provider, model, chars = content.len(), "Chat completion");
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        self.provider
    }
}

fn extract_content(provider: &str, data: &Value) -> Result<String, ComparatorError> {
    data["choices"][0]["message"]["content"]
        .as_str()
        .map(|text| text.trim().to_string())
        .ok_or_else(|| ComparatorError::Shape(format!("No content in {} response", provider)))
}
