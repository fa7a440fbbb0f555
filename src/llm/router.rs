use async_trait::async_trait;

use crate::config::ComparatorConfig;
use crate::errors::ComparatorError;
use super::anthropic::AnthropicAdapter;
use super::catalog::{ModelEntry, ProviderKind};
use super::local::LocalAdapter;
use super::openai::OpenAIAdapter;
use super::provider::{Adapter, Invoke};

/// Build the adapter for an entry's provider. Fails only when a hosted
/// provider has no API key configured.
pub fn create_adapter(
    config: &ComparatorConfig,
    provider: ProviderKind,
) -> Result<Box<dyn Adapter>, ComparatorError> {
    match provider {
        ProviderKind::OpenAI => Ok(Box::new(OpenAIAdapter::openai(&config.openai)?)),
        ProviderKind::Mistral => Ok(Box::new(OpenAIAdapter::mistral(&config.mistral)?)),
        ProviderKind::Anthropic => Ok(Box::new(AnthropicAdapter::from_config(&config.anthropic)?)),
        ProviderKind::Local => Ok(Box::new(LocalAdapter::from_config(&config.local))),
    }
}

/// Send `prompt` to the model an entry names.
pub async fn invoke(
    config: &ComparatorConfig,
    entry: &ModelEntry,
    prompt: &str,
) -> Result<String, ComparatorError> {
    let adapter = create_adapter(config, entry.provider)?;
    adapter.ask(prompt, entry.model).await
}

/// `Invoke` backed by the real provider adapters.
pub struct Router<'a> {
    config: &'a ComparatorConfig,
}

impl<'a> Router<'a> {
    pub fn new(config: &'a ComparatorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl<'a> Invoke for Router<'a> {
    async fn invoke(&self, entry: &ModelEntry, prompt: &str) -> Result<String, ComparatorError> {
        invoke(self.config, entry, prompt).await
    }
}
