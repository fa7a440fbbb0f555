use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:8000/completions";
pub const DEFAULT_HISTORY_PATH: &str = "history.json";

/// Process-wide settings, built once at startup and passed by reference.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ComparatorConfig {
    pub openai: HostedProviderConfig,
    pub anthropic: HostedProviderConfig,
    pub mistral: HostedProviderConfig,
    pub local: LocalConfig,
    pub history: HistoryConfig,
}

/// Credentials and endpoint override for a hosted chat provider.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct HostedProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LocalConfig {
    pub endpoint: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_LOCAL_ENDPOINT.to_string() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_HISTORY_PATH) }
    }
}

impl HostedProviderConfig {
    /// The API key, if one is set and non-blank.
    pub fn key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

impl ComparatorConfig {
    /// Copy of the config with every API key masked, for display.
    pub fn redacted(&self) -> Self {
        let mask = |p: &HostedProviderConfig| HostedProviderConfig {
            api_key: p.key().map(|_| "[REDACTED]".to_string()),
            base_url: p.base_url.clone(),
        };
        Self {
            openai: mask(&self.openai),
            anthropic: mask(&self.anthropic),
            mistral: mask(&self.mistral),
            local: self.local.clone(),
            history: self.history.clone(),
        }
    }
}
