use std::fmt;

use serde::Serialize;

/// Backend family a registry entry dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAI,
    Anthropic,
    Mistral,
    Local,
}

impl ProviderKind {
    pub fn id(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Mistral => "mistral",
            ProviderKind::Local => "local",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::Mistral => "Mistral",
            ProviderKind::Local => "Local endpoint",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    pub label: &'static str,
    pub provider: ProviderKind,
    pub model: &'static str,
    /// Preselected when the caller names no models.
    pub default_selected: bool,
}

pub static MODELS: &[ModelEntry] = &[
    ModelEntry { label: "GPT-3.5-turbo (OpenAI)", provider: ProviderKind::OpenAI, model: "gpt-3.5-turbo", default_selected: true },
    ModelEntry { label: "GPT-4o (OpenAI)", provider: ProviderKind::OpenAI, model: "gpt-4o", default_selected: true },
    ModelEntry { label: "Claude 3 Opus (Anthropic)", provider: ProviderKind::Anthropic, model: "claude-3-opus-20240229", default_selected: false },
    ModelEntry { label: "Claude 3.5 Sonnet (Anthropic)", provider: ProviderKind::Anthropic, model: "claude-3-5-sonnet-20240620", default_selected: false },
    ModelEntry { label: "Mistral-small-latest (Mistral)", provider: ProviderKind::Mistral, model: "mistral-small-latest", default_selected: false },
    ModelEntry { label: "Mistral-large-latest (Mistral)", provider: ProviderKind::Mistral, model: "mistral-large-latest", default_selected: false },
    ModelEntry { label: "Local endpoint (example)", provider: ProviderKind::Local, model: "local", default_selected: false },
];

/// Exact label lookup.
pub fn resolve(label: &str) -> Option<&'static ModelEntry> {
    MODELS.iter().find(|m| m.label == label)
}

/// Label lookup that also accepts a bare model identifier such as `gpt-4o`.
pub fn resolve_alias(name: &str) -> Option<&'static ModelEntry> {
    resolve(name).or_else(|| MODELS.iter().find(|m| m.model.eq_ignore_ascii_case(name)))
}

pub fn labels() -> impl Iterator<Item = &'static str> {
    MODELS.iter().map(|m| m.label)
}

pub fn default_labels() -> Vec<&'static str> {
    MODELS.iter().filter(|m| m.default_selected).map(|m| m.label).collect()
}
