use super::types::{ComparatorConfig, HostedProviderConfig};
use tracing::debug;

pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";
pub const ANTHROPIC_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const MISTRAL_KEY_VAR: &str = "MISTRAL_API_KEY";
pub const LOCAL_ENDPOINT_VAR: &str = "COMPARATOR_LOCAL_ENDPOINT";
pub const HISTORY_PATH_VAR: &str = "COMPARATOR_HISTORY_PATH";

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference. An unset reference resolves to `None`.
pub fn resolve_credential(value: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    if let Some(var_name) = value.strip_prefix('$') {
        match lookup(var_name) {
            Some(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                Some(resolved)
            }
            None => {
                debug!(var = %var_name, "Environment variable not set");
                None
            }
        }
    } else {
        Some(value.to_string())
    }
}

/// Resolve `$VAR` references in every API key of a parsed config file.
pub fn resolve_references(config: &mut ComparatorConfig, lookup: &impl Fn(&str) -> Option<String>) {
    for provider in [&mut config.openai, &mut config.anthropic, &mut config.mistral] {
        resolve_provider(provider, lookup);
    }
}

fn resolve_provider(provider: &mut HostedProviderConfig, lookup: &impl Fn(&str) -> Option<String>) {
    provider.api_key = provider
        .api_key
        .as_deref()
        .and_then(|value| resolve_credential(value, lookup));
}

/// Apply environment overrides on top of defaults or file values.
/// Unset or blank variables leave the existing value untouched.
pub fn apply_env_overrides(config: &mut ComparatorConfig, lookup: &impl Fn(&str) -> Option<String>) {
    let non_blank = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

    if let Some(key) = non_blank(OPENAI_KEY_VAR) {
        config.openai.api_key = Some(key);
    }
    if let Some(key) = non_blank(ANTHROPIC_KEY_VAR) {
        config.anthropic.api_key = Some(key);
    }
    if let Some(key) = non_blank(MISTRAL_KEY_VAR) {
        config.mistral.api_key = Some(key);
    }
    if let Some(endpoint) = non_blank(LOCAL_ENDPOINT_VAR) {
        config.local.endpoint = endpoint;
    }
    if let Some(path) = non_blank(HISTORY_PATH_VAR) {
        config.history.path = path.into();
    }
}

/// Redact sensitive values in a string. Replaces each secret with [REDACTED].
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if !secret.is_empty() && secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}
