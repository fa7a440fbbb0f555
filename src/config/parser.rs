use std::path::{Path, PathBuf};
use crate::errors::ComparatorError;
use super::credentials::{apply_env_overrides, resolve_references};
use super::types::ComparatorConfig;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Build the effective configuration: defaults, then the optional YAML file,
/// then environment overrides. A dotenv file is read into the environment
/// first; `env_file` names it explicitly, otherwise `.env` is searched for
/// from the working directory upwards.
pub async fn load_config(
    path: Option<&Path>,
    env_file: Option<&Path>,
) -> Result<ComparatorConfig, ComparatorError> {
    if let Some(loaded) = load_env_file(env_file)? {
        debug!(path = %loaded.display(), "Loaded environment file");
    }

    let lookup = |name: &str| std::env::var(name).ok();

    let mut config = match path {
        Some(path) => parse_config(path, &lookup).await?,
        None => ComparatorConfig::default(),
    };
    apply_env_overrides(&mut config, &lookup);
    validate_config(&config)?;

    debug!(
        openai = config.openai.key().is_some(),
        anthropic = config.anthropic.key().is_some(),
        mistral = config.mistral.key().is_some(),
        history = %config.history.path.display(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Variables already present in the process environment keep their values.
/// A missing `.env` is fine; a missing explicit file is not.
pub fn load_env_file(env_file: Option<&Path>) -> Result<Option<PathBuf>, ComparatorError> {
    match env_file {
        Some(path) => dotenvy::from_path(path)
            .map(|()| Some(path.to_path_buf()))
            .map_err(|e| {
                ComparatorError::Config(format!("Failed to load env file {}: {}", path.display(), e))
            }),
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(ComparatorError::Config(format!("Failed to load .env: {}", e))),
        },
    }
}

pub async fn parse_config(
    path: &Path,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<ComparatorConfig, ComparatorError> {
    if !path.exists() {
        return Err(ComparatorError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(ComparatorError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content, lookup)
}

pub fn parse_config_str(
    content: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<ComparatorConfig, ComparatorError> {
    // An empty file is a valid, all-defaults config
    if content.trim().is_empty() {
        return Ok(ComparatorConfig::default());
    }
    let mut config: ComparatorConfig = serde_yaml::from_str(content)?;
    resolve_references(&mut config, lookup);
    Ok(config)
}

/// Reject endpoints that reqwest could never reach.
fn validate_config(config: &ComparatorConfig) -> Result<(), ComparatorError> {
    check_url("local.endpoint", &config.local.endpoint)?;
    for (name, provider) in [
        ("openai.base_url", &config.openai),
        ("anthropic.base_url", &config.anthropic),
        ("mistral.base_url", &config.mistral),
    ] {
        if let Some(url) = &provider.base_url {
            check_url(name, url)?;
        }
    }

    if config.openai.key().is_none() {
        warn!("OPENAI_API_KEY not set; OpenAI models will report a configuration error");
    }
    Ok(())
}

fn check_url(field: &str, url: &str) -> Result<(), ComparatorError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ComparatorError::Config(format!(
            "{} must be an http(s) URL, got '{}'",
            field, url
        )))
    }
}
