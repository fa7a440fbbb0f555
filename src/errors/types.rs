use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComparatorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("{provider} returned HTTP {status}: {message}")]
    HttpStatus {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ComparatorError {
    /// Map a reqwest send/receive failure onto the transport variants.
    pub fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ComparatorError::Timeout(format!("{} request timed out", provider))
        } else {
            ComparatorError::Network(format!("{} request failed: {}", provider, err))
        }
    }
}
