use std::time::Duration;

/// Output cap sent with every request.
pub const MAX_TOKENS: u32 = 1024;

/// Bound on each outbound provider call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
