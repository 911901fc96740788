use std::fmt;

use anyhow::{Context, Result};

/// Output file used when neither `--output` nor `CV_OUTPUT_PATH` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "cv_content.json";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Process configuration loaded once from environment variables.
/// Fails at startup if the provider API key is missing.
#[derive(Clone)]
pub struct Config {
    pub groq_api_key: String,
    /// Overrides the provider endpoint (OpenAI-compatible gateways).
    pub groq_api_url: Option<String>,
    pub llm_timeout_secs: u64,
    /// Retries on 429/5xx/transport errors. 0 means a single attempt.
    pub llm_max_retries: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_api_url: optional_env("GROQ_API_URL"),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            llm_max_retries: parse_env("LLM_MAX_RETRIES", 0)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("groq_api_key", &"<redacted>")
            .field("groq_api_url", &self.groq_api_url)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("llm_max_retries", &self.llm_max_retries)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        None => Ok(default),
    }
}
