use anyhow::{Result, anyhow};
use std::env;

/// Provider used when `WEATHER_PROVIDER` is unset.
pub const DEFAULT_WEATHER_PROVIDER: &str = "weatherapi";

/// Provider used when `LLM_PROVIDER` is unset.
pub const DEFAULT_LLM_PROVIDER: &str = "openai";

/// Read-only configuration consumed by the core, supplied by the
/// environment. Provider names fall back to a baseline provider; API keys
/// have no default and their absence is a hard error at the point of use.
#[derive(Debug, Clone)]
pub struct Config {
    pub weather_provider: String,
    pub weather_api_key: Option<String>,
    pub llm_provider: String,
    pub llm_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_provider: DEFAULT_WEATHER_PROVIDER.to_string(),
            weather_api_key: None,
            llm_provider: DEFAULT_LLM_PROVIDER.to_string(),
            llm_api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from `WEATHER_PROVIDER`, `WEATHER_API_KEY`,
    /// `LLM_PROVIDER` and `LLM_API_KEY`. Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            weather_provider: non_empty_var("WEATHER_PROVIDER")
                .unwrap_or_else(|| DEFAULT_WEATHER_PROVIDER.to_string()),
            weather_api_key: non_empty_var("WEATHER_API_KEY"),
            llm_provider: non_empty_var("LLM_PROVIDER")
                .unwrap_or_else(|| DEFAULT_LLM_PROVIDER.to_string()),
            llm_api_key: non_empty_var("LLM_API_KEY"),
        }
    }

    /// Weather API key, or the validation error surfaced to the caller.
    pub fn weather_api_key(&self) -> Result<&str> {
        self.weather_api_key
            .as_deref()
            .ok_or_else(|| anyhow!("WEATHER_API_KEY environment variable is required"))
    }

    /// LLM API key, or the validation error surfaced to the caller.
    pub fn llm_api_key(&self) -> Result<&str> {
        self.llm_api_key
            .as_deref()
            .ok_or_else(|| anyhow!("LLM_API_KEY environment variable is required"))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
