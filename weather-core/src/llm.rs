use crate::{
    llm::openai::OpenAiProvider,
    model::{AiResponse, WeatherData},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openai;

/// An LLM backend that turns a weather snapshot into a short suggestion.
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    async fn ai_suggestion(&self, weather: &WeatherData) -> anyhow::Result<AiResponse>;
}

/// Construct the adapter for a configured LLM provider name.
///
/// Same contract as the weather factory: unsupported names fail before any
/// network activity, and nothing is cached between calls.
pub fn create(provider: &str, api_key: &str) -> anyhow::Result<Box<dyn LlmProvider>> {
    match provider {
        "openai" => Ok(Box::new(OpenAiProvider::new(api_key))),
        other => Err(anyhow::anyhow!("Unsupported llm provider: {other}")),
    }
}
