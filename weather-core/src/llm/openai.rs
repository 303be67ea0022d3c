use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::model::{AiResponse, WeatherData};

use super::LlmProvider;

const BASE_URL: &str = "https://api.openai.com/v1";

const MODEL: &str = "gpt-4.1";

const INSTRUCTIONS: &str = "You are a friendly, supportive partner who helps people to get \
                            motivated and be productive by giving tips by looking at weather \
                            data. But keep your suggestions short";

/// Adapter for the OpenAI Responses API.
///
/// Failures are propagated as-is; the weather error-translation policy does
/// not apply to LLM calls.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenAiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Same adapter against a different base URL, used by tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: base_url.into(), http: Client::new() }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn ai_suggestion(&self, weather: &WeatherData) -> Result<AiResponse> {
        let input = build_prompt(weather)?;
        let request = ResponsesRequest { model: MODEL, instructions: INSTRUCTIONS, input: &input };

        let res = self
            .http
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to OpenAI")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read OpenAI response body")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "OpenAI request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: ResponsesApiResponse =
            serde_json::from_str(&body).context("Failed to parse OpenAI response JSON")?;

        Ok(AiResponse { suggestion: parsed.output_text() })
    }
}

/// The whole weather snapshot, pretty-printed, followed by the fixed
/// tip-request sentence.
fn build_prompt(weather: &WeatherData) -> Result<String> {
    let weather_json =
        serde_json::to_string_pretty(weather).context("Failed to serialize weather data")?;

    Ok(format!(
        "{weather_json} for a this type of weather give me a tip or a suggestion to improve \
         my productivity"
    ))
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponsesApiResponse {
    output: Vec<OutputItem>,
}

impl ResponsesApiResponse {
    /// Concatenation of every `output_text` fragment in the `message` output
    /// items, the value vendor SDKs expose as `output_text`.
    fn output_text(&self) -> String {
        self.output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content.iter())
            .filter(|content| content.kind == "output_text")
            .map(|content| content.text.as_str())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
