use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use weather_core::{AiResponse, Config, WeatherData, WeatherSearchParams, llm, weather};

/// Build the API router. Configuration is captured once at startup; every
/// request still constructs its provider and client fresh.
pub fn router(config: Config) -> Router {
    Router::new()
        .route("/api/weather", post(weather_handler))
        .route("/api/llm", post(llm_handler))
        .with_state(config)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// An absent body counts as `null`; malformed JSON surfaces the parser's own
/// message as a client error.
fn parse_body(body: &[u8]) -> Result<Value, Response> {
    if body.is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body)
        .map_err(|err| error_response(StatusCode::BAD_REQUEST, err.to_string()))
}

async fn weather_handler(State(config): State<Config>, body: Bytes) -> Response {
    let value = match parse_body(&body) {
        Ok(value) => value,
        Err(response) => return response,
    };

    let query = value.get("query").and_then(Value::as_str).unwrap_or_default();
    if query.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Query parameter is required");
    }

    let params = WeatherSearchParams { query: query.to_string() };
    match fetch_weather(&config, &params).await {
        Ok(data) => Json(data).into_response(),
        Err(err) => {
            tracing::error!("Weather API error: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

async fn fetch_weather(
    config: &Config,
    params: &WeatherSearchParams,
) -> anyhow::Result<WeatherData> {
    let api_key = config.weather_api_key()?;
    let provider = weather::create(&config.weather_provider, api_key)?;
    provider.weather_data(params).await
}

async fn llm_handler(State(config): State<Config>, body: Bytes) -> Response {
    let value = match parse_body(&body) {
        Ok(value) => value,
        Err(response) => return response,
    };

    if value.is_null() {
        return error_response(StatusCode::BAD_REQUEST, "Weather data is required");
    }

    let weather: WeatherData = match serde_json::from_value(value) {
        Ok(weather) => weather,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, err.to_string()),
    };

    match suggest(&config, &weather).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            tracing::error!("LLM API error: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

async fn suggest(config: &Config, weather: &WeatherData) -> anyhow::Result<AiResponse> {
    let api_key = config.llm_api_key()?;
    let provider = llm::create(&config.llm_provider, api_key)?;
    provider.ai_suggestion(weather).await
}
