use crate::{
    http::HttpError,
    model::{WeatherData, WeatherSearchParams},
    weather::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// A weather backend behind the canonical `WeatherData` schema.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions plus the single-day hourly forecast.
    ///
    /// The current-conditions request is issued first; when it fails the
    /// forecast request is never attempted.
    async fn weather_data(&self, params: &WeatherSearchParams) -> anyhow::Result<WeatherData>;

    /// Current conditions only (`forecast` left empty).
    async fn current_weather(&self, params: &WeatherSearchParams) -> anyhow::Result<WeatherData>;
}

/// Construct the adapter for a configured provider name.
///
/// Pure function of its inputs: an unsupported name fails here, before any
/// network activity, and nothing is cached between calls.
pub fn create(provider: &str, api_key: &str) -> anyhow::Result<Box<dyn WeatherProvider>> {
    match provider {
        "weatherapi" => Ok(Box::new(WeatherApiProvider::new(api_key))),
        other => Err(anyhow::anyhow!("Unsupported weather provider: {other}")),
    }
}

/// Shared policy turning transport failures into domain-meaningful weather
/// errors. Each weather adapter funnels its own transport failures through
/// this before surfacing them; LLM adapters do not use it.
pub(crate) fn translate_transport_error(err: HttpError) -> anyhow::Error {
    match err.status() {
        Some(400) | Some(404) => anyhow::anyhow!("Location not found"),
        Some(401) => anyhow::anyhow!("Invalid API key"),
        Some(502) => anyhow::anyhow!("Service unavailable. Try again later"),
        // Every transport failure carries a message, so it passes through.
        _ => anyhow::anyhow!(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_provider_is_constructed() {
        let provider = create("weatherapi", "test-key");
        assert!(provider.is_ok());
    }

    #[test]
    fn unsupported_provider_fails_before_any_network_activity() {
        for name in ["openweather", "accuweather", "", "WeatherAPI"] {
            let err = create(name, "test-key").unwrap_err();
            assert_eq!(err.to_string(), format!("Unsupported weather provider: {name}"));
        }
    }

    #[test]
    fn bad_request_and_not_found_translate_to_location_not_found() {
        for status in [400, 404] {
            let err = translate_transport_error(HttpError::Status {
                status,
                reason: String::new(),
            });
            assert_eq!(err.to_string(), "Location not found");
        }
    }

    #[test]
    fn unauthorized_translates_to_invalid_api_key() {
        let err = translate_transport_error(HttpError::Status {
            status: 401,
            reason: "Unauthorized".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[test]
    fn bad_gateway_translates_to_service_unavailable() {
        let err = translate_transport_error(HttpError::Status {
            status: 502,
            reason: "Bad Gateway".to_string(),
        });
        assert_eq!(err.to_string(), "Service unavailable. Try again later");
    }

    #[test]
    fn other_statuses_pass_the_original_message_through() {
        let err = translate_transport_error(HttpError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        });
        assert_eq!(err.to_string(), "HTTP Error: 500 Internal Server Error");
    }
}
