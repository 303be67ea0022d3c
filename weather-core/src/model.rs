use serde::{Deserialize, Serialize};

/// Search input for the weather providers.
///
/// `query` is either a free-text place name or a `"<lat>,<lon>"` pair; the
/// core forwards it verbatim to the upstream provider without parsing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSearchParams {
    pub query: String,
}

/// Canonical weather snapshot every provider adapter normalizes into.
///
/// Built in one expression inside the adapter and never mutated afterwards;
/// each instance is owned by the request that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: Location,
    pub current: CurrentConditions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<WeatherForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localtime: Option<String>,
}

/// Current conditions in the provider's native units.
///
/// Temperature and feels-like are rounded to the nearest integer by the
/// adapter; the remaining numeric fields pass through unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u8,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub visibility: f64,
    pub uv_index: f64,
    pub condition: Condition,
}

/// Free-text description, icon reference and numeric condition code, copied
/// verbatim from the provider. The code is presentation-only and not
/// validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: u32,
}

/// One day's hourly breakdown, in the order the provider returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub date: String,
    pub hour: Vec<ForecastHour>,
}

/// Hourly temperatures stay unrounded, unlike the current-conditions block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastHour {
    pub time: String,
    pub temperature: f64,
    pub humidity: u8,
    #[serde(rename = "feelsLike")]
    pub feels_like: f64,
    pub chance_of_rain: u8,
    pub chance_of_snow: u8,
    pub condition: Condition,
}

/// Output of an LLM provider: a short free-text productivity tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub suggestion: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> WeatherData {
        WeatherData {
            location: Location {
                name: "London".to_string(),
                country: "United Kingdom".to_string(),
                lat: 51.52,
                lon: -0.11,
                localtime: Some("2024-01-15 14:30".to_string()),
            },
            current: CurrentConditions {
                temperature: 8,
                feels_like: 6,
                humidity: 81,
                pressure: 29.91,
                wind_speed: 13.0,
                wind_direction: "WSW".to_string(),
                visibility: 10.0,
                uv_index: 1.0,
                condition: Condition {
                    text: "Partly cloudy".to_string(),
                    icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
                    code: 1003,
                },
            },
            forecast: None,
        }
    }

    #[test]
    fn current_conditions_serialize_with_camel_case_wire_names() {
        let value = serde_json::to_value(sample()).expect("serialization must succeed");

        let current = &value["current"];
        assert_eq!(current["feelsLike"], json!(6));
        assert_eq!(current["windSpeed"], json!(13.0));
        assert_eq!(current["windDirection"], json!("WSW"));
        assert_eq!(current["uvIndex"], json!(1.0));
        assert_eq!(current["condition"]["code"], json!(1003));
    }

    #[test]
    fn absent_forecast_is_omitted_from_the_wire() {
        let value = serde_json::to_value(sample()).expect("serialization must succeed");
        assert!(value.get("forecast").is_none());
    }

    #[test]
    fn forecast_hour_keeps_mixed_wire_naming() {
        let hour = ForecastHour {
            time: "2024-01-15 00:00".to_string(),
            temperature: 10.0,
            humidity: 85,
            feels_like: 8.5,
            chance_of_rain: 20,
            chance_of_snow: 0,
            condition: Condition {
                text: "Partly cloudy".to_string(),
                icon: "//cdn.weatherapi.com/weather/64x64/night/116.png".to_string(),
                code: 1003,
            },
        };

        let value = serde_json::to_value(hour).expect("serialization must succeed");
        assert_eq!(value["feelsLike"], json!(8.5));
        assert_eq!(value["chance_of_rain"], json!(20));
        assert_eq!(value["chance_of_snow"], json!(0));
    }
}
