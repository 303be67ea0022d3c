use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    http::HttpClient,
    model::{
        Condition, CurrentConditions, ForecastHour, Location, WeatherData, WeatherForecast,
        WeatherSearchParams,
    },
};

use super::{WeatherProvider, translate_transport_error};

const BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Adapter for WeatherAPI.com (`/current.json` + `/forecast.json`).
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: HttpClient,
}

impl WeatherApiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Same adapter against a different base URL, used by tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), http: HttpClient::new(base_url) }
    }

    async fn fetch_current(&self, params: &WeatherSearchParams) -> Result<WeatherData> {
        let response: WaCurrentResponse = self
            .http
            .get(
                "/current.json",
                &[("q", params.query.as_str()), ("key", self.api_key.as_str())],
            )
            .await
            .map_err(translate_transport_error)?;

        Ok(transform_current(response))
    }

    async fn fetch_forecast(&self, params: &WeatherSearchParams) -> Result<WeatherForecast> {
        let response: WaForecastResponse = self
            .http
            .get(
                "/forecast.json",
                &[("q", params.query.as_str()), ("key", self.api_key.as_str())],
            )
            .await
            .map_err(translate_transport_error)?;

        transform_forecast(response)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn weather_data(&self, params: &WeatherSearchParams) -> Result<WeatherData> {
        // Current conditions first; a failure here means the forecast
        // request is never issued.
        let current = self.fetch_current(params).await?;
        let forecast = self.fetch_forecast(params).await?;

        Ok(WeatherData { forecast: Some(forecast), ..current })
    }

    async fn current_weather(&self, params: &WeatherSearchParams) -> Result<WeatherData> {
        self.fetch_current(params).await
    }
}

/// Current conditions → canonical shape. Temperature and feels-like round to
/// the nearest integer; pressure stays in inches of mercury, the unit this
/// provider reports; everything else passes through unrounded.
fn transform_current(response: WaCurrentResponse) -> WeatherData {
    WeatherData {
        location: Location {
            name: response.location.name,
            country: response.location.country,
            lat: response.location.lat,
            lon: response.location.lon,
            localtime: response.location.localtime,
        },
        current: CurrentConditions {
            temperature: round_half_up(response.current.temp_c),
            feels_like: round_half_up(response.current.feelslike_c),
            humidity: response.current.humidity,
            pressure: response.current.pressure_in,
            wind_speed: response.current.wind_kph,
            wind_direction: response.current.wind_dir,
            visibility: response.current.vis_km,
            uv_index: response.current.uv,
            condition: response.current.condition.into(),
        },
        forecast: None,
    }
}

/// Nearest-integer rounding with ties toward positive infinity
/// (-0.5 → 0, -2.5 → -2), the rounding the dashboard has always displayed.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Forecast → canonical shape. Only the first forecast day is kept, in
/// upstream hour order; hourly temperatures are not rounded.
fn transform_forecast(response: WaForecastResponse) -> Result<WeatherForecast> {
    let day = response
        .forecast
        .forecastday
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("WeatherAPI response contained no forecast day"))?;

    Ok(WeatherForecast {
        date: day.date,
        hour: day
            .hour
            .into_iter()
            .map(|hour| ForecastHour {
                time: hour.time,
                temperature: hour.temp_c,
                humidity: hour.humidity,
                feels_like: hour.feelslike_c,
                chance_of_rain: hour.chance_of_rain,
                chance_of_snow: hour.chance_of_snow,
                condition: hour.condition.into(),
            })
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    lat: f64,
    lon: f64,
    localtime: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
    code: u32,
}

impl From<WaCondition> for Condition {
    fn from(condition: WaCondition) -> Self {
        Condition { text: condition.text, icon: condition.icon, code: condition.code }
    }
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    pressure_in: f64,
    wind_kph: f64,
    wind_dir: String,
    vis_km: f64,
    uv: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaCurrentResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    time: String,
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    chance_of_rain: u8,
    chance_of_snow: u8,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    hour: Vec<WaForecastHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    forecast: WaForecast,
}
