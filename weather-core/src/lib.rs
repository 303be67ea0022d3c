//! Core library for the weather dashboard backend.
//!
//! This crate defines:
//! - Configuration read from the environment
//! - The canonical weather/LLM data model
//! - A minimal transport client with uniform error translation
//! - Provider abstractions and factories for weather and LLM backends
//!
//! It is used by `weather-server`, but can also be reused by other binaries
//! or services. Nothing in here logs or holds state across requests.

pub mod config;
pub mod http;
pub mod llm;
pub mod model;
pub mod weather;

pub use config::Config;
pub use http::{HttpClient, HttpError};
pub use llm::LlmProvider;
pub use model::{
    AiResponse, Condition, CurrentConditions, ForecastHour, Location, WeatherData,
    WeatherForecast, WeatherSearchParams,
};
pub use weather::WeatherProvider;
