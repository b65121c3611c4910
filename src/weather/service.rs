use std::env;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("Weather API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Failed to fetch weather data: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid weather response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    /// Override for tests; `None` means the public OpenWeatherMap endpoint.
    pub base_url: Option<String>,
}

impl WeatherConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("OPENWEATHER_API_KEY").ok()?;
        if api_key.is_empty() {
            return None;
        }
        let base_url = env::var("OPENWEATHER_API_URL").ok();
        Some(Self { api_key, base_url })
    }
}

/// Current conditions for one location, already converted to metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub description: String,
    /// Rain volume for the last hour in mm, absent when there was none.
    pub rainfall_1h: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmWeather>,
    wind: OwmWind,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

/// Fetches current weather for an Indian city via OpenWeatherMap.
///
/// An empty `state` narrows the query to just `"{city}, India"`.
#[instrument(level = "trace", skip(config))]
pub async fn fetch_current(
    config: &WeatherConfig,
    city: &str,
    state: &str,
) -> Result<WeatherSnapshot, WeatherError> {
    let query = if state.is_empty() {
        format!("{city}, India")
    } else {
        format!("{city}, {state}, India")
    };
    let url = config.base_url.as_deref().unwrap_or(OPENWEATHER_API_URL);

    debug!(query = %query, "fetching current weather");

    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    let response = client
        .get(url)
        .query(&[
            ("q", query.as_str()),
            ("appid", config.api_key.as_str()),
            ("units", "metric"),
        ])
        .send()
        .await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(WeatherError::CityNotFound(query));
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        warn!(status = %status, "OpenWeatherMap request failed");
        return Err(WeatherError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let data: OwmResponse = response.json().await?;
    let conditions = data.weather.first().ok_or_else(|| {
        WeatherError::InvalidResponse("response carried no weather conditions".to_string())
    })?;

    let snapshot = WeatherSnapshot {
        temperature: data.main.temp,
        feels_like: data.main.feels_like,
        temp_min: data.main.temp_min,
        temp_max: data.main.temp_max,
        humidity: data.main.humidity,
        pressure: data.main.pressure,
        wind_speed: data.wind.speed,
        description: conditions.description.clone(),
        rainfall_1h: data.rain.and_then(|rain| rain.one_hour),
    };

    info!(
        temperature = snapshot.temperature,
        humidity = snapshot.humidity,
        "weather data fetched"
    );

    Ok(snapshot)
}
