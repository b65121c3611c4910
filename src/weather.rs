pub mod advice;
pub mod service;

pub use advice::{
    format_snapshot, generic_recommendations, get_recommendations, WEATHER_DATA_UNAVAILABLE,
};
pub use service::{fetch_current, WeatherConfig, WeatherError, WeatherSnapshot};
