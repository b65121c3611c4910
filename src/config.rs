use crate::ai::GeminiConfig;
use crate::weather::WeatherConfig;

/// Runtime configuration assembled from environment variables.
///
/// Either provider may be absent; the matching features degrade with a notice
/// instead of failing at startup.
#[derive(Clone)]
pub struct Config {
    pub ai: Option<GeminiConfig>,
    pub weather: Option<WeatherConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            ai: GeminiConfig::from_env(),
            weather: WeatherConfig::from_env(),
        }
    }
}
