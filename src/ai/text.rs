//! Text-only Gemini requests: soil descriptions, diversification plans,
//! weather advice and the Ask Expert chat.

use tracing::instrument;

use crate::ai::common::{generate, AiError};
use crate::ai::config::GeminiConfig;
use crate::ai::prompts;
use crate::weather::WeatherSnapshot;

async fn generate_text(config: &GeminiConfig, prompt: String) -> Result<String, AiError> {
    generate(config, vec![serde_json::json!({ "text": prompt })]).await
}

/// Assess soil quality from a farmer's free-form description.
#[instrument(level = "trace", skip(config))]
pub async fn analyze_soil_description(
    config: &GeminiConfig,
    description: &str,
) -> Result<String, AiError> {
    generate_text(config, prompts::soil_description_prompt(description)).await
}

/// Suggest diversification crops for a region and soil type.
#[instrument(level = "trace", skip(config))]
pub async fn diversification_plan(
    config: &GeminiConfig,
    region: &str,
    soil_type: &str,
    preferences: &str,
) -> Result<String, AiError> {
    generate_text(
        config,
        prompts::diversification_prompt(region, soil_type, preferences),
    )
    .await
}

/// Crop-specific advice for the current weather conditions.
#[instrument(level = "trace", skip(config, snapshot))]
pub async fn crop_weather_advice(
    config: &GeminiConfig,
    crop: &str,
    snapshot: &WeatherSnapshot,
) -> Result<String, AiError> {
    generate_text(config, prompts::weather_advice_prompt(crop, snapshot)).await
}

/// Answer an open-ended farming question.
#[instrument(level = "trace", skip(config))]
pub async fn answer_question(config: &GeminiConfig, question: &str) -> Result<String, AiError> {
    generate_text(config, prompts::expert_prompt(question)).await
}
