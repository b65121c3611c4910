//! Prompt builders for the assistant's Gemini requests.
//!
//! Centralizing these makes it easy to tweak how diseases, soils and weather
//! advice are asked for without digging through the request modules. All
//! prompts target small-scale Indian farmers and ask for simple Hindi/English
//! mixed language where the reply is farmer-facing.

use crate::weather::WeatherSnapshot;

/// Vision prompt for crop disease and pest identification.
pub fn disease_prompt(crop: &str) -> String {
    let crop_line = if crop.is_empty() {
        "Try to identify the crop type.".to_string()
    } else {
        format!("Crop type: {crop}")
    };

    format!(
        "Analyze this agricultural image and provide:\n\
         1. Identify any crop disease or pest infestation visible\n\
         2. Describe the symptoms clearly\n\
         3. Provide treatment recommendations in simple Hindi/English for Indian farmers\n\
         4. Suggest organic and chemical treatment options\n\
         5. Preventive measures\n\n\
         {crop_line}\n\n\
         Respond in simple, accessible language suitable for small-scale Indian farmers."
    )
}

/// Vision prompt for assessing soil from a photo.
pub const SOIL_IMAGE_PROMPT: &str = "Analyze this soil image and provide:\n\
    1. Visual assessment of soil texture and color\n\
    2. Likely soil type (sandy, clayey, loamy)\n\
    3. Visible organic matter content\n\
    4. Drainage assessment\n\
    5. Recommendations for improvement\n\n\
    Respond in simple Hindi/English mixed language for Indian farmers.";

/// Text prompt for assessing soil from a farmer's description.
pub fn soil_description_prompt(description: &str) -> String {
    format!(
        "Based on this soil description: \"{description}\"\n\
         Provide:\n\
         1. Soil type assessment\n\
         2. Fertility analysis\n\
         3. Improvement suggestions with organic and chemical options\n\
         4. Suitable crops for this soil type\n\
         5. Nutrient management recommendations\n\n\
         Respond in simple Hindi/English mixed language for Indian farmers."
    )
}

/// Prompt for crop diversification suggestions for a region and soil type.
pub fn diversification_prompt(region: &str, soil_type: &str, preferences: &str) -> String {
    let preferences = if preferences.is_empty() {
        "None specified"
    } else {
        preferences
    };

    format!(
        "As an agricultural expert for Indian farmers, provide crop diversification recommendations:\n\n\
         Region: {region}\n\
         Soil Type: {soil_type}\n\
         Preferences: {preferences}\n\n\
         Provide:\n\
         1. 3-5 suitable crops for diversification with reasons\n\
         2. Seasonal planting schedule\n\
         3. Market potential and profitability\n\
         4. Risk factors and mitigation\n\
         5. Resource requirements (water, labor, capital)\n\
         6. Intercropping suggestions if applicable\n\n\
         Respond in simple Hindi/English mixed language for small-scale farmers."
    )
}

/// Prompt for crop-specific advice under the current weather conditions.
///
/// Embeds every snapshot field so the model sees the same numbers the farmer
/// does.
pub fn weather_advice_prompt(crop: &str, snapshot: &WeatherSnapshot) -> String {
    let rainfall = snapshot.rainfall_1h.unwrap_or(0.0);

    format!(
        "As an agricultural expert for Indian farmers, provide specific weather-based recommendations for {crop} crop.\n\n\
         Current Weather Conditions:\n\
         - Temperature: {temp}°C (Range: {temp_min}°C to {temp_max}°C)\n\
         - Humidity: {humidity}%\n\
         - Atmospheric Pressure: {pressure} hPa\n\
         - Weather Description: {description}\n\
         - Wind Speed: {wind} m/s\n\
         - Recent Rainfall: {rainfall} mm (if applicable)\n\n\
         Provide SPECIFIC recommendations for {crop}:\n\
         1. Is current temperature suitable for this crop? If not, what actions to take?\n\
         2. How does current humidity affect this crop? Any disease risks?\n\
         3. Irrigation recommendations based on weather conditions\n\
         4. Any protective measures needed (frost protection, shade, windbreaks, etc.)\n\
         5. Optimal timing for planting/harvesting based on current weather\n\
         6. Disease prevention tips specific to this weather and crop combination\n\
         7. Any immediate actions farmer should take TODAY\n\n\
         Be specific to {crop} crop. Don't give generic advice.\n\
         Respond in simple Hindi/English mixed language suitable for small-scale Indian farmers.\n\
         Format as clear, actionable bullet points.",
        temp = snapshot.temperature,
        temp_min = snapshot.temp_min,
        temp_max = snapshot.temp_max,
        humidity = snapshot.humidity,
        pressure = snapshot.pressure,
        description = snapshot.description,
        wind = snapshot.wind_speed,
    )
}

/// Prompt for the open-ended Ask Expert chat.
pub fn expert_prompt(question: &str) -> String {
    format!(
        "You are a helpful agricultural assistant for Indian farmers.\n\
         Provide clear, practical advice in simple Hindi/English mixed language.\n\
         Focus on small-scale farming practices, affordable solutions, and local Indian context.\n\
         Be empathetic and supportive.\n\n\
         Farmer's Question: {question}\n\n\
         Provide a helpful answer:"
    )
}
