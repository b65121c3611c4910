//! Fixed texts the bot sends.
//!
//! Everything user-facing lives here, apart from the recommendation strings
//! whose wording is part of the advice module's contract.

use std::fmt::Display;

pub const HELP_TEXT: &str =
    "🌾 Namaste! I am Krishi Mitra, your farming assistant.\n\n\
     <b>Commands:</b>\n\
     /disease - Diagnose a crop disease from a photo.\n\
     /soil - Assess soil quality from a photo or a description.\n\
     /weather - Weather-based recommendations for your crops.\n\
     /diversify - Crop diversification suggestions for your farm.\n\
     /ask - Ask any farming question.\n\
     /market - Market price and trend for a crop, e.g. /market wheat.\n\
     /prices - Show the full market price table.\n\
     /cancel - Stop the current conversation.\n\n\
     You can also just send me a farming question as a plain message.";

pub const AI_DISABLED: &str = "AI features are disabled. Set GEMINI_API_KEY to enable them.";
pub const WEATHER_DISABLED: &str =
    "Weather lookups are disabled. Set OPENWEATHER_API_KEY to enable them.";

pub const DISEASE_CROP_PROMPT: &str = "Which crop is affected? Pick one, or skip if unsure.";
pub const DISEASE_SKIP_LABEL: &str = "🤷 Not sure / skip";
pub const DISEASE_AWAITING_PHOTO: &str =
    "I am waiting for a photo of the plant. Send one, or /cancel to do something else.";

pub fn disease_photo_prompt(crop: Option<&str>) -> String {
    match crop {
        Some(crop) => format!("📷 Now send a clear photo of the affected {crop} plant."),
        None => "📷 Now send a clear photo of the affected plant.".to_string(),
    }
}

pub const SOIL_PROMPT: &str = "Send a photo of your soil, or describe it in a message \
     (colour, texture, how it behaves when wet).";

pub const WEATHER_CITY_PROMPT: &str = "Which city is your farm near? Send it as City, State.\n\
     For example: Nashik, Maharashtra";
pub const WEATHER_CROP_PROMPT: &str = "Select a crop for personalized recommendations:";
pub const WEATHER_GENERAL_LABEL: &str = "🌾 General advice";

pub const DIVERSIFY_STATE_PROMPT: &str = "Which state is your farm in?";
pub const DIVERSIFY_DISTRICT_PROMPT: &str = "Which district? Send - to skip.";
pub const DIVERSIFY_SOIL_PROMPT: &str = "What is your soil type?";
pub const DIVERSIFY_PREFS_PROMPT: &str =
    "Any preferences, like water availability or budget? Send - to skip.";
pub const DIVERSIFY_PICK_STATE_HINT: &str = "Please pick a state from the buttons above.";
pub const DIVERSIFY_PICK_SOIL_HINT: &str = "Please pick a soil type from the buttons above.";

pub const ASK_PROMPT: &str = "Ask me anything about farming and I will do my best to help.";

pub const PHOTO_HINT: &str = "I can analyze photos for crop disease (/disease) or \
     soil quality (/soil). Start one of those first.";

pub const CANCELLED: &str = "Okay, stopped. Send /help to see what I can do.";
pub const NOTHING_TO_CANCEL: &str = "Nothing to cancel.";

pub const MARKET_USAGE: &str = "Send /market followed by a crop name, like /market wheat.";

pub fn disease_error_text(err: impl Display) -> String {
    format!("Error analyzing image: {err}")
}

pub fn soil_error_text(err: impl Display) -> String {
    format!("Error analyzing soil: {err}")
}

pub fn diversify_error_text(err: impl Display) -> String {
    format!("Error getting recommendations: {err}")
}

pub fn ask_error_text(err: impl Display) -> String {
    format!("Error: {err}")
}

pub fn weather_fetch_error_text(err: impl Display) -> String {
    format!("Could not fetch weather: {err}\nTry again with City, State.")
}
