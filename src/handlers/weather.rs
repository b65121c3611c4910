use anyhow::Result;
use teloxide::{prelude::*, types::ParseMode};
use tracing::warn;

use crate::config::Config;
use crate::messages::{
    weather_fetch_error_text, WEATHER_CITY_PROMPT, WEATHER_CROP_PROMPT, WEATHER_DISABLED,
    WEATHER_GENERAL_LABEL,
};
use crate::session::{Flow, Sessions};
use crate::weather;

use super::keyboard::{crop_keyboard, WEATHER_CROP_PREFIX};

/// `/weather` asks for the location first.
pub async fn start_weather(
    bot: Bot,
    msg: Message,
    config: Config,
    sessions: Sessions,
) -> Result<()> {
    if config.weather.is_none() {
        bot.send_message(msg.chat.id, WEATHER_DISABLED).await?;
        return Ok(());
    }

    sessions.set(msg.chat.id, Flow::WeatherCity);
    bot.send_message(msg.chat.id, WEATHER_CITY_PROMPT).await?;
    Ok(())
}

/// Splits a "City, State" message. Everything after the first comma is the
/// state; a missing comma means city only.
pub fn parse_location(text: &str) -> (String, String) {
    match text.split_once(',') {
        Some((city, state)) => (city.trim().to_string(), state.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

/// Fetches the weather for the city the user sent, shows it and offers the
/// crop keyboard. On a failed lookup the flow stays armed so the user can
/// retry with a corrected name.
pub async fn handle_city_message(
    bot: Bot,
    msg: &Message,
    text: &str,
    config: &Config,
    sessions: &Sessions,
) -> Result<()> {
    let Some(weather_config) = config.weather.as_ref() else {
        sessions.clear(msg.chat.id);
        bot.send_message(msg.chat.id, WEATHER_DISABLED).await?;
        return Ok(());
    };

    let (city, state) = parse_location(text);
    let snapshot = match weather::fetch_current(weather_config, &city, &state).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(error = %err, city, "weather lookup failed");
            bot.send_message(msg.chat.id, weather_fetch_error_text(&err))
                .await?;
            return Ok(());
        }
    };

    bot.send_message(msg.chat.id, weather::format_snapshot(&snapshot))
        .parse_mode(ParseMode::Html)
        .await?;

    sessions.set(msg.chat.id, Flow::WeatherCrop { snapshot });
    bot.send_message(msg.chat.id, WEATHER_CROP_PROMPT)
        .reply_markup(crop_keyboard(WEATHER_CROP_PREFIX, WEATHER_GENERAL_LABEL))
        .await?;
    Ok(())
}

/// Replies with recommendations for the tapped crop.
///
/// A tap on a keyboard from an expired conversation finds no snapshot and
/// gets the "Weather data not available" reply.
pub async fn handle_crop_choice(
    bot: &Bot,
    chat_id: ChatId,
    crop: &str,
    config: &Config,
    sessions: &Sessions,
) -> Result<()> {
    let flow = sessions.get(chat_id);
    let snapshot = match &flow {
        Some(Flow::WeatherCrop { snapshot }) => Some(snapshot),
        _ => None,
    };

    let advice = weather::get_recommendations(config.ai.as_ref(), crop, snapshot).await;
    bot.send_message(chat_id, advice).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_location;

    #[test]
    fn splits_city_and_state_on_first_comma() {
        assert_eq!(
            parse_location("Nashik, Maharashtra"),
            ("Nashik".to_string(), "Maharashtra".to_string())
        );
    }

    #[test]
    fn city_alone_leaves_state_empty() {
        assert_eq!(parse_location("  Pune "), ("Pune".to_string(), String::new()));
    }

    #[test]
    fn extra_commas_stay_in_the_state_part() {
        assert_eq!(
            parse_location("Mysore, Karnataka, South"),
            ("Mysore".to_string(), "Karnataka, South".to_string())
        );
    }
}
