use anyhow::Result;
use teloxide::prelude::*;

use crate::config::Config;
use crate::session::Sessions;

use super::keyboard::{DISEASE_CROP_PREFIX, SOIL_PREFIX, STATE_PREFIX, WEATHER_CROP_PREFIX};
use super::{disease, diversify, weather};

/// Dispatches inline keyboard taps by their callback data prefix.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    config: Config,
    sessions: Sessions,
) -> Result<()> {
    if let (Some(data), Some(msg)) = (q.data.as_deref(), q.message.as_ref()) {
        let chat_id = msg.chat().id;

        if let Some(crop) = data.strip_prefix(DISEASE_CROP_PREFIX) {
            disease::handle_crop_choice(&bot, chat_id, crop, &sessions).await?;
        } else if let Some(crop) = data.strip_prefix(WEATHER_CROP_PREFIX) {
            weather::handle_crop_choice(&bot, chat_id, crop, &config, &sessions).await?;
        } else if let Some(state) = data.strip_prefix(STATE_PREFIX) {
            diversify::handle_state_choice(&bot, chat_id, state, &sessions).await?;
        } else if let Some(soil_type) = data.strip_prefix(SOIL_PREFIX) {
            diversify::handle_soil_choice(&bot, chat_id, soil_type, &sessions).await?;
        }
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}
