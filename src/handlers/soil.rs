use anyhow::Result;
use teloxide::prelude::*;
use tracing::warn;

use crate::ai;
use crate::config::Config;
use crate::messages::{soil_error_text, AI_DISABLED, SOIL_PROMPT};
use crate::session::{Flow, Sessions};

use super::photo::photo_bytes;

/// `/soil` arms the flow; the next photo or text message gets analyzed.
pub async fn start_soil(bot: Bot, msg: Message, config: Config, sessions: Sessions) -> Result<()> {
    if config.ai.is_none() {
        bot.send_message(msg.chat.id, AI_DISABLED).await?;
        return Ok(());
    }

    sessions.set(msg.chat.id, Flow::Soil);
    bot.send_message(msg.chat.id, SOIL_PROMPT).await?;
    Ok(())
}

pub async fn analyze_photo(
    bot: Bot,
    msg: &Message,
    config: &Config,
    sessions: &Sessions,
) -> Result<()> {
    let Some(ai_config) = config.ai.as_ref() else {
        bot.send_message(msg.chat.id, AI_DISABLED).await?;
        return Ok(());
    };
    let Some(bytes) = photo_bytes(&bot, msg).await? else {
        return Ok(());
    };

    let reply = match ai::vision::analyze_soil_image(ai_config, &bytes).await {
        Ok(analysis) => {
            sessions.clear(msg.chat.id);
            analysis
        }
        Err(err) => {
            warn!(error = %err, "soil image analysis failed");
            soil_error_text(err)
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

pub async fn analyze_description(
    bot: Bot,
    msg: &Message,
    description: &str,
    config: &Config,
    sessions: &Sessions,
) -> Result<()> {
    let Some(ai_config) = config.ai.as_ref() else {
        bot.send_message(msg.chat.id, AI_DISABLED).await?;
        return Ok(());
    };

    let reply = match ai::text::analyze_soil_description(ai_config, description).await {
        Ok(analysis) => {
            sessions.clear(msg.chat.id);
            analysis
        }
        Err(err) => {
            warn!(error = %err, "soil description analysis failed");
            soil_error_text(err)
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
