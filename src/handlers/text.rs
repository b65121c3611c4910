use anyhow::Result;
use teloxide::prelude::*;

use crate::config::Config;
use crate::messages::{CANCELLED, DISEASE_AWAITING_PHOTO, HELP_TEXT, NOTHING_TO_CANCEL};
use crate::session::{Flow, Sessions};

use super::{diversify, expert, soil, weather};

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(teloxide::types::ParseMode::Html)
        .await?;
    Ok(())
}

pub async fn cancel(bot: Bot, msg: Message, sessions: Sessions) -> Result<()> {
    let reply = if sessions.clear(msg.chat.id) {
        CANCELLED
    } else {
        NOTHING_TO_CANCEL
    };
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// Routes a plain message by the chat's active flow. With no flow, or with
/// only a crop keyboard pending, the text is treated as a question.
pub async fn handle_text(bot: Bot, msg: Message, config: Config, sessions: Sessions) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match sessions.get(msg.chat.id) {
        Some(Flow::WeatherCity) => {
            weather::handle_city_message(bot, &msg, text, &config, &sessions).await
        }
        Some(Flow::Diversify(draft)) => {
            diversify::handle_text_step(bot, &msg, text, draft, &config, &sessions).await
        }
        Some(Flow::Soil) => soil::analyze_description(bot, &msg, text, &config, &sessions).await,
        Some(Flow::DiseasePhoto { .. }) => {
            bot.send_message(msg.chat.id, DISEASE_AWAITING_PHOTO).await?;
            Ok(())
        }
        Some(Flow::WeatherCrop { .. }) | None => {
            expert::answer_text(bot, &msg, text, &config).await
        }
    }
}
