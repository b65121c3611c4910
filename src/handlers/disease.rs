use anyhow::Result;
use teloxide::prelude::*;
use tracing::warn;

use crate::ai;
use crate::config::Config;
use crate::messages::{
    disease_error_text, disease_photo_prompt, AI_DISABLED, DISEASE_CROP_PROMPT, DISEASE_SKIP_LABEL,
};
use crate::session::{Flow, Sessions};

use super::keyboard::{crop_keyboard, DISEASE_CROP_PREFIX};
use super::photo::photo_bytes;

/// `/disease` opens the crop keyboard and arms the photo flow.
pub async fn start_disease(
    bot: Bot,
    msg: Message,
    config: Config,
    sessions: Sessions,
) -> Result<()> {
    if config.ai.is_none() {
        bot.send_message(msg.chat.id, AI_DISABLED).await?;
        return Ok(());
    }

    sessions.set(msg.chat.id, Flow::DiseasePhoto { crop: None });
    bot.send_message(msg.chat.id, DISEASE_CROP_PROMPT)
        .reply_markup(crop_keyboard(DISEASE_CROP_PREFIX, DISEASE_SKIP_LABEL))
        .await?;
    Ok(())
}

/// Records the crop tapped on the keyboard and asks for the photo.
///
/// An empty value comes from the skip button and leaves the crop unknown.
pub async fn handle_crop_choice(
    bot: &Bot,
    chat_id: ChatId,
    crop: &str,
    sessions: &Sessions,
) -> Result<()> {
    let crop = (!crop.is_empty()).then(|| crop.to_string());
    let prompt = disease_photo_prompt(crop.as_deref());
    sessions.set(chat_id, Flow::DiseasePhoto { crop });
    bot.send_message(chat_id, prompt).await?;
    Ok(())
}

/// Downloads the photo, runs the vision analysis and replies with the result.
pub async fn analyze_photo(
    bot: Bot,
    msg: &Message,
    config: &Config,
    crop: Option<&str>,
    sessions: &Sessions,
) -> Result<()> {
    let Some(ai_config) = config.ai.as_ref() else {
        bot.send_message(msg.chat.id, AI_DISABLED).await?;
        return Ok(());
    };
    let Some(bytes) = photo_bytes(&bot, msg).await? else {
        return Ok(());
    };

    let reply = match ai::vision::analyze_crop_disease(ai_config, &bytes, crop.unwrap_or("")).await
    {
        Ok(analysis) => {
            sessions.clear(msg.chat.id);
            analysis
        }
        Err(err) => {
            warn!(error = %err, crop, "disease analysis failed");
            disease_error_text(err)
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
