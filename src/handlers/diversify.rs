use anyhow::Result;
use teloxide::prelude::*;
use tracing::warn;

use crate::ai;
use crate::config::Config;
use crate::messages::{
    diversify_error_text, AI_DISABLED, DIVERSIFY_DISTRICT_PROMPT, DIVERSIFY_PICK_SOIL_HINT,
    DIVERSIFY_PICK_STATE_HINT, DIVERSIFY_PREFS_PROMPT, DIVERSIFY_SOIL_PROMPT,
    DIVERSIFY_STATE_PROMPT,
};
use crate::session::{DiversifyDraft, Flow, Sessions};

use super::keyboard::{soil_keyboard, state_keyboard};

/// `/diversify` walks the user through state, district, soil type and
/// preferences, then asks the AI for a plan.
pub async fn start_diversify(
    bot: Bot,
    msg: Message,
    config: Config,
    sessions: Sessions,
) -> Result<()> {
    if config.ai.is_none() {
        bot.send_message(msg.chat.id, AI_DISABLED).await?;
        return Ok(());
    }

    sessions.set(msg.chat.id, Flow::Diversify(DiversifyDraft::default()));
    bot.send_message(msg.chat.id, DIVERSIFY_STATE_PROMPT)
        .reply_markup(state_keyboard())
        .await?;
    Ok(())
}

pub async fn handle_state_choice(
    bot: &Bot,
    chat_id: ChatId,
    state: &str,
    sessions: &Sessions,
) -> Result<()> {
    let Some(Flow::Diversify(mut draft)) = sessions.get(chat_id) else {
        return Ok(());
    };

    draft.state = Some(state.to_string());
    sessions.set(chat_id, Flow::Diversify(draft));
    bot.send_message(chat_id, DIVERSIFY_DISTRICT_PROMPT).await?;
    Ok(())
}

pub async fn handle_soil_choice(
    bot: &Bot,
    chat_id: ChatId,
    soil_type: &str,
    sessions: &Sessions,
) -> Result<()> {
    let Some(Flow::Diversify(mut draft)) = sessions.get(chat_id) else {
        return Ok(());
    };
    // The soil keyboard only appears after the district step; ignore stale taps.
    if draft.state.is_none() || draft.district.is_none() {
        return Ok(());
    }

    draft.soil_type = Some(soil_type.to_string());
    sessions.set(chat_id, Flow::Diversify(draft));
    bot.send_message(chat_id, DIVERSIFY_PREFS_PROMPT).await?;
    Ok(())
}

/// Advances the draft with a text reply; district and preferences are typed,
/// the other steps come from keyboards.
pub async fn handle_text_step(
    bot: Bot,
    msg: &Message,
    text: &str,
    draft: DiversifyDraft,
    config: &Config,
    sessions: &Sessions,
) -> Result<()> {
    let chat_id = msg.chat.id;

    match (&draft.state, &draft.district, &draft.soil_type) {
        (None, _, _) => {
            bot.send_message(chat_id, DIVERSIFY_PICK_STATE_HINT).await?;
        }
        (Some(_), None, _) => {
            let mut draft = draft;
            draft.district = Some(skip_to_empty(text));
            sessions.set(chat_id, Flow::Diversify(draft));
            bot.send_message(chat_id, DIVERSIFY_SOIL_PROMPT)
                .reply_markup(soil_keyboard())
                .await?;
        }
        (Some(_), Some(_), None) => {
            bot.send_message(chat_id, DIVERSIFY_PICK_SOIL_HINT).await?;
        }
        (Some(state), Some(district), Some(soil_type)) => {
            let Some(ai_config) = config.ai.as_ref() else {
                sessions.clear(chat_id);
                bot.send_message(chat_id, AI_DISABLED).await?;
                return Ok(());
            };

            let region = region_label(state, district);
            let preferences = skip_to_empty(text);
            let reply =
                match ai::text::diversification_plan(ai_config, &region, soil_type, &preferences)
                    .await
                {
                    Ok(plan) => plan,
                    Err(err) => {
                        warn!(error = %err, region, "diversification planning failed");
                        diversify_error_text(err)
                    }
                };

            sessions.clear(chat_id);
            bot.send_message(chat_id, reply).await?;
        }
    }
    Ok(())
}

/// A lone "-" is the skip marker and maps to an empty value.
fn skip_to_empty(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed == "-" {
        String::new()
    } else {
        trimmed.to_string()
    }
}

fn region_label(state: &str, district: &str) -> String {
    if district.is_empty() {
        state.to_string()
    } else {
        format!("{district}, {state}")
    }
}
