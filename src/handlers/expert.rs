use anyhow::Result;
use teloxide::prelude::*;
use tracing::warn;

use crate::ai;
use crate::config::Config;
use crate::messages::{ask_error_text, AI_DISABLED, ASK_PROMPT};
use crate::session::Sessions;

/// `/ask` clears any running flow; plain messages already reach the expert.
pub async fn start_ask(bot: Bot, msg: Message, config: Config, sessions: Sessions) -> Result<()> {
    if config.ai.is_none() {
        bot.send_message(msg.chat.id, AI_DISABLED).await?;
        return Ok(());
    }

    sessions.clear(msg.chat.id);
    bot.send_message(msg.chat.id, ASK_PROMPT).await?;
    Ok(())
}

/// Answers a free-form farming question.
pub async fn answer_text(bot: Bot, msg: &Message, question: &str, config: &Config) -> Result<()> {
    let Some(ai_config) = config.ai.as_ref() else {
        bot.send_message(msg.chat.id, AI_DISABLED).await?;
        return Ok(());
    };

    tracing::debug!(chat_id = msg.chat.id.0, "answering farmer question");
    let reply = match ai::text::answer_question(ai_config, question).await {
        Ok(answer) => answer,
        Err(err) => {
            warn!(error = %err, "question answering failed");
            ask_error_text(err)
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
