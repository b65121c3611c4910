use anyhow::Result;
use teloxide::{prelude::*, types::ParseMode, utils::html};

use crate::market;
use crate::messages::MARKET_USAGE;

/// `/market <crop>` sends the insight block; without an argument it shows the
/// whole table plus a usage hint.
pub async fn market_overview(bot: Bot, msg: Message, crop: String) -> Result<()> {
    let crop = crop.trim();
    let text = if crop.is_empty() {
        format!("{}\n\n{MARKET_USAGE}", market::format_price_table())
    } else {
        // The crop name is echoed back inside an HTML message.
        market::market_insights(&html::escape(crop))
    };

    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// `/prices` sends the full price table.
pub async fn price_table(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, market::format_price_table())
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
