use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::config::Config;
use crate::handlers::{
    cancel, help, market_overview, price_table, start_ask, start_disease, start_diversify,
    start_soil, start_weather,
};
use crate::session::Sessions;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display this text.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "diagnose a crop disease from a photo.")]
    Disease,
    #[command(description = "assess soil quality from a photo or description.")]
    Soil,
    #[command(description = "weather-based recommendations for your crops.")]
    Weather,
    #[command(description = "crop diversification suggestions for your farm.")]
    Diversify,
    #[command(description = "ask any farming question.")]
    Ask,
    #[command(description = "market price and trend for a crop.")]
    Market(String),
    #[command(description = "show the full market price table.")]
    Prices,
    #[command(description = "cancel the current conversation.")]
    Cancel,
}

impl Command {
    pub async fn dispatch(
        self,
        bot: Bot,
        msg: Message,
        config: Config,
        sessions: Sessions,
    ) -> Result<()> {
        match self {
            Command::Start | Command::Help => help(bot, msg).await?,
            Command::Disease => start_disease(bot, msg, config, sessions).await?,
            Command::Soil => start_soil(bot, msg, config, sessions).await?,
            Command::Weather => start_weather(bot, msg, config, sessions).await?,
            Command::Diversify => start_diversify(bot, msg, config, sessions).await?,
            Command::Ask => start_ask(bot, msg, config, sessions).await?,
            Command::Market(crop) => market_overview(bot, msg, crop).await?,
            Command::Prices => price_table(bot, msg).await?,
            Command::Cancel => cancel(bot, msg, sessions).await?,
        }
        Ok(())
    }
}
