use anyhow::Result;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

pub mod ai;
pub mod commands;
pub mod config;
pub mod crops;
pub mod handlers;
pub mod market;
pub mod messages;
pub mod session;
pub mod text_utils;
pub mod utils;
pub mod weather;

pub use commands::Command;
pub use config::Config;
pub use session::{DiversifyDraft, Flow, Sessions};

/// Update-handling tree shared by the binary and the integration tests.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::callback_handler))
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter(|msg: Message| msg.photo().is_some())
                        .endpoint(handlers::handle_photo),
                )
                .branch(dptree::entry().filter_command::<Command>().endpoint(
                    |bot: Bot,
                     msg: Message,
                     cmd: Command,
                     config: Config,
                     sessions: Sessions| async move {
                        cmd.dispatch(bot, msg, config, sessions).await
                    },
                ))
                .branch(dptree::endpoint(handlers::handle_text)),
        )
}

pub async fn run() -> Result<()> {
    let config = Config::from_env();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Krishi Mitra bot...");
    if config.ai.is_none() {
        tracing::warn!("GEMINI_API_KEY not set, AI features are disabled");
    }
    if config.weather.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set, weather lookups are disabled");
    }

    let bot = Bot::from_env();
    let sessions = Sessions::new();

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![config, sessions])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
