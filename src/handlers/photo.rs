use anyhow::Result;
use teloxide::prelude::*;

use crate::config::Config;
use crate::messages::PHOTO_HINT;
use crate::session::{Flow, Sessions};
use crate::utils::download_file;

use super::{disease, soil};

/// Routes an incoming photo to whichever analysis flow is armed.
pub async fn handle_photo(
    bot: Bot,
    msg: Message,
    config: Config,
    sessions: Sessions,
) -> Result<()> {
    match sessions.get(msg.chat.id) {
        Some(Flow::DiseasePhoto { crop }) => {
            disease::analyze_photo(bot, &msg, &config, crop.as_deref(), &sessions).await
        }
        Some(Flow::Soil) => soil::analyze_photo(bot, &msg, &config, &sessions).await,
        _ => {
            bot.send_message(msg.chat.id, PHOTO_HINT).await?;
            Ok(())
        }
    }
}

/// Downloads the largest size of the message's photo.
pub async fn photo_bytes(bot: &Bot, msg: &Message) -> Result<Option<Vec<u8>>> {
    let Some(photo_sizes) = msg.photo() else {
        return Ok(None);
    };
    let Some(file_id) = photo_sizes
        .iter()
        .max_by_key(|p| p.file.size)
        .map(|p| &p.file.id)
    else {
        tracing::debug!("photo had no usable sizes");
        return Ok(None);
    };

    let file = bot.get_file(file_id).await?;
    let bytes = download_file(bot, &file.path).await?;
    tracing::trace!(size = bytes.len(), "downloaded photo bytes");
    Ok(Some(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn photo_with_no_sizes_yields_nothing() {
        let bot = Bot::new("test");
        let json = r#"{"message_id":1,"date":0,"chat":{"id":1,"type":"private"},"photo":[]}"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        let res = photo_bytes(&bot, &msg).await.unwrap();
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn message_without_photo_yields_nothing() {
        let bot = Bot::new("test");
        let json = r#"{"message_id":1,"date":0,"chat":{"id":1,"type":"private"},"text":"hi"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        let res = photo_bytes(&bot, &msg).await.unwrap();
        assert!(res.is_none());
    }
}
