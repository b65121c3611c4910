use base64::Engine as _;
use tracing::instrument;

use crate::ai::common::{generate, AiError};
use crate::ai::config::GeminiConfig;
use crate::ai::prompts;

/// Telegram recompresses photos to JPEG, so every image we forward is JPEG.
const PHOTO_MIME: &str = "image/jpeg";

fn image_part(bytes: &[u8]) -> serde_json::Value {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    serde_json::json!({
        "inline_data": { "mime_type": PHOTO_MIME, "data": encoded }
    })
}

/// Identify diseases or pests on a crop photo and describe treatment.
///
/// `crop` may be empty, in which case the model is asked to identify the
/// crop itself.
#[instrument(level = "trace", skip(config, bytes))]
pub async fn analyze_crop_disease(
    config: &GeminiConfig,
    bytes: &[u8],
    crop: &str,
) -> Result<String, AiError> {
    let parts = vec![
        serde_json::json!({ "text": prompts::disease_prompt(crop) }),
        image_part(bytes),
    ];
    generate(config, parts).await
}

/// Assess soil texture, type and drainage from a photo.
#[instrument(level = "trace", skip(config, bytes))]
pub async fn analyze_soil_image(config: &GeminiConfig, bytes: &[u8]) -> Result<String, AiError> {
    let parts = vec![
        serde_json::json!({ "text": prompts::SOIL_IMAGE_PROMPT }),
        image_part(bytes),
    ];
    generate(config, parts).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_part_is_base64_inline_data() {
        let part = image_part(b"img");
        assert_eq!(part["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(part["inline_data"]["data"], "aW1n");
    }
}
