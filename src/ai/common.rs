use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

use crate::ai::config::GeminiConfig;

/// Failures from the Gemini completion provider.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("Gemini API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Gemini request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid Gemini response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn candidate_text(raw: &str) -> Result<String, AiError> {
    let parsed: GenerateResponse = serde_json::from_str(raw)?;
    let text = parsed
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .map(|parts| {
            parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(text)
}

/// Send a `generateContent` request with the given parts and return the text
/// of the first candidate.
///
/// Parts follow the Gemini wire shape: `{"text": …}` entries plus
/// `{"inline_data": …}` entries built by [`crate::ai::text`] and
/// [`crate::ai::vision`].
#[instrument(level = "trace", skip(config, parts))]
pub async fn generate(
    config: &GeminiConfig,
    parts: Vec<serde_json::Value>,
) -> Result<String, AiError> {
    let base = config.base_url.as_deref().unwrap_or(GEMINI_API_BASE);
    let url = format!("{base}/models/{}:generateContent", config.model);
    let body = serde_json::json!({ "contents": [ { "parts": parts } ] });

    debug!(model = %config.model, "sending generateContent request");

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .query(&[("key", config.api_key.as_str())])
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        warn!(status, "Gemini API error");
        return Err(AiError::Api { status, message });
    }

    let raw = resp.text().await?;
    trace!(raw = %raw, "generateContent response");

    candidate_text(&raw)
}
