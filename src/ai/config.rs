use std::env;

/// Gemini credentials and model selection, read once at startup.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Endpoint base override so tests can point at a mock server.
    pub base_url: Option<String>,
}

impl GeminiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GEMINI_API_KEY").ok()?;
        if api_key.is_empty() {
            return None;
        }
        Some(Self {
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            base_url: env::var("GEMINI_API_URL").ok(),
        })
    }
}
