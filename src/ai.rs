pub mod common;
pub mod config;
pub mod prompts;
pub mod text;
pub mod vision;

pub use common::AiError;
pub use config::GeminiConfig;
