use std::sync::Arc;

use dashmap::DashMap;
use teloxide::types::ChatId;

use crate::weather::WeatherSnapshot;

/// Multi-step conversation state for one chat.
///
/// A chat has at most one active flow; starting a new feature replaces the
/// previous one.
#[derive(Debug, Clone)]
pub enum Flow {
    /// Waiting for a photo of the affected plant.
    DiseasePhoto { crop: Option<String> },
    /// Waiting for a soil photo or a text description.
    Soil,
    /// Waiting for a "City, State" message.
    WeatherCity,
    /// Weather was fetched; crop taps reuse the stored snapshot.
    WeatherCrop { snapshot: WeatherSnapshot },
    /// Collecting diversification inputs step by step.
    Diversify(DiversifyDraft),
}

/// Inputs gathered so far for a diversification plan.
///
/// Fields fill in order: state, district, soil type. The next unset field
/// tells the handlers which reply they are waiting for.
#[derive(Debug, Clone, Default)]
pub struct DiversifyDraft {
    pub state: Option<String>,
    pub district: Option<String>,
    pub soil_type: Option<String>,
}

/// In-memory per-chat flow store shared across handlers.
#[derive(Clone, Default)]
pub struct Sessions(Arc<DashMap<ChatId, Flow>>);

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, chat: ChatId, flow: Flow) {
        self.0.insert(chat, flow);
    }

    pub fn get(&self, chat: ChatId) -> Option<Flow> {
        self.0.get(&chat).map(|entry| entry.value().clone())
    }

    /// Removes the active flow, reporting whether one existed.
    pub fn clear(&self, chat: ChatId) -> bool {
        self.0.remove(&chat).is_some()
    }
}
