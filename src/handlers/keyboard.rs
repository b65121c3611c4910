use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::crops;

/// Callback data prefixes; the part after the prefix is the chosen value.
pub const DISEASE_CROP_PREFIX: &str = "dcrop:";
pub const WEATHER_CROP_PREFIX: &str = "wcrop:";
pub const STATE_PREFIX: &str = "state:";
pub const SOIL_PREFIX: &str = "soil:";

/// Lays options out as rows of `per_row` buttons whose callback data is the
/// option behind `prefix`.
pub fn choice_rows(
    options: &[&str],
    per_row: usize,
    prefix: &str,
) -> Vec<Vec<InlineKeyboardButton>> {
    options
        .chunks(per_row)
        .map(|chunk| {
            chunk
                .iter()
                .map(|option| InlineKeyboardButton::callback(*option, format!("{prefix}{option}")))
                .collect()
        })
        .collect()
}

/// Full crop grid plus a trailing row whose callback data is the bare prefix,
/// meaning "no specific crop".
pub fn crop_keyboard(prefix: &str, skip_label: &str) -> InlineKeyboardMarkup {
    let mut rows = choice_rows(&crops::all_crops(), 3, prefix);
    rows.push(vec![InlineKeyboardButton::callback(
        skip_label,
        prefix.to_string(),
    )]);
    InlineKeyboardMarkup::new(rows)
}

pub fn state_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(choice_rows(crops::INDIAN_STATES, 2, STATE_PREFIX))
}

pub fn soil_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(choice_rows(crops::SOIL_TYPES, 2, SOIL_PREFIX))
}
