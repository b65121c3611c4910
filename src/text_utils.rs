pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes every word, turning "scattered clouds" into "Scattered Clouds".
///
/// OpenWeatherMap reports conditions in lowercase; titles read better in
/// chat messages.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
