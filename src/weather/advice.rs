use tracing::{instrument, warn};

use super::service::WeatherSnapshot;
use crate::ai::{self, AiError, GeminiConfig};
use crate::text_utils::title_case;

pub const WEATHER_DATA_UNAVAILABLE: &str = "Weather data not available";

/// Crop recommendations for the given conditions.
///
/// With a crop selected the advice is AI-generated; when that call fails the
/// error text is kept and the rule-based fallback is appended after a blank
/// line. With no crop selected the AI is never contacted.
#[instrument(level = "trace", skip(ai, snapshot))]
pub async fn get_recommendations(
    ai: Option<&GeminiConfig>,
    crop: &str,
    snapshot: Option<&WeatherSnapshot>,
) -> String {
    let Some(snapshot) = snapshot else {
        return WEATHER_DATA_UNAVAILABLE.to_string();
    };

    if crop.is_empty() {
        return generic_recommendations(snapshot);
    }

    let attempt = match ai {
        Some(config) => ai::text::crop_weather_advice(config, crop, snapshot).await,
        None => Err(AiError::MissingApiKey),
    };

    match attempt {
        Ok(advice) => advice,
        Err(err) => {
            warn!(error = %err, crop, "AI advice failed, falling back to generic rules");
            format!(
                "Error getting AI recommendations: {err}\n\n{}",
                generic_recommendations(snapshot)
            )
        }
    }
}

/// Rule-based recommendations derived from temperature, humidity and rainfall.
pub fn generic_recommendations(snapshot: &WeatherSnapshot) -> String {
    let temp = snapshot.temperature;
    let humidity = snapshot.humidity;
    let rainfall = snapshot.rainfall_1h.unwrap_or(0.0);

    let mut lines: Vec<&str> = Vec::new();

    if temp < 15.0 {
        lines.push(
            "⚠️ Low temperature detected. Protect crops from frost. Consider covering sensitive crops.",
        );
    } else if temp > 35.0 {
        lines.push(
            "🔥 High temperature. Ensure adequate irrigation. Mulching can help retain moisture.",
        );
    } else {
        lines.push("✅ Temperature is suitable for most crops.");
    }

    if humidity > 80.0 {
        lines.push("💧 High humidity. Watch for fungal diseases. Ensure proper ventilation.");
    } else if humidity < 40.0 {
        lines.push("🌵 Low humidity. Increase irrigation frequency if needed.");
    }

    if rainfall > 5.0 {
        lines.push("🌧️ Recent rainfall. Ensure proper drainage to prevent waterlogging.");
    }

    lines.push("\n💡 Tip: Select a specific crop to get personalized recommendations!");

    lines.join("\n")
}

/// Renders a snapshot as the HTML block shown above the recommendations.
pub fn format_snapshot(snapshot: &WeatherSnapshot) -> String {
    format!(
        "<b>Current Weather:</b>\n\
         - Temperature: {temp}°C (Feels like: {feels}°C)\n\
         - Humidity: {humidity}%\n\
         - Pressure: {pressure} hPa\n\
         - Weather: {description}\n\
         - Wind Speed: {wind} m/s\n\
         \n\
         <b>Temperature Range:</b>\n\
         - Min: {min}°C\n\
         - Max: {max}°C",
        temp = snapshot.temperature,
        feels = snapshot.feels_like,
        humidity = snapshot.humidity,
        pressure = snapshot.pressure,
        description = title_case(&snapshot.description),
        wind = snapshot.wind_speed,
        min = snapshot.temp_min,
        max = snapshot.temp_max,
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn snapshot(temp: f64, humidity: f64, rainfall: Option<f64>) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: temp,
            feels_like: temp,
            temp_min: temp - 2.0,
            temp_max: temp + 2.0,
            humidity,
            pressure: 1010.0,
            wind_speed: 2.5,
            description: "clear sky".to_string(),
            rainfall_1h: rainfall,
        }
    }

    const FROST: &str =
        "⚠️ Low temperature detected. Protect crops from frost. Consider covering sensitive crops.";
    const HEAT: &str =
        "🔥 High temperature. Ensure adequate irrigation. Mulching can help retain moisture.";
    const SUITABLE: &str = "✅ Temperature is suitable for most crops.";
    const FUNGAL: &str =
        "💧 High humidity. Watch for fungal diseases. Ensure proper ventilation.";
    const DRY: &str = "🌵 Low humidity. Increase irrigation frequency if needed.";
    const DRAINAGE: &str =
        "🌧️ Recent rainfall. Ensure proper drainage to prevent waterlogging.";
    const TIP: &str = "💡 Tip: Select a specific crop to get personalized recommendations!";

    #[test]
    fn cold_weather_warns_about_frost() {
        let out = generic_recommendations(&snapshot(10.0, 60.0, None));
        assert!(out.contains(FROST));
        assert!(!out.contains(SUITABLE));
    }

    #[test]
    fn hot_weather_warns_about_heat() {
        let out = generic_recommendations(&snapshot(38.0, 60.0, None));
        assert!(out.contains(HEAT));
    }

    #[test]
    fn mild_weather_is_suitable() {
        let out = generic_recommendations(&snapshot(24.0, 60.0, None));
        assert!(out.contains(SUITABLE));
    }

    #[test]
    fn threshold_temperatures_count_as_suitable() {
        assert!(generic_recommendations(&snapshot(15.0, 60.0, None)).contains(SUITABLE));
        assert!(generic_recommendations(&snapshot(35.0, 60.0, None)).contains(SUITABLE));
    }

    #[test]
    fn moderate_humidity_adds_no_humidity_line() {
        let out = generic_recommendations(&snapshot(24.0, 60.0, None));
        assert!(!out.contains(FUNGAL));
        assert!(!out.contains(DRY));
    }

    #[test]
    fn humidity_bounds_are_exclusive() {
        let at_upper = generic_recommendations(&snapshot(24.0, 80.0, None));
        assert!(!at_upper.contains(FUNGAL));
        let at_lower = generic_recommendations(&snapshot(24.0, 40.0, None));
        assert!(!at_lower.contains(DRY));
    }

    #[test]
    fn light_rain_adds_no_drainage_line() {
        let out = generic_recommendations(&snapshot(24.0, 60.0, Some(5.0)));
        assert!(!out.contains(DRAINAGE));
    }

    #[test]
    fn missing_rainfall_counts_as_zero() {
        let with_none = generic_recommendations(&snapshot(24.0, 60.0, None));
        let with_zero = generic_recommendations(&snapshot(24.0, 60.0, Some(0.0)));
        assert_eq!(with_none, with_zero);
    }

    #[test]
    fn all_warnings_keep_their_order() {
        let out = generic_recommendations(&snapshot(10.0, 90.0, Some(8.0)));
        let expected = format!("{FROST}\n{FUNGAL}\n{DRAINAGE}\n\n{TIP}");
        assert_eq!(out, expected);
    }

    #[test]
    fn tip_is_separated_by_a_blank_line() {
        let out = generic_recommendations(&snapshot(24.0, 60.0, None));
        assert_eq!(out, format!("{SUITABLE}\n\n{TIP}"));
    }

    proptest! {
        #[test]
        fn exactly_one_temperature_line(
            temp in -30.0f64..60.0,
            humidity in 0.0f64..100.0,
            rainfall in proptest::option::of(0.0f64..50.0),
        ) {
            let out = generic_recommendations(&snapshot(temp, humidity, rainfall));
            let count = [FROST, HEAT, SUITABLE]
                .iter()
                .filter(|line| out.contains(**line))
                .count();
            prop_assert_eq!(count, 1);
        }

        #[test]
        fn tip_always_closes_the_advice(
            temp in -30.0f64..60.0,
            humidity in 0.0f64..100.0,
            rainfall in proptest::option::of(0.0f64..50.0),
        ) {
            let out = generic_recommendations(&snapshot(temp, humidity, rainfall));
            prop_assert!(out.ends_with(TIP));
        }

        #[test]
        fn at_most_one_humidity_line(humidity in 0.0f64..100.0) {
            let out = generic_recommendations(&snapshot(24.0, humidity, None));
            prop_assert!(!(out.contains(FUNGAL) && out.contains(DRY)));
        }
    }

    #[tokio::test]
    async fn missing_snapshot_short_circuits() {
        let out = get_recommendations(None, "Rice", None).await;
        assert_eq!(out, WEATHER_DATA_UNAVAILABLE);
    }

    #[tokio::test]
    async fn empty_crop_skips_the_ai() {
        let snap = snapshot(24.0, 60.0, None);
        let out = get_recommendations(None, "", Some(&snap)).await;
        assert_eq!(out, generic_recommendations(&snap));
    }

    #[tokio::test]
    async fn unconfigured_ai_falls_back_with_error_prefix() {
        let snap = snapshot(10.0, 90.0, Some(8.0));
        let out = get_recommendations(None, "Wheat", Some(&snap)).await;
        let expected = format!(
            "Error getting AI recommendations: {}\n\n{}",
            AiError::MissingApiKey,
            generic_recommendations(&snap)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn snapshot_renders_as_html_block() {
        let snap = WeatherSnapshot {
            temperature: 27.4,
            feels_like: 29.1,
            temp_min: 25.2,
            temp_max: 30.6,
            humidity: 83.0,
            pressure: 1006.0,
            wind_speed: 3.6,
            description: "scattered clouds".to_string(),
            rainfall_1h: Some(0.8),
        };

        let block = format_snapshot(&snap);
        assert_eq!(
            block,
            "<b>Current Weather:</b>\n\
             - Temperature: 27.4°C (Feels like: 29.1°C)\n\
             - Humidity: 83%\n\
             - Pressure: 1006 hPa\n\
             - Weather: Scattered Clouds\n\
             - Wind Speed: 3.6 m/s\n\
             \n\
             <b>Temperature Range:</b>\n\
             - Min: 25.2°C\n\
             - Max: 30.6°C"
        );
    }
}
