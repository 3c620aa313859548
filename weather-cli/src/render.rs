//! Report rendering: a pure transform of a reading into terminal lines.

use weather_core::{Severity, WeatherReading, advisories, condition_visuals, temperature_feel};

use crate::style::Style;

const SEPARATOR: &str = "------------------------------------";

/// Render the full report as lines ready to print.
///
/// The advisory lines appear regardless of `show_details`.
pub fn render_report(
    reading: &WeatherReading,
    show_details: bool,
    style: &dyn Style,
) -> Vec<String> {
    let visuals = condition_visuals(reading.condition_code, &reading.icon_code);

    let mut lines = vec![
        format!(
            "{}, {}",
            style.emphasize(&reading.city),
            style.chill(&reading.country)
        ),
        SEPARATOR.to_string(),
        format!(
            "{}  {} ({})",
            visuals.icon,
            style.good(visuals.label),
            reading.description
        ),
        format!(
            "🌡️  Temperature: {} ({})",
            style.emphasize(&format!("{:.1}°C", reading.temperature_c)),
            styled_feel(reading.temperature_c, style)
        ),
    ];

    if show_details {
        lines.push(format!(
            "🤔 Feels like: {}",
            style.info(&format!("{:.1}°C", reading.feels_like_c))
        ));
        lines.push(format!(
            "💧 Humidity: {}",
            style.info(&format!("{}%", reading.humidity_pct))
        ));
        lines.push(format!(
            "🌬️  Wind: {}",
            style.info(&format!("{:.1} m/s", reading.wind_speed_mps))
        ));
    }

    for advisory in advisories(reading) {
        let styled = match advisory.severity {
            Severity::Wind | Severity::Breeze => style.info(&advisory.text),
            Severity::Heat => style.alert(&advisory.text),
            Severity::Chill => style.chill(&advisory.text),
        };
        lines.push(styled);
    }

    lines
}

/// Tint the qualitative feel to match its band.
fn styled_feel(temp_celsius: f64, style: &dyn Style) -> String {
    let feel = temperature_feel(temp_celsius);

    if temp_celsius > 28.0 {
        style.alert(feel)
    } else if temp_celsius > 20.0 {
        style.warn(feel)
    } else if temp_celsius > 0.0 {
        style.info(feel)
    } else {
        style.chill(feel)
    }
}
