//! Wind and regional temperature advisories.
//!
//! The regional rules are plain data rather than inlined conditionals, so
//! the default set below can be replaced without touching control flow.

use crate::model::WeatherReading;

/// Presentation-only severity; it picks the styling of the advisory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Breeze,
    Wind,
    Heat,
    Chill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub severity: Severity,
    pub text: String,
}

/// A regional rule fires when the reading's country matches, or the city
/// name contains one of the hints (case-insensitive).
#[derive(Debug, Clone)]
pub struct RegionalRule {
    pub country: &'static str,
    pub city_hints: &'static [&'static str],
    pub text: &'static str,
}

impl RegionalRule {
    fn matches(&self, reading: &WeatherReading) -> bool {
        if reading.country == self.country {
            return true;
        }
        let city = reading.city.to_lowercase();
        self.city_hints.iter().any(|hint| city.contains(hint))
    }
}

/// Rules applied when the temperature exceeds 30 °C.
pub const HOT_RULES: &[RegionalRule] = &[RegionalRule {
    country: "IN",
    city_hints: &["delhi", "mumbai"],
    text: "It's a hot day, especially for this region!",
}];

/// Rules applied when the temperature is below 10 °C.
pub const COLD_RULES: &[RegionalRule] = &[RegionalRule {
    country: "IN",
    city_hints: &["shimla", "manali"],
    text: "It's cold, typical for hilly regions or winter!",
}];

/// Collect every advisory that applies to a reading, using the default
/// regional rule sets.
pub fn advisories(reading: &WeatherReading) -> Vec<Advisory> {
    advisories_with_rules(reading, HOT_RULES, COLD_RULES)
}

/// Same as [`advisories`], with caller-supplied regional rules.
///
/// The wind advisory is independent of the regional ones; hot and cold
/// rules are mutually exclusive by their thresholds.
pub fn advisories_with_rules(
    reading: &WeatherReading,
    hot_rules: &[RegionalRule],
    cold_rules: &[RegionalRule],
) -> Vec<Advisory> {
    let mut out = Vec::new();

    if reading.wind_speed_mps > 10.0 {
        out.push(Advisory {
            severity: Severity::Wind,
            text: "💨 It's quite windy!".to_string(),
        });
    } else if reading.wind_speed_mps > 5.0 {
        out.push(Advisory {
            severity: Severity::Breeze,
            text: "🍃 Gentle breeze.".to_string(),
        });
    }

    if reading.temperature_c > 30.0 {
        if let Some(rule) = hot_rules.iter().find(|r| r.matches(reading)) {
            out.push(Advisory {
                severity: Severity::Heat,
                text: format!("☀️ {}", rule.text),
            });
        }
    } else if reading.temperature_c < 10.0 {
        if let Some(rule) = cold_rules.iter().find(|r| r.matches(reading)) {
            out.push(Advisory {
                severity: Severity::Chill,
                text: format!("❄️ {}", rule.text),
            });
        }
    }

    out
}
