//! Pure mapping from upstream condition codes and temperatures to display
//! text. No I/O, fully deterministic, total over all inputs.

/// Icon and label for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionVisuals {
    pub icon: &'static str,
    pub label: &'static str,
}

/// One half-open `[lower, upper)` band of condition codes.
struct ConditionBand {
    lower: u32,
    upper: u32,
    day_icon: &'static str,
    night_icon: &'static str,
    label: &'static str,
}

/// Ordered dispatch table over the OpenWeatherMap condition-code groups.
/// See https://openweathermap.org/weather-conditions
const CONDITION_BANDS: &[ConditionBand] = &[
    ConditionBand { lower: 200, upper: 300, day_icon: "⛈️", night_icon: "⛈️", label: "Thunderstorm" },
    ConditionBand { lower: 300, upper: 400, day_icon: "💧", night_icon: "💧", label: "Drizzle" },
    ConditionBand { lower: 500, upper: 600, day_icon: "🌧️", night_icon: "🌧️", label: "Rain" },
    ConditionBand { lower: 600, upper: 700, day_icon: "❄️", night_icon: "❄️", label: "Snow" },
    ConditionBand { lower: 700, upper: 800, day_icon: "🌫️", night_icon: "🌫️", label: "Atmosphere" },
    ConditionBand { lower: 800, upper: 801, day_icon: "☀️", night_icon: "🌙", label: "Clear" },
    ConditionBand { lower: 801, upper: 802, day_icon: "🌤️", night_icon: "🌤️", label: "Few Clouds" },
    ConditionBand { lower: 802, upper: 803, day_icon: "⛅️", night_icon: "⛅️", label: "Scattered Clouds" },
    ConditionBand { lower: 803, upper: 804, day_icon: "☁️", night_icon: "☁️", label: "Broken Clouds" },
    ConditionBand { lower: 804, upper: 805, day_icon: "☁️☁️", night_icon: "☁️☁️", label: "Overcast Clouds" },
];

const UNKNOWN: ConditionVisuals = ConditionVisuals {
    icon: "❓",
    label: "Unknown",
};

/// Map a condition code and icon tag to display visuals.
///
/// Codes outside every band fall back to the Unknown visuals; this never
/// fails. Only the Clear pictogram differs between day and night, picked
/// by the trailing `d`/`n` of the icon code.
pub fn condition_visuals(condition_code: u32, icon_code: &str) -> ConditionVisuals {
    let is_day = icon_code.ends_with('d');

    CONDITION_BANDS
        .iter()
        .find(|band| (band.lower..band.upper).contains(&condition_code))
        .map(|band| ConditionVisuals {
            icon: if is_day { band.day_icon } else { band.night_icon },
            label: band.label,
        })
        .unwrap_or(UNKNOWN)
}

/// Qualitative label for a temperature in °C.
///
/// The ladder is strictly descending and each threshold is exclusive:
/// exactly 35.0 reads "Hot", not "Very Hot".
pub fn temperature_feel(temp_celsius: f64) -> &'static str {
    const LADDER: &[(f64, &str)] = &[
        (35.0, "Very Hot"),
        (28.0, "Hot"),
        (20.0, "Warm"),
        (10.0, "Cool"),
        (0.0, "Cold"),
    ];

    LADDER
        .iter()
        .find(|(threshold, _)| temp_celsius > *threshold)
        .map(|(_, label)| *label)
        .unwrap_or("Very Cold")
}
