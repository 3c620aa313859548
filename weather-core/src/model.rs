/// One observation assembled from the service response.
///
/// It has no identity beyond a single invocation and is discarded after
/// rendering. Constructed only through the provider, which rejects partial
/// or non-finite data.
#[derive(Debug, Clone)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Upstream integer classifying the phenomenon, e.g. 500 for rain.
    pub condition_code: u32,
    /// Upstream pictogram tag, e.g. "01d"; the trailing letter marks day/night.
    pub icon_code: String,
    /// Raw textual description as reported, e.g. "light rain".
    pub description: String,
}
