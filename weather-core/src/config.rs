use crate::error::WeatherError;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Credentials resolved once at startup and passed explicitly into the
/// client, so no network code ever reads the environment itself.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
}

impl Credentials {
    /// Read the API key from the process environment.
    pub fn from_env() -> Result<Self, WeatherError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the API key through an injected lookup. Tests use this to
    /// simulate the environment without touching process globals.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WeatherError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(WeatherError::Configuration(format!(
                "{API_KEY_ENV} is not set.\n\
                 Get a free API key at https://openweathermap.org/appid and export it \
                 before running."
            ))),
        }
    }
}

/// Validate and normalize the requested city name.
pub fn validate_city(city: &str) -> Result<String, WeatherError> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err(WeatherError::Configuration(
            "City name must not be empty.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
