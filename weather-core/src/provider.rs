use crate::{error::WeatherError, model::WeatherReading};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over the upstream weather service.
///
/// The CLI talks to this trait rather than a concrete client, so tests can
/// substitute a double and prove that configuration failures never reach
/// the network.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, WeatherError>;
}
