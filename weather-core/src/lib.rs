//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Credentials handling
//! - The typed error surface
//! - The OpenWeather client behind a provider trait
//! - Pure presentation mappers (condition visuals, temperature feel,
//!   advisory rules)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod advisory;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod visuals;

pub use advisory::{Advisory, Severity, advisories};
pub use config::{API_KEY_ENV, Credentials};
pub use error::WeatherError;
pub use model::WeatherReading;
pub use provider::{WeatherProvider, openweather::OpenWeatherClient};
pub use visuals::{ConditionVisuals, condition_visuals, temperature_feel};
