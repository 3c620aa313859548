use thiserror::Error;

/// Failure modes of a single weather lookup.
///
/// Exactly one variant is produced per failed call; nothing is retried or
/// recovered locally. The CLI prints the message and exits nonzero.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Missing or invalid input, detected before any network activity.
    #[error("{0}")]
    Configuration(String),

    /// The service rejected the API key (HTTP 401).
    #[error("Invalid API key. Please check your OPENWEATHER_API_KEY.")]
    Authentication,

    /// The named city is unknown to the service (HTTP 404).
    #[error("City \"{city}\" not found.")]
    NotFound { city: String },

    /// Any other non-2xx response, with the upstream message when present.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No response received (connection, DNS, timeout).
    #[error("Network error. Unable to connect to weather service.")]
    Network(#[source] reqwest::Error),

    /// Local fault while building the request or reading the response.
    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered 2xx but the body is missing required fields.
    #[error("Malformed response from weather service: {0}")]
    MalformedResponse(String),
}
