use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{config::Credentials, error::WeatherError, model::WeatherReading};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// One request per lookup, no retries, default transport timeout.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Tests aim this at a local
    /// mock server.
    pub fn with_base_url(credentials: Credentials, base_url: String) -> Self {
        Self {
            api_key: credentials.api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}/weather", self.base_url);

        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = res.status();
        debug!(%status, "weather service answered");

        if !status.is_success() {
            return Err(error_for_status(status, city, res).await);
        }

        let body = res.text().await.map_err(classify_transport_error)?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

        parsed.into_reading()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        self.fetch_current(city).await
    }
}

/// Map a failed `reqwest` call to exactly one error kind: builder and
/// decode faults are local setup problems, everything else means no usable
/// response arrived.
fn classify_transport_error(err: reqwest::Error) -> WeatherError {
    if err.is_builder() || err.is_decode() {
        WeatherError::Request(err)
    } else {
        WeatherError::Network(err)
    }
}

async fn error_for_status(
    status: StatusCode,
    city: &str,
    res: reqwest::Response,
) -> WeatherError {
    match status {
        StatusCode::UNAUTHORIZED => WeatherError::Authentication,
        StatusCode::NOT_FOUND => WeatherError::NotFound {
            city: city.to_string(),
        },
        _ => {
            let body = res.text().await.unwrap_or_default();
            WeatherError::Api {
                status: status.as_u16(),
                message: upstream_message(&body),
            }
        }
    }
}

/// Pull the `message` field out of an OpenWeather error body, falling back
/// to the truncated raw body.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u32,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

impl OwCurrentResponse {
    /// Reject partial data instead of handing the renderer garbage.
    fn into_reading(self) -> Result<WeatherReading, WeatherError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::MalformedResponse("weather conditions array is empty".to_string())
        })?;

        for (field, value) in [
            ("main.temp", self.main.temp),
            ("main.feels_like", self.main.feels_like),
            ("wind.speed", self.wind.speed),
        ] {
            if !value.is_finite() {
                return Err(WeatherError::MalformedResponse(format!(
                    "field {field} is not a finite number"
                )));
            }
        }

        Ok(WeatherReading {
            city: self.name,
            country: self.sys.country,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.speed,
            condition_code: condition.id,
            icon_code: condition.icon,
            description: condition.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON_PAYLOAD: &str = r#"{
        "name": "London",
        "main": { "temp": 15.0, "feels_like": 14.2, "humidity": 70 },
        "weather": [ { "id": 500, "description": "light rain", "icon": "10d" } ],
        "wind": { "speed": 3.0 },
        "sys": { "country": "GB" }
    }"#;

    fn client_for(server: &mockito::ServerGuard) -> OpenWeatherClient {
        let creds = Credentials {
            api_key: "TESTKEY".to_string(),
        };
        OpenWeatherClient::with_base_url(creds, server.url())
    }

    #[tokio::test]
    async fn parses_valid_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("q".into(), "London".into()),
                mockito::Matcher::UrlEncoded("appid".into(), "TESTKEY".into()),
                mockito::Matcher::UrlEncoded("units".into(), "metric".into()),
            ]))
            .with_status(200)
            .with_body(LONDON_PAYLOAD)
            .create_async()
            .await;

        let reading = client_for(&server)
            .current_weather("London")
            .await
            .expect("fetch must succeed");
        mock.assert_async().await;

        assert_eq!(reading.city, "London");
        assert_eq!(reading.country, "GB");
        assert_eq!(reading.temperature_c, 15.0);
        assert_eq!(reading.feels_like_c, 14.2);
        assert_eq!(reading.humidity_pct, 70);
        assert_eq!(reading.wind_speed_mps, 3.0);
        assert_eq!(reading.condition_code, 500);
        assert_eq!(reading.icon_code, "10d");
        assert_eq!(reading.description, "light rain");
    }

    #[tokio::test]
    async fn maps_404_to_not_found_naming_the_city() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .with_body(r#"{"cod":"404","message":"city not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .current_weather("Atlantis")
            .await
            .unwrap_err();

        match err {
            WeatherError::NotFound { city } => assert_eq!(city, "Atlantis"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn maps_401_to_authentication() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .with_body(r#"{"cod":401,"message":"Invalid API key"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .current_weather("London")
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Authentication));
    }

    #[tokio::test]
    async fn maps_other_statuses_to_api_error_with_upstream_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .with_body(r#"{"cod":"503","message":"service temporarily unavailable"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .current_weather("London")
            .await
            .unwrap_err();

        match err {
            WeatherError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "service temporarily unavailable");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_field_is_a_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"name":"London","weather":[],"wind":{"speed":1.0},"sys":{"country":"GB"}}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .current_weather("London")
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn empty_conditions_array_is_a_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{
                    "name": "London",
                    "main": { "temp": 15.0, "feels_like": 14.2, "humidity": 70 },
                    "weather": [],
                    "wind": { "speed": 3.0 },
                    "sys": { "country": "GB" }
                }"#,
            )
            .create_async()
            .await;

        let err = client_for(&server)
            .current_weather("London")
            .await
            .unwrap_err();

        match err {
            WeatherError::MalformedResponse(msg) => {
                assert!(msg.contains("conditions array is empty"))
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let creds = Credentials {
            api_key: "TESTKEY".to_string(),
        };
        // Port 9 (discard) is not listening locally.
        let client = OpenWeatherClient::with_base_url(creds, "http://127.0.0.1:9".to_string());

        let err = client.current_weather("London").await.unwrap_err();
        assert!(matches!(err, WeatherError::Network(_)));
    }

    #[test]
    fn upstream_message_falls_back_to_raw_body() {
        assert_eq!(upstream_message("not json"), "not json");

        let long = "x".repeat(300);
        let truncated = upstream_message(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }
}
