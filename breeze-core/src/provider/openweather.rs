use crate::{
    error::WeatherError,
    model::{Coordinates, WeatherSnapshot},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::WeatherApi;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap current-weather client.
#[derive(Debug, Clone)]
pub struct OpenWeather {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeather {
    pub fn new(api_key: String) -> Self {
        Self { api_key, endpoint: CURRENT_URL.to_string(), http: Client::new() }
    }
}

/// `cod` arrives as a number on success responses and as a string on error
/// responses.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Cod {
    Num(i64),
    Text(String),
}

impl Cod {
    fn as_i64(&self) -> i64 {
        match self {
            Cod::Num(n) => *n,
            Cod::Text(s) => s.parse().unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    cod: Cod,
    message: Option<String>,
}

#[async_trait]
impl WeatherApi for OpenWeather {
    async fn current_weather(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let body = res.text().await?;

        // The provider reports its own status inside the body; error bodies
        // do not carry the snapshot fields, so check before deserializing.
        let envelope: Envelope = serde_json::from_str(&body)?;
        if envelope.cod.as_i64() != 200 {
            let message =
                envelope.message.unwrap_or_else(|| "unspecified provider error".to_string());
            return Err(WeatherError::Provider(message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CURRENT_BODY: &str = r#"{
        "cod": 200,
        "name": "Kyiv",
        "main": { "temp": 21.6, "humidity": 64, "pressure": 1012 },
        "weather": [ { "description": "scattered clouds" } ],
        "wind": { "speed": 4.2 }
    }"#;

    fn api_for(server: &MockServer) -> OpenWeather {
        OpenWeather {
            api_key: "TEST_KEY".to_string(),
            endpoint: server.uri(),
            http: Client::new(),
        }
    }

    const KYIV: Coordinates = Coordinates { latitude: 50.45, longitude: 30.52 };

    #[tokio::test]
    async fn successful_fetch_parses_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("lat", "50.45"))
            .and(query_param("lon", "30.52"))
            .and(query_param("appid", "TEST_KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(CURRENT_BODY, "application/json"))
            .mount(&server)
            .await;

        let snapshot = api_for(&server)
            .current_weather(KYIV)
            .await
            .expect("fetch should succeed");

        assert_eq!(snapshot.name, "Kyiv");
        assert_eq!(snapshot.main.temp, 21.6);
        assert_eq!(snapshot.main.humidity, 64);
        assert_eq!(snapshot.main.pressure, 1012);
        assert_eq!(snapshot.weather[0].description, "scattered clouds");
        assert_eq!(snapshot.wind.speed, 4.2);
    }

    #[tokio::test]
    async fn provider_error_carries_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_raw(
                r#"{"cod":401,"message":"Invalid API key"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .current_weather(KYIV)
            .await
            .expect_err("fetch should be rejected");

        match err {
            WeatherError::Provider(message) => assert_eq!(message, "Invalid API key"),
            other => panic!("expected Provider, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn string_cod_is_still_a_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(
                r#"{"cod":"404","message":"city not found"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .current_weather(KYIV)
            .await
            .expect_err("fetch should be rejected");

        assert!(matches!(err, WeatherError::Provider(message) if message == "city not found"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .current_weather(KYIV)
            .await
            .expect_err("fetch should fail to decode");

        assert!(matches!(err, WeatherError::Decode(_)));
    }
}
