//! Current-position lookup.
//!
//! The production source resolves the machine's position from its public IP
//! address; no API key is required. Frontends with access to a real
//! positioning service can substitute their own [`LocationSource`].

use crate::{error::LocationError, model::Coordinates};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

/// Single-shot current-position query. Not a continuous watch.
#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

const LOOKUP_URL: &str = "http://ip-api.com/json";

/// Position lookup via ip-api.com.
#[derive(Debug, Clone)]
pub struct IpLocationSource {
    endpoint: String,
    http: Client,
}

impl IpLocationSource {
    pub fn new() -> Self {
        Self { endpoint: LOOKUP_URL.to_string(), http: Client::new() }
    }
}

impl Default for IpLocationSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    status: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    message: Option<String>,
}

#[async_trait]
impl LocationSource for IpLocationSource {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let res = self.http.get(&self.endpoint).send().await.map_err(|err| {
            if err.is_connect() {
                // The lookup service cannot be reached at all; there is no
                // positioning capability to ask.
                LocationError::Unsupported
            } else {
                LocationError::Denied(err.to_string())
            }
        })?;

        let lookup: LookupResponse = res
            .json()
            .await
            .map_err(|err| LocationError::Denied(err.to_string()))?;

        if lookup.status != "success" {
            let message = lookup.message.unwrap_or_else(|| "lookup refused".to_string());
            return Err(LocationError::Denied(message));
        }

        Ok(Coordinates { latitude: lookup.lat, longitude: lookup.lon })
    }
}
