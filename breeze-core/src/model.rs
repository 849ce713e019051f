use serde::{Deserialize, Serialize};

/// Position produced by a location source, consumed immediately by the
/// weather client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current-weather payload, kept in the provider's own shape.
///
/// The cache slot stores exactly what the provider returned, so a cached
/// value re-displays identically to a freshly fetched one. The presenter
/// derives the flattened display fields from this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub name: String,
    pub main: MainMetrics,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainMetrics {
    pub temp: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    pub speed: f64,
}

#[cfg(test)]
pub(crate) fn sample_snapshot(temp: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        name: "Kyiv".to_string(),
        main: MainMetrics { temp, humidity: 64, pressure: 1012 },
        weather: vec![Condition { description: "scattered clouds".to_string() }],
        wind: Wind { speed: 4.2 },
    }
}
