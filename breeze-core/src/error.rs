use thiserror::Error;

/// Failure from a [`LocationSource`](crate::location::LocationSource).
#[derive(Debug, Error)]
pub enum LocationError {
    /// The platform offers no way to resolve a position.
    #[error("location lookup is not supported on this platform")]
    Unsupported,

    /// The position query was refused or failed.
    #[error("location access denied: {0}")]
    Denied(String),
}

/// Failure from a [`WeatherApi`](crate::provider::WeatherApi).
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered, but with an error payload of its own.
    #[error("weather provider error: {0}")]
    Provider(String),

    /// Transport-level failure.
    #[error("weather request failed")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode weather response")]
    Decode(#[from] serde_json::Error),
}
