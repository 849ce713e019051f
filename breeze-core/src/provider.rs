//! Abstraction over the weather provider.

use crate::{
    error::WeatherError,
    model::{Coordinates, WeatherSnapshot},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A provider of current weather by position. Single attempt, no retry.
#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot, WeatherError>;
}
