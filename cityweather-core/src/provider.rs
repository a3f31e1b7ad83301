use crate::model::{CurrentConditions, GeocodeResult};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// The two remote calls a search is made of.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve a city name to candidate places, best match first.
    async fn geocode(&self, city: &str) -> anyhow::Result<Vec<GeocodeResult>>;

    /// Current conditions at the given coordinates, in metric units.
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<CurrentConditions>;
}
