use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::{Config, Endpoints},
    model::{CurrentConditions, GeocodeResult},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoints: Endpoints,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            endpoints: config.endpoints.clone(),
            http: Client::new(),
        }
    }

    /// GET `url` with `params` and return the body of a successful response.
    async fn get_body(&self, url: &str, params: &[(&str, &str)], what: &str) -> Result<String> {
        tracing::debug!(url, what, "sending OpenWeather request");

        let res = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("Failed to send {what} request to OpenWeather"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                what,
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwPlace {
    name: String,
    lat: f64,
    lon: f64,
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn geocode(&self, city: &str) -> Result<Vec<GeocodeResult>> {
        let body = self
            .get_body(
                &self.endpoints.geocode_url,
                &[("q", city), ("limit", "1"), ("appid", self.api_key.as_str())],
                "geocoding",
            )
            .await?;

        let places: Vec<OwPlace> =
            serde_json::from_str(&body).context("Failed to parse OpenWeather geocoding JSON")?;

        tracing::debug!(city, matches = places.len(), "geocoding finished");

        Ok(places
            .into_iter()
            .map(|p| GeocodeResult {
                latitude: p.lat,
                longitude: p.lon,
                resolved_name: p.name,
                country_code: p.country,
            })
            .collect())
    }

    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<CurrentConditions> {
        let lat = latitude.to_string();
        let lon = longitude.to_string();

        let body = self
            .get_body(
                &self.endpoints.weather_url,
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("appid", self.api_key.as_str()),
                    ("units", "metric"),
                ],
                "current weather",
            )
            .await?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let weather = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenWeather current response contained no conditions"))?;

        Ok(CurrentConditions {
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition_group: weather.main,
            description: weather.description,
            icon_code: weather.icon,
        })
    }
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
