//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather geocoding and current-weather calls
//! - The search form state machine and its display model
//!
//! It is used by `cityweather-cli`, but can also be driven by other front ends.

pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod provider;
pub mod search;

pub use config::{Config, Endpoints};
pub use error::SearchError;
pub use form::{SearchForm, Status, Submission};
pub use model::{CurrentConditions, GeocodeResult, WeatherView, condition_emoji};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use search::{Lookup, Step};
