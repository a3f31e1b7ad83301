//! Plain-text rendering of the search form.

use cityweather_core::{SearchForm, Status, WeatherView};

pub const TITLE: &str = "Weather App";
pub const SUBTITLE: &str = "Enter any city name and press Enter";
pub const LOADING: &str = "Searching...";

pub fn header() -> String {
    format!("{TITLE}\n{SUBTITLE}\n")
}

/// Error banner and/or result card for the current status.
pub fn form(form: &SearchForm) -> String {
    match form.status() {
        Status::Idle => String::new(),
        Status::Loading => LOADING.to_string(),
        Status::Error(message) => banner(message),
        Status::Success(view) => card(view),
    }
}

/// Result card on success, error banner otherwise, for one-shot output.
pub fn outcome(form: &SearchForm) -> Result<String, String> {
    match form.error() {
        Some(message) => Err(banner(message)),
        None => Ok(self::form(form)),
    }
}

pub fn banner(message: &str) -> String {
    format!("✖ {message}")
}

pub fn card(view: &WeatherView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}, {}\n", view.emoji(), view.city, view.country));
    out.push_str(&format!("{} — {}\n", view.condition_group, view.description));
    out.push('\n');
    out.push_str(&format!("  {}°C\n", view.temperature_c));
    out.push('\n');
    out.push_str(&format!("Feels like: {}°C\n", view.feels_like_c));
    out.push_str(&format!("Humidity: {}%\n", view.humidity_pct));
    out.push_str(&format!("Wind: {} m/s\n", view.wind_speed_mps));
    out.push_str(&format!("Icon: {}", view.icon_url));
    out
}
