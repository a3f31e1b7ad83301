const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";
const DEFAULT_EMOJI: &str = "🌤️";

/// First match of a geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_name: String,
    pub country_code: String,
}

/// Raw current conditions as returned by the weather endpoint, before reshaping.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition_group: String,
    pub description: String,
    pub icon_code: String,
}

/// Flat display record for one successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub country: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition_group: String,
    pub description: String,
    pub icon_url: String,
}

impl WeatherView {
    /// Combine the geocoded place with its current conditions.
    pub fn from_lookup(place: GeocodeResult, current: CurrentConditions) -> Self {
        Self {
            city: place.resolved_name,
            country: place.country_code,
            temperature_c: round_celsius(current.temperature_c),
            feels_like_c: round_celsius(current.feels_like_c),
            humidity_pct: current.humidity_pct,
            wind_speed_mps: current.wind_speed_mps,
            condition_group: current.condition_group,
            description: current.description,
            icon_url: icon_url(&current.icon_code),
        }
    }

    pub fn emoji(&self) -> &'static str {
        condition_emoji(&self.condition_group)
    }
}

/// Rounds half away from zero.
fn round_celsius(raw: f64) -> i32 {
    raw.round() as i32
}

/// 2x resolution icon for an OpenWeather icon code, e.g. `10d`.
pub fn icon_url(icon_code: &str) -> String {
    format!("{ICON_URL_BASE}/{icon_code}@2x.png")
}

/// Display emoji for a condition group; unknown groups get a default.
pub fn condition_emoji(group: &str) -> &'static str {
    match group {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Haze" | "Fog" => "🌫️",
        _ => DEFAULT_EMOJI,
    }
}
