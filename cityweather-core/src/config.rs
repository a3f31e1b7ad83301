use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_GEOCODE_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Endpoint URLs for the two calls of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub geocode_url: String,
    pub weather_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Both endpoints under one base URL, keeping the OpenWeather paths.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            geocode_url: format!("{base}/geo/1.0/direct"),
            weather_url: format!("{base}/data/2.5/weather"),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
///
/// [endpoints]
/// geocode_url = "https://api.openweathermap.org/geo/1.0/direct"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key. Not validated; a wrong key surfaces as a failed request.
    pub api_key: String,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), endpoints: Endpoints::default() }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Replace the stored key when an override is present and non-empty.
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        self
    }

    /// Apply the env var key, then the flag key; the flag wins when both are set.
    pub fn with_overrides(self, env_key: Option<String>, flag_key: Option<String>) -> Self {
        self.with_api_key_override(env_key).with_api_key_override(flag_key)
    }

    /// Load the file, then apply the env var and the explicit override, in that order.
    pub fn resolve(explicit_key: Option<String>) -> Result<Self> {
        let cfg = Self::load()?.with_overrides(std::env::var(API_KEY_ENV).ok(), explicit_key);

        if cfg.api_key.is_empty() {
            tracing::debug!("no API key configured, requests will be sent without one");
        }

        Ok(cfg)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse configuration TOML")
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "configuration saved");
        Ok(path)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_openweather() {
        let cfg = Config::default();

        assert!(cfg.api_key.is_empty());
        assert_eq!(cfg.endpoints.geocode_url, DEFAULT_GEOCODE_URL);
        assert_eq!(cfg.endpoints.weather_url, DEFAULT_WEATHER_URL);
    }

    #[test]
    fn parse_key_only_keeps_default_endpoints() {
        let cfg = Config::parse(r#"api_key = "OPEN_KEY""#).expect("valid toml");

        assert_eq!(cfg.api_key, "OPEN_KEY");
        assert_eq!(cfg.endpoints, Endpoints::default());
    }

    #[test]
    fn parse_partial_endpoint_table() {
        let cfg = Config::parse(
            r#"
            api_key = "K"

            [endpoints]
            weather_url = "http://localhost:9000/weather"
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.endpoints.geocode_url, DEFAULT_GEOCODE_URL);
        assert_eq!(cfg.endpoints.weather_url, "http://localhost:9000/weather");
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        let err = Config::parse("api_key = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration TOML"));
    }

    #[test]
    fn override_replaces_key() {
        let cfg = Config::new("FILE_KEY").with_api_key_override(Some("ENV_KEY".into()));
        assert_eq!(cfg.api_key, "ENV_KEY");
    }

    #[test]
    fn blank_or_missing_override_keeps_key() {
        let cfg = Config::new("FILE_KEY")
            .with_api_key_override(None)
            .with_api_key_override(Some("   ".into()));
        assert_eq!(cfg.api_key, "FILE_KEY");
    }

    #[test]
    fn flag_key_wins_over_env_key() {
        let cfg = Config::new("FILE_KEY")
            .with_overrides(Some("ENV_KEY".into()), Some("FLAG_KEY".into()));
        assert_eq!(cfg.api_key, "FLAG_KEY");
    }

    #[test]
    fn env_key_wins_over_file_key() {
        let cfg = Config::new("FILE_KEY").with_overrides(Some("ENV_KEY".into()), None);
        assert_eq!(cfg.api_key, "ENV_KEY");
    }

    #[test]
    fn blank_flag_falls_back_to_env_key() {
        let cfg = Config::new("FILE_KEY").with_overrides(Some("ENV_KEY".into()), Some("".into()));
        assert_eq!(cfg.api_key, "ENV_KEY");
    }

    #[test]
    fn no_overrides_keep_file_key() {
        let cfg = Config::new("FILE_KEY").with_overrides(None, None);
        assert_eq!(cfg.api_key, "FILE_KEY");
    }

    #[test]
    fn base_url_endpoints_keep_paths() {
        let endpoints = Endpoints::with_base_url("http://127.0.0.1:4000/");

        assert_eq!(endpoints.geocode_url, "http://127.0.0.1:4000/geo/1.0/direct");
        assert_eq!(endpoints.weather_url, "http://127.0.0.1:4000/data/2.5/weather");
    }

    #[test]
    fn toml_roundtrip_preserves_config() {
        let cfg = Config::new("K").with_endpoints(Endpoints::with_base_url("http://x"));
        let text = toml::to_string_pretty(&cfg).expect("serializable");

        assert_eq!(Config::parse(&text).expect("parsable"), cfg);
    }
}
