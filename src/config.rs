//! Configuration for the `CityScope` service
//!
//! All settings come from the environment with sensible defaults; the only
//! value without a default is the places API key, which is an externally
//! supplied credential and never lives in source.

use crate::CityscopeError;
use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the `CityScope` service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Base URL of the geocoding (Nominatim) API
    pub geocoding_url: String,
    /// Base URL of the weather (Open-Meteo) API
    pub weather_url: String,
    /// Base URL of the places (Google Places) API
    pub places_url: String,
    /// API key for the places API, if configured
    pub places_api_key: Option<String>,
    /// Request timeout for all upstream calls, in seconds
    pub http_timeout_secs: u64,
    /// User agent sent to all upstream APIs (Nominatim requires one)
    pub user_agent: String,
}

fn default_geocoding_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_weather_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_places_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

fn default_user_agent() -> String {
    format!("CityScope/{} (city info aggregation service)", crate::VERSION)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            geocoding_url: default_geocoding_url(),
            weather_url: default_weather_url(),
            places_url: default_places_url(),
            places_api_key: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("CITYSCOPE_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid CITYSCOPE_PORT: {port}"))?;
        }
        if let Ok(url) = env::var("CITYSCOPE_GEOCODING_URL") {
            config.geocoding_url = url;
        }
        if let Ok(url) = env::var("CITYSCOPE_WEATHER_URL") {
            config.weather_url = url;
        }
        if let Ok(url) = env::var("CITYSCOPE_PLACES_URL") {
            config.places_url = url;
        }
        if let Ok(timeout) = env::var("CITYSCOPE_HTTP_TIMEOUT_SECS") {
            config.http_timeout_secs = timeout
                .parse()
                .with_context(|| format!("Invalid CITYSCOPE_HTTP_TIMEOUT_SECS: {timeout}"))?;
        }
        config.places_api_key = env::var("GOOGLE_PLACES_API_KEY").ok().filter(|k| !k.is_empty());

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("geocoding", &self.geocoding_url),
            ("weather", &self.weather_url),
            ("places", &self.places_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CityscopeError::config(format!(
                    "The {name} base URL must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }

        if self.http_timeout_secs == 0 || self.http_timeout_secs > 300 {
            return Err(CityscopeError::config(
                "HTTP timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        Ok(())
    }
}
