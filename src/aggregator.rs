//! The city lookup pipeline
//!
//! One `CityInfoService` is built at startup and shared across requests. A
//! lookup runs the three upstream calls strictly in sequence and always
//! produces a best-effort `CityInfo`; individual failures surface as
//! sentinel values in the payload, never as errors.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::config::AppConfig;
use crate::geocode::Geocoder;
use crate::models::{CityInfo, TouristPlaces};
use crate::places::PlacesClient;
use crate::weather::WeatherClient;

pub struct CityInfoService {
    geocoder: Geocoder,
    weather: WeatherClient,
    places: PlacesClient,
}

impl CityInfoService {
    /// Build the service and its shared HTTP client from configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            geocoder: Geocoder::new(http.clone(), config.geocoding_url.clone()),
            weather: WeatherClient::new(http.clone(), config.weather_url.clone()),
            places: PlacesClient::new(
                http,
                config.places_url.clone(),
                config.places_api_key.clone(),
            ),
        })
    }

    /// Aggregate weather and tourist attractions for a city.
    ///
    /// The weather and places lookups both run unconditionally; a failed
    /// geocode only degrades the weather report.
    pub async fn city_info(&self, city: &str) -> CityInfo {
        info!("Looking up city info for '{}'", city);

        let coordinates = self.geocoder.lookup(city).await;
        let weather = self.weather.current_report(city, coordinates).await;
        let places = self.places.tourist_attractions(city).await;

        CityInfo {
            city: city.to_string(),
            weather,
            tourist_places: TouristPlaces::from_results(places),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_builds_from_default_config() {
        let service = CityInfoService::new(&AppConfig::default());
        assert!(service.is_ok());
    }
}
