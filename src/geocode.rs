//! Geocoding via the Nominatim (OpenStreetMap) search API
//!
//! Resolves a free-text city name to coordinates. The first result wins,
//! regardless of relevance; every failure collapses into `None` so the rest
//! of the pipeline can carry on with a best-effort response.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::Coordinates;

pub struct Geocoder {
    http: Client,
    base_url: String,
}

/// A single Nominatim search result. Coordinates arrive as JSON strings.
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}

impl Geocoder {
    #[must_use]
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Resolve a city name to coordinates, or `None` when the service
    /// returns no results, a non-200 status, or unparsable content.
    pub async fn lookup(&self, city: &str) -> Option<Coordinates> {
        match self.search(city).await {
            Ok(Some(coordinates)) => {
                debug!(
                    "Geocoded '{}' to ({:.4}, {:.4})",
                    city, coordinates.latitude, coordinates.longitude
                );
                Some(coordinates)
            }
            Ok(None) => {
                warn!("No geocoding results for '{}'", city);
                None
            }
            Err(e) => {
                warn!("Geocoding '{}' failed: {:#}", city, e);
                None
            }
        }
    }

    async fn search(&self, city: &str) -> Result<Option<Coordinates>> {
        let url = format!(
            "{}/search?q={}&format=json",
            self.base_url,
            urlencoding::encode(city)
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to send geocoding request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Geocoding request failed with status {status}");
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .context("Failed to parse geocoding response")?;

        first_coordinates(&results)
    }
}

/// Extract the first result's coordinates, parsing the string fields.
fn first_coordinates(results: &[NominatimResult]) -> Result<Option<Coordinates>> {
    let Some(first) = results.first() else {
        return Ok(None);
    };

    let latitude = first
        .lat
        .parse::<f64>()
        .with_context(|| format!("Invalid latitude: {}", first.lat))?;
    let longitude = first
        .lon
        .parse::<f64>()
        .with_context(|| format!("Invalid longitude: {}", first.lon))?;

    Ok(Some(Coordinates::new(latitude, longitude)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_result_wins() {
        let results = vec![
            NominatimResult {
                lat: "48.8534951".to_string(),
                lon: "2.3483915".to_string(),
            },
            NominatimResult {
                lat: "33.6617962".to_string(),
                lon: "-95.555513".to_string(),
            },
        ];

        let coordinates = first_coordinates(&results).unwrap().unwrap();
        assert_eq!(coordinates, Coordinates::new(48.8534951, 2.3483915));
    }

    #[test]
    fn test_empty_results_yield_none() {
        assert_eq!(first_coordinates(&[]).unwrap(), None);
    }

    #[test]
    fn test_unparsable_coordinates_error() {
        let results = vec![NominatimResult {
            lat: "not-a-number".to_string(),
            lon: "2.35".to_string(),
        }];

        let err = first_coordinates(&results).unwrap_err();
        assert!(err.to_string().contains("Invalid latitude"));
    }
}
