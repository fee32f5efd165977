//! Tourist attraction search via the Google Places text-search API
//!
//! One free-text query per lookup, first five results taken verbatim in the
//! API's own ranking. No pagination, no deduplication, no relevance
//! filtering beyond what the API itself applies.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{Place, Rating};

/// Maximum number of attractions returned per lookup
const MAX_PLACES: usize = 5;

pub struct PlacesClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Text-search response. `results` is absent on error payloads.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<PlaceResult>>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    name: String,
    rating: Option<f64>,
}

impl PlacesClient {
    #[must_use]
    pub fn new(http: Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Look up tourist attractions for a city, or `None` when the response
    /// lacks a results field or any step fails.
    pub async fn tourist_attractions(&self, city: &str) -> Option<Vec<Place>> {
        let Some(api_key) = &self.api_key else {
            warn!("No places API key configured, skipping attraction lookup");
            return None;
        };

        match self.search(city, api_key).await {
            Ok(Some(places)) => {
                debug!("Found {} attractions for '{}'", places.len(), city);
                Some(places)
            }
            Ok(None) => {
                warn!("Places response for '{}' carried no results field", city);
                None
            }
            Err(e) => {
                warn!("Places lookup for '{}' failed: {:#}", city, e);
                None
            }
        }
    }

    async fn search(&self, city: &str, api_key: &str) -> Result<Option<Vec<Place>>> {
        let url = format!("{}/textsearch/json", self.base_url);
        let query = format!("tourist attractions in {city}");

        let response = self
            .http
            .get(&url)
            .query(&[("query", query.as_str()), ("key", api_key)])
            .send()
            .await
            .context("Failed to send places request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Places request failed with status {status}");
        }

        let search: SearchResponse = response
            .json()
            .await
            .context("Failed to parse places response")?;

        Ok(search.results.map(to_places))
    }
}

/// Map raw results to `Place` records, capped at the first five.
fn to_places(results: Vec<PlaceResult>) -> Vec<Place> {
    results
        .into_iter()
        .take(MAX_PLACES)
        .map(|result| Place {
            name: result.name,
            rating: Rating::from(result.rating),
        })
        .collect()
}
