//! Current-temperature lookup via the Open-Meteo forecast API
//!
//! Fetches the hourly temperature series for a coordinate pair and picks the
//! entry closest to the current instant (nearest neighbor over the series,
//! not interpolation). The public output is a human-readable report string;
//! `WeatherError`'s `Display` forms are the user-facing error messages.

use anyhow::Context;
use chrono::{NaiveDateTime, Utc};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::Coordinates;

/// Timestamp format used by Open-Meteo hourly series, local to the location
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Failure modes of the weather lookup. The display strings are the exact
/// report strings returned to callers.
#[derive(Debug, Error, PartialEq)]
pub enum WeatherError {
    /// Non-200 status, or a 200 response without the expected hourly series
    #[error("Error fetching weather data.")]
    Fetch,
    /// Network failure or a response that could not be processed
    #[error("Error processing weather data: {0}")]
    Process(String),
}

pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    #[must_use]
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Produce the weather report string for a city.
    ///
    /// Without coordinates no request is issued and the location sentinel is
    /// returned; otherwise the report carries the forecast temperature
    /// nearest to now, or one of the `WeatherError` messages.
    pub async fn current_report(&self, city: &str, coordinates: Option<Coordinates>) -> String {
        let Some(coordinates) = coordinates else {
            return format!("Could not find location: {city}");
        };

        match self.nearest_temperature(coordinates).await {
            Ok(temperature) => {
                format!("Current temperature in {city} is {temperature:.1} celsius ")
            }
            Err(e) => e.to_string(),
        }
    }

    async fn nearest_temperature(&self, coordinates: Coordinates) -> Result<f64, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("hourly", "temperature_2m".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Process(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherError::Fetch);
        }

        let forecast: open_meteo::ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Process(e.to_string()))?;

        let Some(hourly) = forecast.hourly else {
            return Err(WeatherError::Fetch);
        };
        let Some(temperatures) = hourly.temperature_2m else {
            return Err(WeatherError::Fetch);
        };

        let timestamps = parse_timestamps(&hourly.time)
            .map_err(|e| WeatherError::Process(format!("{e:#}")))?;

        // The series carries local-time stamps; the original service compared
        // them against naive UTC "now" and this reproduces that comparison.
        let now = Utc::now().naive_utc();
        let index = closest_index(&timestamps, now)
            .ok_or_else(|| WeatherError::Process("forecast series is empty".to_string()))?;

        debug!(
            "Selected forecast entry {} of {} for ({:.4}, {:.4})",
            index,
            timestamps.len(),
            coordinates.latitude,
            coordinates.longitude
        );

        temperatures.get(index).copied().ok_or_else(|| {
            WeatherError::Process(format!(
                "temperature series has no entry at index {index}"
            ))
        })
    }
}

fn parse_timestamps(times: &[String]) -> anyhow::Result<Vec<NaiveDateTime>> {
    times
        .iter()
        .map(|t| {
            NaiveDateTime::parse_from_str(t, TIME_FORMAT)
                .with_context(|| format!("Invalid forecast timestamp: {t}"))
        })
        .collect()
}

/// Index of the timestamp with the minimum absolute distance from `now`,
/// or `None` for an empty series.
fn closest_index(timestamps: &[NaiveDateTime], now: NaiveDateTime) -> Option<usize> {
    timestamps
        .iter()
        .enumerate()
        .min_by_key(|(_, timestamp)| (**timestamp - now).num_seconds().abs())
        .map(|(index, _)| index)
}

/// `Open-Meteo` forecast response structures
mod open_meteo {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub hourly: Option<HourlyData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct HourlyData {
        #[serde(default)]
        pub time: Vec<String>,
        pub temperature_2m: Option<Vec<f64>>,
    }
}
