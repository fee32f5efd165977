//! `CityScope` - city weather and tourist attraction aggregation service
//!
//! This library provides the lookup pipeline behind the single
//! `/get_city_info` endpoint: geocoding a city name, fetching the
//! nearest-hour temperature for it, and listing tourist attractions.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod places;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use aggregator::CityInfoService;
pub use config::AppConfig;
pub use error::CityscopeError;
pub use geocode::Geocoder;
pub use models::{CityInfo, Coordinates, Place, Rating, TouristPlaces};
pub use places::PlacesClient;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
