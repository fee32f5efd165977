//! Data models for the `CityScope` service
//!
//! Everything here lives for exactly one request: the geocoded coordinates
//! feed the weather lookup, and `CityInfo` is the response object assembled
//! at the end of the pipeline.

use serde::{Deserialize, Serialize, Serializer};

/// Sentinel used on the wire when a place carries no rating
pub const NO_RATING: &str = "No rating available";

/// Sentinel used on the wire when no tourist attractions were found
pub const NO_PLACES: &str = "No tourist attractions found.";

/// Geographic coordinates produced by the geocoder
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A place rating as reported by the places API
///
/// Serializes as a JSON number, or as the sentinel string when the upstream
/// result carried no rating field.
#[derive(Debug, Clone, PartialEq)]
pub enum Rating {
    Score(f64),
    Unrated,
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f64(*score),
            Rating::Unrated => serializer.serialize_str(NO_RATING),
        }
    }
}

impl From<Option<f64>> for Rating {
    fn from(score: Option<f64>) -> Self {
        score.map_or(Rating::Unrated, Rating::Score)
    }
}

/// A single tourist attraction
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub rating: Rating,
}

/// Tourist attractions for a city
///
/// The original service mixed `Place` records and a bare placeholder string
/// in one list; the variants keep that distinction honest while serializing
/// to the same wire format.
#[derive(Debug, Clone, PartialEq)]
pub enum TouristPlaces {
    Found(Vec<Place>),
    NotFound,
}

impl TouristPlaces {
    /// Fold an optional result list into the response variant. An empty list
    /// counts as not found.
    #[must_use]
    pub fn from_results(places: Option<Vec<Place>>) -> Self {
        match places {
            Some(places) if !places.is_empty() => TouristPlaces::Found(places),
            _ => TouristPlaces::NotFound,
        }
    }
}

impl Serialize for TouristPlaces {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TouristPlaces::Found(places) => places.serialize(serializer),
            TouristPlaces::NotFound => [NO_PLACES].serialize(serializer),
        }
    }
}

/// Aggregated response object for one city lookup
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CityInfo {
    pub city: String,
    pub weather: String,
    pub tourist_places: TouristPlaces,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Rating::Score(4.7), json!(4.7))]
    #[case(Rating::Unrated, json!("No rating available"))]
    fn test_rating_wire_format(#[case] rating: Rating, #[case] expected: serde_json::Value) {
        assert_eq!(serde_json::to_value(&rating).unwrap(), expected);
    }

    #[test]
    fn test_rating_from_optional_score() {
        assert_eq!(Rating::from(Some(4.2)), Rating::Score(4.2));
        assert_eq!(Rating::from(None), Rating::Unrated);
    }

    #[test]
    fn test_found_places_serialize_as_record_array() {
        let places = TouristPlaces::Found(vec![
            Place {
                name: "Louvre Museum".to_string(),
                rating: Rating::Score(4.7),
            },
            Place {
                name: "Pont Neuf".to_string(),
                rating: Rating::Unrated,
            },
        ]);

        assert_eq!(
            serde_json::to_value(&places).unwrap(),
            json!([
                {"name": "Louvre Museum", "rating": 4.7},
                {"name": "Pont Neuf", "rating": "No rating available"},
            ])
        );
    }

    #[test]
    fn test_not_found_serializes_as_placeholder_list() {
        assert_eq!(
            serde_json::to_value(&TouristPlaces::NotFound).unwrap(),
            json!(["No tourist attractions found."])
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(vec![]))]
    fn test_missing_or_empty_results_fold_to_not_found(#[case] places: Option<Vec<Place>>) {
        assert_eq!(TouristPlaces::from_results(places), TouristPlaces::NotFound);
    }

    #[test]
    fn test_city_info_wire_format() {
        let info = CityInfo {
            city: "Paris".to_string(),
            weather: "Current temperature in Paris is 21.5 celsius ".to_string(),
            tourist_places: TouristPlaces::NotFound,
        };

        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "city": "Paris",
                "weather": "Current temperature in Paris is 21.5 celsius ",
                "tourist_places": ["No tourist attractions found."],
            })
        );
    }
}
