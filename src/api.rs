use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::aggregator::CityInfoService;
use crate::models::CityInfo;

#[derive(Debug, Deserialize)]
struct CityQuery {
    city: Option<String>,
}

#[derive(Serialize)]
struct CityInfoEnvelope {
    response: CityInfo,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn router(service: Arc<CityInfoService>) -> Router {
    Router::new()
        .route("/get_city_info", get(get_city_info))
        .with_state(service)
}

async fn get_city_info(
    State(service): State<Arc<CityInfoService>>,
    Query(params): Query<CityQuery>,
) -> Response {
    match params.city {
        Some(city) if !city.is_empty() => {
            let info = service.city_info(&city).await;
            Json(CityInfoEnvelope { response: info }).into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "City parameter is required".to_string(),
            }),
        )
            .into_response(),
    }
}
