use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::flights::{find_nearby, NearbyFlight};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[utoipa::path(
    get,
    path = "/nearby-flights/{latitude}/{longitude}",
    tag = "flights",
    params(
        ("latitude" = f64, Path, description = "Reference latitude in degrees"),
        ("longitude" = f64, Path, description = "Reference longitude in degrees")
    ),
    responses(
        (status = 200, description = "Aircraft within the configured threshold", body = Vec<NearbyFlight>),
        (status = 400, description = "Coordinates out of range", body = ErrorResponse),
        (status = 502, description = "Aircraft API failure", body = ErrorResponse),
        (status = 503, description = "Aircraft API rate limited", body = ErrorResponse)
    )
)]
pub async fn nearby_flights(
    State(state): State<AppState>,
    Path((latitude, longitude)): Path<(f64, f64)>,
) -> ApiResult<impl IntoResponse> {
    if !coordinates_in_range(latitude, longitude) {
        return Err(ApiError::Validation(format!(
            "Coordinates out of range: ({}, {})",
            latitude, longitude
        )));
    }

    let states = state.opensky.states().await.map_err(|e| {
        log::warn!(
            "Nearby flight lookup at ({}, {}) failed: {}",
            latitude,
            longitude,
            e
        );
        ApiError::from(e)
    })?;

    let threshold_km = state.config.opensky.threshold_km;
    let flights = find_nearby(&states, latitude, longitude, threshold_km);

    log::info!(
        "{} of {} aircraft within {} km of ({}, {})",
        flights.len(),
        states.len(),
        threshold_km,
        latitude,
        longitude
    );

    Ok((StatusCode::OK, Json(flights)))
}

fn coordinates_in_range(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}
