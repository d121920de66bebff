//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the query
//! engine. User-supplied dates are validated here, before any store access.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;

use super::dto::{HealthResponse, RouteInfo, SeriesResponse, TemperatureStats};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Rejection message for malformed user-supplied dates.
pub const INVALID_DATE_MESSAGE: &str = "Incorrect date format, should be YYYY-MM-DD";

/// Parse a user-supplied date path segment.
///
/// Accepts exactly the shape 4-digit year, `-`, 2-digit month, `-`,
/// 2-digit day with calendar-valid month and day values. Anything else is
/// a 400 with a fixed message. No start/end ordering check is performed;
/// an inverted range simply matches zero rows downstream.
pub fn parse_query_date(raw: &str) -> Result<NaiveDate, AppError> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shape_ok {
        return Err(AppError::BadRequest(INVALID_DATE_MESSAGE.to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(INVALID_DATE_MESSAGE.to_string()))
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the backing
/// store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match state.engine.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1.0".to_string(),
        database,
    }))
}

/// GET /
///
/// Static listing of the available routes. Never fails.
pub async fn home() -> Json<Vec<RouteInfo>> {
    Json(vec![
        RouteInfo::new(
            "Annual precipitation data (all stations)",
            "/api/v1.0/precipitation",
        ),
        RouteInfo::new("Station name list", "/api/v1.0/stations"),
        RouteInfo::new(
            "Temperature observations (most active station)",
            "/api/v1.0/tobs",
        ),
        RouteInfo::new(
            "Min/avg/max temperature from start date to end of dataset (YYYY-MM-DD)",
            "/api/v1.0/{start}",
        ),
        RouteInfo::new(
            "Min/avg/max temperature from start date through end date (YYYY-MM-DD)",
            "/api/v1.0/{start}/{end}",
        ),
    ])
}

/// GET /api/v1.0/precipitation
///
/// Precipitation by date over the last twelve months of data.
pub async fn precipitation(State(state): State<AppState>) -> HandlerResult<SeriesResponse> {
    let series = state.engine.precipitation_series().await?;
    Ok(Json(series))
}

/// GET /api/v1.0/stations
///
/// Names of every station in the dataset.
pub async fn stations(State(state): State<AppState>) -> HandlerResult<Vec<String>> {
    let names = state.engine.station_names().await?;
    Ok(Json(names))
}

/// GET /api/v1.0/tobs
///
/// Temperature observations of the most active station over the last
/// twelve months of data.
pub async fn temperature_observations(
    State(state): State<AppState>,
) -> HandlerResult<SeriesResponse> {
    let series = state.engine.most_active_station_temperatures().await?;
    Ok(Json(series))
}

/// GET /api/v1.0/{start}
///
/// Min/avg/max temperature for all dates greater than or equal to the
/// start date.
pub async fn stats_from_start(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> HandlerResult<TemperatureStats> {
    let start = parse_query_date(&start)?;
    let stats = state.engine.temperature_stats(start, None).await?;
    Ok(Json(stats))
}

/// GET /api/v1.0/{start}/{end}
///
/// Min/avg/max temperature from the start date through the end date,
/// inclusive.
pub async fn stats_for_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> HandlerResult<TemperatureStats> {
    let start = parse_query_date(&start)?;
    let end = parse_query_date(&end)?;
    let stats = state.engine.temperature_stats(start, Some(end)).await?;
    Ok(Json(stats))
}
