//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::ObsDate;
use crate::report::{PrecipitationByDate, precipitation_by_date, trailing_window_start};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    // Literal segments take priority over the date captures
    let api = Router::new()
        .route("/precipitation", get(precipitation))
        .route("/stations", get(stations))
        .route("/tobs", get(temperature_observations))
        .route("/:start", get(temperature_summary_since))
        .route("/:start/:end", get(temperature_summary_between));

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .nest("/api/v1.0", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing the available routes.
async fn index_page() -> Result<Html<String>, AppError> {
    let html = IndexTemplate::default()
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok(Html(html))
}

/// Precipitation for the last year of data, grouped by date then station.
async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<PrecipitationByDate>, AppError> {
    let latest = state.store.latest_measurement_date().await?;
    let floor = trailing_window_start(latest);

    let rows = state.store.measurements_since(floor).await?;
    Ok(Json(precipitation_by_date(rows)))
}

/// Every station identifier that appears in the measurements.
async fn stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let stations = state.store.distinct_station_ids().await?;
    Ok(Json(stations))
}

/// Last year of temperatures at the station with the most observations.
async fn temperature_observations(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureObservation>>, AppError> {
    let latest = state.store.latest_measurement_date().await?;
    let floor = trailing_window_start(latest);

    let station = state.store.most_active_station().await?;
    let rows = state
        .store
        .temperatures_for_station_since(&station, floor)
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Temperature summary from `start` to the end of the data.
async fn temperature_summary_since(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, AppError> {
    let start = parse_date("start", &start)?;

    let stats = state.store.temperature_stats(start, None).await?;
    Ok(Json(vec![stats.into()]))
}

/// Temperature summary from `start` to `end`, both inclusive.
///
/// An `end` before `start` matches nothing and yields null aggregates.
async fn temperature_summary_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, AppError> {
    let start = parse_date("start", &start)?;
    let end = parse_date("end", &end)?;

    let stats = state.store.temperature_stats(start, Some(end)).await?;
    Ok(Json(vec![stats.into()]))
}

/// Parse a date path segment, rejecting it as a bad request.
fn parse_date(which: &str, raw: &str) -> Result<ObsDate, AppError> {
    ObsDate::parse(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {which} date: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "Rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
