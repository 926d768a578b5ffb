//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::StopId;
use crate::mbta::MbtaError;
use crate::transfer;

use super::dto::*;
use super::state::AppState;

/// Default nearby-search radius in degrees of latitude (~1 km).
const DEFAULT_NEARBY_RADIUS_DEG: f64 = 0.01;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops", get(list_stops))
        .route("/api/stops/nearby", get(stops_nearby))
        .route("/api/transfer", get(evaluate_transfer))
        .route("/api/simulate", get(simulate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stops, optionally filtered to a route.
async fn list_stops(
    State(state): State<AppState>,
    Query(req): Query<StopsQuery>,
) -> Result<Json<StopsResponse>, AppError> {
    let stops = state.mbta.get_stops(req.route.as_deref()).await?;

    Ok(Json(StopsResponse {
        stops: stops.iter().map(StopResult::from_stop).collect(),
    }))
}

/// List stops near a coordinate.
async fn stops_nearby(
    State(state): State<AppState>,
    Query(req): Query<NearbyQuery>,
) -> Result<Json<StopsResponse>, AppError> {
    let radius = req.radius.unwrap_or(DEFAULT_NEARBY_RADIUS_DEG);
    if radius <= 0.0 {
        return Err(AppError::BadRequest {
            message: "radius must be positive".to_string(),
        });
    }

    let stops = state.mbta.get_stops_near(req.lat, req.lon, radius).await?;

    Ok(Json(StopsResponse {
        stops: stops.iter().map(StopResult::from_stop).collect(),
    }))
}

/// Evaluate a transfer between two stops.
///
/// The available time comes from the explicit `available_secs` parameter
/// when present (a client working from cached schedule data), otherwise
/// from the next upcoming prediction at the destination stop.
async fn evaluate_transfer(
    State(state): State<AppState>,
    Query(req): Query<TransferQuery>,
) -> Result<Json<TransferResponse>, AppError> {
    let from_id = StopId::parse(&req.from).map_err(|_| AppError::BadRequest {
        message: format!("Invalid origin stop id: {:?}", req.from),
    })?;
    let to_id = StopId::parse(&req.to).map_err(|_| AppError::BadRequest {
        message: format!("Invalid destination stop id: {:?}", req.to),
    })?;
    let speed = req.speed.unwrap_or_default();

    let (from, to) =
        futures::future::try_join(state.mbta.get_stop(&from_id), state.mbta.get_stop(&to_id))
            .await?;

    let available_secs = match req.available_secs {
        Some(secs) => secs,
        None => {
            next_departure_seconds(&state, &to_id, req.route.as_deref(), req.direction).await?
        }
    };

    let result = transfer::evaluate((*from).clone(), (*to).clone(), speed, available_secs);

    Ok(Json(TransferResponse::from_result(
        &result,
        available_secs,
        speed,
    )))
}

/// Seconds until the next upcoming vehicle at a stop.
async fn next_departure_seconds(
    state: &AppState,
    stop: &StopId,
    route: Option<&str>,
    direction: Option<u8>,
) -> Result<i64, AppError> {
    let predictions = state.mbta.get_predictions(stop, route, direction).await?;
    let now = Utc::now();

    predictions
        .iter()
        .filter_map(|p| p.available_seconds(now))
        .find(|&secs| secs > 0)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no upcoming departures at stop {stop}"),
        })
}

/// Reclassify a buffer under a hypothetical delay.
///
/// Pure computation for the what-if slider; no network involved.
async fn simulate(Query(req): Query<SimulateQuery>) -> Json<SimulateResponse> {
    let outcome = transfer::simulate_delay(req.buffer_secs, req.delay_secs);
    Json(SimulateResponse::from_outcome(outcome))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<MbtaError> for AppError {
    fn from(e: MbtaError) -> Self {
        match e {
            MbtaError::StopNotFound { id } => AppError::NotFound {
                message: format!("stop not found: {id}"),
            },
            other => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
