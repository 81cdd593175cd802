//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::Crs;
use crate::timetable::{CommutePlan, TimetableError, build_both_directions, departure_times};
use crate::weather::WeatherError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trains", any(trains))
        .route("/localinfo", any(localinfo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Trains both ways between two stations.
///
/// Parameters come from the query string, or from a JSON body when
/// `left_crs` is not in the query.
async fn trains(
    State(state): State<AppState>,
    Query(query): Query<TrainsParams>,
    body: Bytes,
) -> Result<Json<CommutePlan>, AppError> {
    let params = resolve(query, &body);
    let (Some(left), Some(right)) = (params.left_crs, params.right_crs) else {
        return Err(AppError::missing_parameters());
    };

    let left = parse_station("left_crs", &left)?;
    let right = parse_station("right_crs", &right)?;

    let plan = build_both_directions(state.darwin.as_ref(), &left, &right, &state.config).await?;

    Ok(Json(plan))
}

/// Weather for a postcode plus departures between two stations.
///
/// Same query-or-body resolution as `/trains`, keyed on `trainTo`.
async fn localinfo(
    State(state): State<AppState>,
    Query(query): Query<LocalInfoParams>,
    body: Bytes,
) -> Result<Json<LocalInfoResponse>, AppError> {
    let params = resolve(query, &body);
    let (Some(from), Some(to), Some(postcode)) =
        (params.train_from, params.train_to, params.weather)
    else {
        return Err(AppError::missing_parameters());
    };

    let from = parse_station("trainFrom", &from)?;
    let to = parse_station("trainTo", &to)?;

    let (weather, departures) = tokio::try_join!(
        async { state.weather.report(&postcode).await.map_err(AppError::from) },
        async {
            departure_times(state.darwin.as_ref(), &from, &to, state.config.num_rows)
                .await
                .map_err(AppError::from)
        },
    )?;

    info!(%from, %to, departures = departures.len(), "local info built");

    Ok(Json(LocalInfoResponse {
        weather,
        departures_times: departures,
    }))
}

fn parse_station(param: &str, value: &str) -> Result<Crs, AppError> {
    Crs::parse_trimmed(value).map_err(|e| AppError::BadRequest {
        message: format!("{param}: {e}"),
    })
}

/// Application error type.
///
/// Bad requests answer in plain text; everything else is a JSON
/// `ErrorResponse`.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    fn missing_parameters() -> Self {
        AppError::BadRequest {
            message: "expected valid parameters".to_string(),
        }
    }
}

impl From<TimetableError> for AppError {
    fn from(e: TimetableError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            AppError::Internal { message } => {
                error!(%message, "request failed");
                let body = Json(ErrorResponse { error: message });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
