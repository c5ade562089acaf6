//! HTTP surface: router construction and the two v1 handlers.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use serde::Deserialize;
use std::sync::Arc;

use forecast_core::{Coordinates, ForecastProvider, shape_forecast};

use crate::rest;

/// Read-only state shared by every request, injected at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        Self { provider }
    }
}

/// Build the v1 router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/weather", get(get_forecast))
        .route("/api/v1/ping", get(get_status))
        .with_state(state)
}

/// Raw query parameters. An absent parameter behaves exactly like an empty
/// one, so both default to the empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ForecastQuery {
    latitude: String,
    longitude: String,
}

/// GET /api/v1/ping — liveness check.
async fn get_status() -> Response {
    rest::respond(StatusCode::OK, &rest::Message::new("pong"))
}

/// GET /api/v1/weather — validate coordinates, fetch the upstream one-call
/// payload, shape it into the public contract. The first failure
/// short-circuits into the response: validation errors as 400, everything
/// downstream as 500.
async fn get_forecast(State(state): State<AppState>, Query(query): Query<ForecastQuery>) -> Response {
    let coords = match Coordinates::parse(&query.latitude, &query.longitude) {
        Ok(coords) => coords,
        Err(err) => {
            return rest::respond(StatusCode::BAD_REQUEST, &rest::Message::new(err.to_string()));
        }
    };

    let raw = match state.provider.one_call(coords).await {
        Ok(raw) => raw,
        Err(err) => return rest::respond_err(&err),
    };

    match shape_forecast(&raw) {
        Ok(forecast) => rest::respond(StatusCode::OK, &forecast),
        Err(err) => rest::respond_err(&anyhow::Error::new(err)),
    }
}
