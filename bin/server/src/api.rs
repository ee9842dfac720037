//! The read-only colors resource.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use colorway::{FullColor, InvalidColorFormat};
use serde::Serialize;

use crate::config::Config;

#[derive(Clone)]
struct AppState {
    base_url: Arc<str>,
}

/// Build the router serving `GET {base_url}/{colorcode}`.
pub fn router(config: &Config) -> Router {
    let state = AppState {
        base_url: Arc::from(config.base_url.as_str()),
    };

    Router::new()
        .route(&format!("{}/{{colorcode}}", config.base_url), get(get_color))
        .with_state(state)
}

#[tracing::instrument(skip(state))]
async fn get_color(
    State(state): State<AppState>,
    Path(colorcode): Path<String>,
) -> Result<Json<FullColor>, ApiError> {
    let color = FullColor::new(&colorcode, &state.base_url)?;
    tracing::debug!(%color, "served color");
    Ok(Json(color))
}

/// Body of an error response.
#[derive(Serialize)]
struct ErrorBody {
    #[serde(rename = "Error")]
    error: String,
}

/// A request that could not be served.
#[derive(Debug)]
struct ApiError(InvalidColorFormat);

impl From<InvalidColorFormat> for ApiError {
    fn from(value: InvalidColorFormat) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(input = %self.0.input, "rejected color code");
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
