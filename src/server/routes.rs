//! Route table and request handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;

use super::state::AppState;
use crate::errors::{Component, PredictError, Result};
use crate::prediction::{PredictRequest, PredictionResponse, SymptomCatalog};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/script.js");

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/predict", post(predict))
        .route("/symptoms", get(symptoms))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], SCRIPT_JS)
}

async fn predict(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>> {
    let service = state.service(Component::Model)?;

    let Json(request) = payload.map_err(|rejection| {
        PredictError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    debug!(?request, "Received payload");

    let symptoms = request.symptoms.unwrap_or_default();
    service.predict(&symptoms).map(Json)
}

async fn symptoms(State(state): State<AppState>) -> Result<Json<SymptomCatalog>> {
    let service = state.service(Component::SymptomCatalog)?;
    Ok(Json(service.catalog()))
}
