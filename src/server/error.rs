//! HTTP mapping for request errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use crate::errors::PredictError;
use crate::prediction::ErrorBody;

impl PredictError {
    /// Status code sent for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            PredictError::NotInitialized(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PredictError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PredictError::InferenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        match &self {
            PredictError::InvalidInput(message) => warn!(%message, "Rejected request"),
            PredictError::InferenceFailure(message) => error!(%message, "Prediction error"),
            PredictError::NotInitialized(_) => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
