//! Request and response payloads for the prediction API

use serde::{Deserialize, Serialize};

/// Body of `POST /predict`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
}

/// One ranked disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    /// Percentage in [0, 100], rounded to two decimals
    pub probability: f64,
    pub prevention_tip: String,
}

/// Body of a successful `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predictions: Vec<Prediction>,
    pub request_id: String,
}

/// Body of `GET /symptoms`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomCatalog {
    pub symptoms: Vec<String>,
    pub request_id: String,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Binary feature vector built from a request's symptom names
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomVector {
    pub values: Vec<f32>,
    /// Normalized names that matched no feature column
    pub unrecognized: Vec<String>,
}

impl SymptomVector {
    /// Number of slots set to 1
    pub fn active_count(&self) -> usize {
        self.values.iter().filter(|v| **v > 0.0).count()
    }
}
