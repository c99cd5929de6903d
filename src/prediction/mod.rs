//! Disease prediction from symptom lists

pub mod service;
pub mod types;

pub use service::{new_request_id, rank_probabilities, to_percentage, PredictionService};
pub use types::{
    ErrorBody, PredictRequest, Prediction, PredictionResponse, SymptomCatalog, SymptomVector,
};
