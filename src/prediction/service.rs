//! Prediction service: symptom vectors, ranking, and prevention tips
//!
//! Built once from the startup state and shared read-only between
//! request handlers.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::types::{Prediction, PredictionResponse, SymptomCatalog, SymptomVector};
use crate::config::PredictionConfig;
use crate::dataset::{normalize_name, PreventionMap};
use crate::errors::{PredictError, Result};
use crate::model::{Classifier, TrainedModel};

/// Fresh correlation identifier for a response
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Convert a probability fraction to a percentage with two decimals.
///
/// Rounds the exact binary value of `probability * 100`, so `0.105` (stored
/// just below the tie) becomes `0.1`.
pub fn to_percentage(probability: f64) -> f64 {
    let percent = probability * 100.0;
    format!("{:.2}", percent).parse().unwrap_or(percent)
}

/// Pair classes with probabilities, sort descending, keep those above
/// `min_probability`, and cap at `max_results`.
///
/// Ties keep class order.
pub fn rank_probabilities<'a>(
    classes: &'a [String],
    probabilities: &[f64],
    min_probability: f64,
    max_results: usize,
) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&str, f64)> = classes
        .iter()
        .map(String::as_str)
        .zip(probabilities.iter().copied())
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .filter(|(_, p)| *p > min_probability)
        .take(max_results)
        .collect()
}

/// Immutable inference context shared by the HTTP handlers
pub struct PredictionService {
    model: Box<dyn Classifier>,
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
    prevention: PreventionMap,
    settings: PredictionConfig,
}

impl PredictionService {
    /// Wrap a classifier and the feature columns it was trained against
    pub fn new(
        model: Box<dyn Classifier>,
        columns: Vec<String>,
        prevention: PreventionMap,
        settings: PredictionConfig,
    ) -> Self {
        let mut column_index = HashMap::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            column_index.entry(name.clone()).or_insert(idx);
        }

        Self {
            model,
            columns,
            column_index,
            prevention,
            settings,
        }
    }

    /// Build from the trainer's output
    pub fn from_trained(
        trained: TrainedModel,
        prevention: PreventionMap,
        settings: PredictionConfig,
    ) -> Self {
        Self::new(
            Box::new(trained.classifier),
            trained.feature_columns,
            prevention,
            settings,
        )
    }

    /// Known feature column names, in training order
    pub fn symptom_columns(&self) -> &[String] {
        &self.columns
    }

    /// Catalog response for `GET /symptoms`
    pub fn catalog(&self) -> SymptomCatalog {
        info!(count = self.columns.len(), "Returning symptom list");
        SymptomCatalog {
            symptoms: self.columns.clone(),
            request_id: new_request_id(),
        }
    }

    /// Binary vector over the feature columns; unknown names are collected, not rejected
    pub fn symptom_vector(&self, symptoms: &[String]) -> SymptomVector {
        let mut values = vec![0.0f32; self.columns.len()];
        let mut unrecognized = Vec::new();

        for symptom in symptoms.iter().map(|s| normalize_name(s)) {
            match self.column_index.get(&symptom) {
                Some(&idx) => values[idx] = 1.0,
                None => {
                    warn!(symptom = %symptom, "Symptom not found in dataset");
                    unrecognized.push(symptom);
                }
            }
        }

        SymptomVector {
            values,
            unrecognized,
        }
    }

    /// Tip for a disease, or the configured fallback
    pub fn prevention_tip(&self, disease: &str) -> &str {
        self.prevention
            .get(disease)
            .unwrap_or(&self.settings.fallback_tip)
    }

    /// Rank diseases for the given symptom names
    pub fn predict(&self, symptoms: &[String]) -> Result<PredictionResponse> {
        if symptoms.is_empty() {
            warn!("No symptoms provided in request");
            return Err(PredictError::InvalidInput("No symptoms provided".to_string()));
        }
        debug!(?symptoms, "Processing symptoms");

        let vector = self.symptom_vector(symptoms);
        if !vector.unrecognized.is_empty() {
            info!(unrecognized = ?vector.unrecognized, "Unrecognized symptoms");
        }
        debug!(
            active = vector.active_count(),
            head = ?&vector.values[..vector.values.len().min(10)],
            "Symptom vector"
        );

        let probabilities = self.model.predict_proba(&vector.values)?;
        let classes = self.model.classes();
        if probabilities.len() != classes.len() {
            return Err(PredictError::InferenceFailure(format!(
                "classifier returned {} probabilities for {} classes",
                probabilities.len(),
                classes.len()
            )));
        }

        let predictions: Vec<Prediction> = rank_probabilities(
            classes,
            &probabilities,
            self.settings.min_probability,
            self.settings.max_results,
        )
        .into_iter()
        .map(|(disease, probability)| Prediction {
            disease: disease.to_string(),
            probability: to_percentage(probability),
            prevention_tip: self.prevention_tip(disease).to_string(),
        })
        .collect();

        let request_id = new_request_id();
        info!(
            results = predictions.len(),
            request_id = %request_id,
            "Prediction successful"
        );
        Ok(PredictionResponse {
            predictions,
            request_id,
        })
    }
}
