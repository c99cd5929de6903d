//! Classifier abstraction used by the prediction service

use crate::errors::ModelError;

/// A fitted multi-class classifier over a fixed feature layout
pub trait Classifier: Send + Sync {
    /// Class labels, in the order `predict_proba` reports them
    fn classes(&self) -> &[String];

    /// Number of features each input vector must have
    fn n_features(&self) -> usize;

    /// Per-class probabilities for one feature vector.
    ///
    /// The returned vector has one entry per class and sums to 1.
    fn predict_proba(&self, features: &[f32]) -> Result<Vec<f64>, ModelError>;
}
