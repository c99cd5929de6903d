//! Model preparation: validation, split, fit, and held-out evaluation

use aprender::metrics::classification::accuracy as accuracy_score;
use aprender::primitives::Matrix;
use tracing::{error, info};

use super::forest::ForestClassifier;
use super::split::holdout_split;
use crate::config::ModelConfig;
use crate::dataset::FeatureTable;
use crate::errors::{ModelError, TrainingError};

/// A fitted forest together with the feature layout it expects
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub classifier: ForestClassifier,
    /// Feature column names in the order the classifier was trained on
    pub feature_columns: Vec<String>,
    /// Held-out accuracy. Informational only.
    pub accuracy: f64,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Train a forest on `table` and report its held-out accuracy
pub fn train_model(table: &FeatureTable, config: &ModelConfig) -> Result<TrainedModel, TrainingError> {
    info!("Preparing model");

    if table.n_features() == 0 || table.n_rows() == 0 {
        error!("Empty feature or label data");
        return Err(TrainingError::EmptyData);
    }

    let non_numeric = table.non_numeric_columns();
    if !non_numeric.is_empty() {
        error!(columns = ?non_numeric, "Non-numeric columns found");
        return Err(TrainingError::NonNumericColumns {
            columns: non_numeric,
        });
    }

    let n_features = table.n_features();
    let x = Matrix::from_vec(table.n_rows(), n_features, table.filled_values())
        .map_err(|err| ModelError::Backend(err.to_string()))?;
    let labels = table.labels();

    let split = holdout_split(&x, config.test_ratio, config.seed)?;
    info!(
        train_rows = split.train_rows.len(),
        test_rows = split.test_rows.len(),
        features = n_features,
        "Split training data"
    );

    let y_train: Vec<String> = split.train_rows.iter().map(|&i| labels[i].clone()).collect();
    let classifier =
        ForestClassifier::fit(&split.x_train, &y_train, config.n_estimators, config.seed)?;

    // Test labels absent from training can never be predicted
    let actual: Vec<usize> = split
        .test_rows
        .iter()
        .map(|&i| classifier.class_index(&labels[i]).unwrap_or(usize::MAX))
        .collect();
    let predicted = classifier.predict_classes(&split.x_test)?;
    let accuracy = f64::from(accuracy_score(&predicted, &actual));
    info!("Model accuracy: {:.2}", accuracy);

    Ok(TrainedModel {
        classifier,
        feature_columns: table.feature_columns().to_vec(),
        accuracy,
        train_rows: split.train_rows.len(),
        test_rows: split.test_rows.len(),
    })
}
