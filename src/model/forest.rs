//! Random forest over string disease labels.
//!
//! Wraps aprender's bootstrap-aggregated CART ensemble. Labels are encoded
//! as indices into the sorted distinct training labels, and class
//! probabilities are the share of trees voting for each class.

use std::collections::BTreeSet;

use aprender::primitives::Matrix;
use aprender::tree::RandomForestClassifier;

use super::classifier::Classifier;
use crate::errors::ModelError;

/// Fitted forest together with its class labels
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    forest: RandomForestClassifier,
    classes: Vec<String>,
    n_features: usize,
}

impl ForestClassifier {
    /// Fit `n_estimators` seeded trees on the rows of `x`.
    ///
    /// Classes are the sorted distinct values of `labels`.
    pub fn fit(
        x: &Matrix<f32>,
        labels: &[String],
        n_estimators: usize,
        seed: u64,
    ) -> Result<Self, ModelError> {
        let (n_samples, n_features) = x.shape();
        if n_samples == 0 || n_features == 0 || labels.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }
        if n_samples != labels.len() {
            return Err(ModelError::LabelCountMismatch {
                samples: n_samples,
                labels: labels.len(),
            });
        }

        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let y: Vec<usize> = labels
            .iter()
            .map(|label| classes.binary_search(label).unwrap_or_default())
            .collect();

        let mut forest = RandomForestClassifier::new(n_estimators.max(1)).with_random_state(seed);
        forest
            .fit(x, &y)
            .map_err(|err| ModelError::Backend(err.to_string()))?;

        Ok(Self {
            forest,
            classes,
            n_features,
        })
    }

    /// Index of `label` in [`Classifier::classes`]
    pub fn class_index(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|class| class == label)
    }

    /// Most probable class index for every row of `x`; ties go to the lower index
    pub fn predict_classes(&self, x: &Matrix<f32>) -> Result<Vec<usize>, ModelError> {
        self.check_width(x.shape().1)?;
        let proba = self.forest.predict_proba(x);
        let width = proba.shape().1.max(1);
        Ok(proba.as_slice().chunks(width).map(argmax).collect())
    }

    fn check_width(&self, actual: usize) -> Result<(), ModelError> {
        if actual == self.n_features {
            Ok(())
        } else {
            Err(ModelError::DimensionMismatch {
                expected: self.n_features,
                actual,
            })
        }
    }
}

fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    for (idx, p) in row.iter().enumerate() {
        if *p > row[best] {
            best = idx;
        }
    }
    best
}

impl Classifier for ForestClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, features: &[f32]) -> Result<Vec<f64>, ModelError> {
        self.check_width(features.len())?;
        let x = Matrix::from_vec(1, features.len(), features.to_vec())
            .map_err(|err| ModelError::Backend(err.to_string()))?;

        let votes = self.forest.predict_proba(&x);
        let mut proba = vec![0.0f64; self.classes.len()];
        for (slot, share) in proba.iter_mut().zip(votes.as_slice()) {
            *slot = f64::from(*share);
        }

        let total: f64 = proba.iter().sum();
        if total <= 0.0 {
            return Err(ModelError::Backend("forest produced no votes".to_string()));
        }
        for p in &mut proba {
            *p /= total;
        }
        Ok(proba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Two perfectly separable classes on the first feature
    fn separable() -> (Matrix<f32>, Vec<String>) {
        let x = Matrix::from_vec(
            6,
            3,
            vec![
                1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, //
                1.0, 0.0, 1.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0, //
                0.0, 1.0, 1.0, //
            ],
        )
        .unwrap();
        (x, labels(&["Flu", "Flu", "Flu", "Cold", "Cold", "Cold"]))
    }

    #[test]
    fn test_classes_sorted() {
        let (x, y) = separable();
        let rf = ForestClassifier::fit(&x, &y, 5, 42).unwrap();
        assert_eq!(rf.classes(), &["Cold", "Flu"]);
        assert_eq!(rf.n_features(), 3);
        assert_eq!(rf.class_index("Flu"), Some(1));
        assert_eq!(rf.class_index("Migraine"), None);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (x, y) = separable();
        let rf = ForestClassifier::fit(&x, &y, 20, 7).unwrap();
        for input in [[1.0, 0.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0]] {
            let proba = rf.predict_proba(&input).unwrap();
            assert_eq!(proba.len(), 2);
            assert!(proba.iter().all(|p| *p >= 0.0));
            assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_class_is_certain() {
        let x = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
        let rf = ForestClassifier::fit(&x, &labels(&["Flu", "Flu"]), 3, 1).unwrap();
        assert_eq!(rf.predict_proba(&[0.0, 0.0]).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_same_seed_same_model() {
        let (x, y) = separable();
        let rf1 = ForestClassifier::fit(&x, &y, 10, 42).unwrap();
        let rf2 = ForestClassifier::fit(&x, &y, 10, 42).unwrap();
        for input in [[1.0, 1.0, 0.0], [0.0, 0.0, 0.0]] {
            assert_eq!(
                rf1.predict_proba(&input).unwrap(),
                rf2.predict_proba(&input).unwrap()
            );
        }
    }

    #[test]
    fn test_training_rows_recovered() {
        let (x, y) = separable();
        let rf = ForestClassifier::fit(&x, &y, 25, 42).unwrap();
        let flu = rf.class_index("Flu").unwrap();
        let cold = rf.class_index("Cold").unwrap();
        assert_eq!(
            rf.predict_classes(&x).unwrap(),
            vec![flu, flu, flu, cold, cold, cold]
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let (x, y) = separable();
        let rf = ForestClassifier::fit(&x, &y, 2, 42).unwrap();
        assert_eq!(
            rf.predict_proba(&[1.0]),
            Err(ModelError::DimensionMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_fit_rejects_mismatched_labels() {
        let x = Matrix::from_vec(2, 2, vec![1.0, 0.0, 1.0, 0.0]).unwrap();
        let err = ForestClassifier::fit(&x, &labels(&["Flu"]), 2, 42).unwrap_err();
        assert_eq!(
            err,
            ModelError::LabelCountMismatch {
                samples: 2,
                labels: 1
            }
        );

        let empty = Matrix::from_vec(0, 2, vec![]).unwrap();
        assert_eq!(
            ForestClassifier::fit(&empty, &[], 2, 42).unwrap_err(),
            ModelError::EmptyTrainingSet
        );
    }

    #[test]
    fn test_argmax_prefers_first_tie() {
        assert_eq!(argmax(&[0.5, 0.5]), 0);
        assert_eq!(argmax(&[0.2, 0.3, 0.5]), 2);
    }
}
