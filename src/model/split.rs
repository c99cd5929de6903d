//! Held-out partition of the feature matrix

use aprender::model_selection::train_test_split;
use aprender::primitives::{Matrix, Vector};

use crate::errors::TrainingError;

/// Train and test matrices plus the table rows each one holds
#[derive(Debug, Clone, PartialEq)]
pub struct Holdout {
    pub x_train: Matrix<f32>,
    pub x_test: Matrix<f32>,
    pub train_rows: Vec<usize>,
    pub test_rows: Vec<usize>,
}

/// Seeded shuffle split holding out `round(n_rows * test_ratio)` rows.
///
/// The row index rides along as the target so callers can look labels up.
pub fn holdout_split(x: &Matrix<f32>, test_ratio: f64, seed: u64) -> Result<Holdout, TrainingError> {
    let n_rows = x.shape().0;
    let ratio = test_ratio as f32;
    let n_test = (n_rows as f32 * ratio).round() as usize;
    if n_test == 0 || n_test >= n_rows {
        return Err(TrainingError::InsufficientData {
            rows: n_rows,
            test_ratio,
        });
    }

    let row_ids: Vec<f32> = (0..n_rows).map(|row| row as f32).collect();
    let (x_train, x_test, y_train, y_test) = train_test_split(
        x,
        &Vector::from_slice(&row_ids),
        ratio,
        Some(seed),
    )
    .map_err(TrainingError::Split)?;

    Ok(Holdout {
        x_train,
        x_test,
        train_rows: row_indices(&y_train),
        test_rows: row_indices(&y_test),
    })
}

fn row_indices(ids: &Vector<f32>) -> Vec<usize> {
    (0..ids.len()).map(|i| ids[i] as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// One feature equal to the row index
    fn indexed(n_rows: usize) -> Matrix<f32> {
        Matrix::from_vec(n_rows, 1, (0..n_rows).map(|i| i as f32).collect()).unwrap()
    }

    #[test]
    fn test_split_sizes() {
        let split = holdout_split(&indexed(10), 0.2, 42).unwrap();
        assert_eq!(split.test_rows.len(), 2);
        assert_eq!(split.train_rows.len(), 8);
        assert_eq!(split.x_test.shape(), (2, 1));

        let split = holdout_split(&indexed(12), 0.2, 42).unwrap();
        assert_eq!(split.test_rows.len(), 2);
        assert_eq!(split.train_rows.len(), 10);
    }

    #[test]
    fn test_split_covers_all_rows_once() {
        let split = holdout_split(&indexed(50), 0.2, 3).unwrap();
        let all: HashSet<usize> = split.train_rows.iter().chain(&split.test_rows).copied().collect();
        assert_eq!(all.len(), 50);
    }

    #[test]
    fn test_rows_follow_matrix() {
        let split = holdout_split(&indexed(20), 0.2, 9).unwrap();
        for (i, &row) in split.test_rows.iter().enumerate() {
            assert_eq!(split.x_test.get(i, 0), row as f32);
        }
        for (i, &row) in split.train_rows.iter().enumerate() {
            assert_eq!(split.x_train.get(i, 0), row as f32);
        }
    }

    #[test]
    fn test_split_is_deterministic() {
        assert_eq!(
            holdout_split(&indexed(30), 0.2, 42).unwrap(),
            holdout_split(&indexed(30), 0.2, 42).unwrap()
        );
    }

    #[test]
    fn test_split_needs_both_partitions() {
        assert!(matches!(
            holdout_split(&indexed(1), 0.2, 42),
            Err(TrainingError::InsufficientData { rows: 1, .. })
        ));
        assert!(holdout_split(&indexed(2), 0.2, 42).is_err());
        assert!(holdout_split(&indexed(2), 0.5, 42).is_ok());
    }
}
