//! Core dataset types: the symptom feature table and the prevention lookup

use std::collections::HashMap;

/// Trim and lowercase a disease or symptom name for lookups
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Symptom feature matrix plus one disease label per row.
///
/// Values are stored row-major. Missing cells are `NaN` until training
/// coerces them to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    feature_columns: Vec<String>,
    label_column: String,
    values: Vec<f32>,
    labels: Vec<String>,
    non_numeric: Vec<usize>,
}

impl FeatureTable {
    /// Assemble a table from already-parsed rows.
    ///
    /// `non_numeric` holds indices into `feature_columns` of columns that
    /// contained text.
    pub fn new(
        feature_columns: Vec<String>,
        label_column: String,
        values: Vec<f32>,
        labels: Vec<String>,
        mut non_numeric: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(values.len(), labels.len() * feature_columns.len());
        non_numeric.sort_unstable();
        non_numeric.dedup();
        Self {
            feature_columns,
            label_column,
            values,
            labels,
            non_numeric,
        }
    }

    /// Build a fully numeric table from `(features, label)` rows
    pub fn from_rows<S: Into<String>>(
        feature_columns: Vec<String>,
        label_column: &str,
        rows: Vec<(Vec<f32>, S)>,
    ) -> Self {
        let mut values = Vec::with_capacity(rows.len() * feature_columns.len());
        let mut labels = Vec::with_capacity(rows.len());
        for (row, label) in rows {
            values.extend(row);
            labels.push(label.into());
        }
        Self::new(
            feature_columns,
            label_column.to_string(),
            values,
            labels,
            Vec::new(),
        )
    }

    /// Ordered feature column names, label column excluded
    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    pub fn n_features(&self) -> usize {
        self.feature_columns.len()
    }

    /// (rows, columns) counting the label column, as logged at load time
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_features() + 1)
    }

    /// Feature values of one row
    pub fn row(&self, idx: usize) -> &[f32] {
        let width = self.n_features();
        &self.values[idx * width..(idx + 1) * width]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Names of feature columns that held non-numeric text
    pub fn non_numeric_columns(&self) -> Vec<String> {
        self.non_numeric
            .iter()
            .filter_map(|&idx| self.feature_columns.get(idx).cloned())
            .collect()
    }

    /// Copy of the feature values with missing cells set to zero
    pub fn filled_values(&self) -> Vec<f32> {
        self.values
            .iter()
            .map(|v| if v.is_nan() { 0.0 } else { *v })
            .collect()
    }
}

/// Disease name -> prevention tip, keyed by normalized disease name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreventionMap {
    tips: HashMap<String, String>,
}

impl PreventionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tip; later entries for the same disease win
    pub fn insert(&mut self, disease: &str, tip: impl Into<String>) {
        self.tips.insert(normalize_name(disease), tip.into());
    }

    /// Look up a tip by disease name, ignoring case and surrounding whitespace
    pub fn get(&self, disease: &str) -> Option<&str> {
        self.tips.get(&normalize_name(disease)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for PreventionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PreventionMap::new();
        for (disease, tip) in iter {
            map.insert(disease.as_ref(), tip);
        }
        map
    }
}

/// Everything the loader produces
#[derive(Debug, Clone)]
pub struct Datasets {
    pub table: FeatureTable,
    pub prevention: PreventionMap,
}
