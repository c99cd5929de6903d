//! CSV loading and validation for the symptom and prevention tables

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use tracing::{error, info};

use super::types::{Datasets, FeatureTable, PreventionMap};
use crate::config::DataConfig;
use crate::errors::DataError;

const SYMPTOM_TABLE: &str = "symptom dataset";
const PREVENTION_TABLE: &str = "prevention dataset";

/// Load both input tables described by `config`
pub fn load_datasets(config: &DataConfig) -> Result<Datasets, DataError> {
    ensure_exists(&config.symptoms_csv, "Symptom dataset")?;
    ensure_exists(&config.prevention_csv, "Prevention details")?;

    info!(path = %config.symptoms_csv.display(), "Loading symptom-disease dataset");
    let table = load_symptom_table(&config.symptoms_csv, &config.label_column)?;

    info!(path = %config.prevention_csv.display(), "Loading prevention tips dataset");
    let prevention = load_prevention_map(
        &config.prevention_csv,
        &config.disease_column,
        &config.tip_column,
    )?;

    Ok(Datasets { table, prevention })
}

fn ensure_exists(path: &Path, what: &str) -> Result<(), DataError> {
    if path.exists() {
        Ok(())
    } else {
        error!(path = %path.display(), "{} file not found", what);
        Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Short records are accepted; their absent trailing cells read as missing
fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, DataError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn check_width(path: &Path, record: &csv::StringRecord, expected: usize) -> Result<(), DataError> {
    if record.len() <= expected {
        return Ok(());
    }
    let line = record.position().map_or(0, |pos| pos.line());
    error!(path = %path.display(), line, "Record longer than header");
    Err(DataError::TooManyFields {
        path: path.to_path_buf(),
        line,
        found: record.len(),
        expected,
    })
}

/// Parsed form of one feature cell, compared when dropping duplicate rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CellKey {
    Missing,
    Number(u64),
    Text(String),
}

impl CellKey {
    /// Empty or absent cells are missing; `-0` and `0` compare equal
    fn parse(field: Option<&str>) -> Self {
        let field = field.map(str::trim).unwrap_or_default();
        if field.is_empty() {
            return CellKey::Missing;
        }
        match field.parse::<f64>() {
            Ok(value) if value == 0.0 => CellKey::Number(0),
            Ok(value) if value.is_nan() => CellKey::Missing,
            Ok(value) => CellKey::Number(value.to_bits()),
            Err(_) => CellKey::Text(field.to_string()),
        }
    }

    /// Matrix value; `None` for text
    fn value(&self) -> Option<f32> {
        match self {
            CellKey::Missing => Some(f32::NAN),
            CellKey::Number(bits) => Some(f64::from_bits(*bits) as f32),
            CellKey::Text(_) => None,
        }
    }
}

/// Read the symptom/disease matrix, dropping exact duplicate rows
pub fn load_symptom_table(path: &Path, label_column: &str) -> Result<FeatureTable, DataError> {
    let mut reader = open_reader(path)?;
    let csv_err = |source: csv::Error| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let Some(label_idx) = headers.iter().position(|h| h == label_column) else {
        error!(column = label_column, "Missing label column in symptom dataset");
        return Err(DataError::MissingColumn {
            table: SYMPTOM_TABLE.to_string(),
            column: label_column.to_string(),
        });
    };

    let feature_columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != label_idx)
        .map(|(_, name)| name.to_string())
        .collect();

    let mut values = Vec::new();
    let mut labels = Vec::new();
    let mut non_numeric = BTreeSet::new();
    let mut seen: HashSet<(String, Vec<CellKey>)> = HashSet::new();
    let mut total_rows = 0usize;

    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        check_width(path, &record, headers.len())?;
        total_rows += 1;

        let label = record.get(label_idx).unwrap_or_default().to_string();
        let cells: Vec<CellKey> = (0..headers.len())
            .filter(|&idx| idx != label_idx)
            .map(|idx| CellKey::parse(record.get(idx)))
            .collect();

        let row: Vec<f32> = cells
            .iter()
            .enumerate()
            .map(|(feature_idx, cell)| {
                cell.value().unwrap_or_else(|| {
                    non_numeric.insert(feature_idx);
                    f32::NAN
                })
            })
            .collect();

        if seen.insert((label.clone(), cells)) {
            values.extend(row);
            labels.push(label);
        }
    }

    info!(
        rows = total_rows,
        columns = headers.len(),
        "Loaded symptom-disease dataset"
    );

    let table = FeatureTable::new(
        feature_columns,
        label_column.to_string(),
        values,
        labels,
        non_numeric.into_iter().collect(),
    );
    let (rows, columns) = table.shape();
    info!(
        rows,
        columns,
        label = table.label_column(),
        "Dataset after removing duplicates"
    );

    Ok(table)
}

/// Read the disease -> prevention tip table
pub fn load_prevention_map(
    path: &Path,
    disease_column: &str,
    tip_column: &str,
) -> Result<PreventionMap, DataError> {
    let mut reader = open_reader(path)?;
    let csv_err = |source: csv::Error| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let find = |column: &str| {
        headers.iter().position(|h| h == column).ok_or_else(|| {
            error!(column, "Missing required column in prevention dataset");
            DataError::MissingColumn {
                table: PREVENTION_TABLE.to_string(),
                column: column.to_string(),
            }
        })
    };
    let disease_idx = find(disease_column)?;
    let tip_idx = find(tip_column)?;

    let mut prevention = PreventionMap::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        check_width(path, &record, headers.len())?;
        rows += 1;
        let disease = record.get(disease_idx).unwrap_or_default();
        let tip = record.get(tip_idx).unwrap_or_default();
        prevention.insert(disease, tip);
    }

    info!(
        rows,
        columns = headers.len(),
        diseases = prevention.len(),
        "Loaded prevention dataset"
    );
    Ok(prevention)
}
