//! Dataset loading for SymptomBuddy
//!
//! Reads the symptom/disease training matrix and the prevention-tip table.

pub mod loader;
pub mod types;

pub use loader::{load_datasets, load_prevention_map, load_symptom_table};
pub use types::{normalize_name, Datasets, FeatureTable, PreventionMap};
