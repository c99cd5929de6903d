//! Error types for SymptomBuddy
//!
//! One enum per layer: loading, training, the classifier itself, and the
//! request-facing prediction errors that map onto HTTP status codes.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading and validating the input CSV files
#[derive(Error, Debug)]
pub enum DataError {
    /// Input file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A required column is absent from a table
    #[error("Missing '{column}' column in {table}")]
    MissingColumn { table: String, column: String },

    /// A record has more fields than the header row
    #[error("{}: line {line} has {found} fields, expected at most {expected}", path.display())]
    TooManyFields {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },

    /// CSV syntax or record errors
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the classifier implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Input vector length differs from the training feature count
    #[error("Expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Fit called with zero rows
    #[error("Cannot fit with zero samples")]
    EmptyTrainingSet,

    /// Feature rows and labels disagree in length
    #[error("Number of samples ({samples}) and labels ({labels}) must match")]
    LabelCountMismatch { samples: usize, labels: usize },

    /// Failure reported by the learning backend
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Errors raised while preparing the model from a loaded table
#[derive(Error, Debug)]
pub enum TrainingError {
    /// No feature columns or no rows
    #[error("Empty feature or label data")]
    EmptyData,

    /// Feature columns holding text values
    #[error("Non-numeric columns: {}", columns.join(", "))]
    NonNumericColumns { columns: Vec<String> },

    /// Split would leave the train or test partition empty
    #[error("Not enough rows to split: {rows} row(s) with test ratio {test_ratio}")]
    InsufficientData { rows: usize, test_ratio: f64 },

    /// Train/test split rejected by the backend
    #[error("Split error: {0}")]
    Split(String),

    /// Classifier failure
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Anything that keeps the service from becoming ready at startup
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Error loading data: {0}")]
    Data(#[from] DataError),

    #[error("Error preparing model: {0}")]
    Training(#[from] TrainingError),
}

/// Part of the startup state a request depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Model,
    SymptomCatalog,
}

impl Component {
    /// Message reported to clients when this component is missing
    pub fn unavailable_message(&self) -> &'static str {
        match self {
            Component::Model => "Model or data not loaded properly",
            Component::SymptomCatalog => "Symptom data not loaded",
        }
    }
}

/// Request-facing error kinds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Startup did not produce a model
    #[error("{}", .0.unavailable_message())]
    NotInitialized(Component),

    /// The request was rejected before inference
    #[error("{0}")]
    InvalidInput(String),

    /// The classifier failed on a well-formed request
    #[error("Prediction error: {0}")]
    InferenceFailure(String),
}

impl From<ModelError> for PredictError {
    fn from(err: ModelError) -> Self {
        PredictError::InferenceFailure(err.to_string())
    }
}

/// Result type alias for request handling
pub type Result<T> = std::result::Result<T, PredictError>;
