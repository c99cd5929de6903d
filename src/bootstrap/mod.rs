//! Startup bootstrap for SymptomBuddy
//!
//! Loads the CSV inputs, trains the classifier, and assembles the
//! prediction service. Failures leave the server in degraded mode.

use tracing::{error, info};

use crate::config::Config;
use crate::dataset::load_datasets;
use crate::errors::StartupError;
use crate::model::{train_model, Classifier};
use crate::prediction::PredictionService;

/// Numbers reported after a successful startup
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    pub rows: usize,
    pub features: usize,
    pub classes: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub accuracy: f64,
    pub prevention_entries: usize,
}

/// Ready-to-serve state plus its summary
pub struct Prepared {
    pub service: PredictionService,
    pub summary: TrainingSummary,
}

/// Bootstrap check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapStatus {
    Ready,
    Degraded(String),
}

/// Startup sequence runner
pub struct Bootstrap {
    config: Config,
}

impl Bootstrap {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load data and train; any failure is returned to the caller
    pub fn prepare(&self) -> Result<Prepared, StartupError> {
        let datasets = load_datasets(&self.config.data)?;
        let (rows, _) = datasets.table.shape();
        let features = datasets.table.n_features();

        let trained = train_model(&datasets.table, &self.config.model)?;
        let summary = TrainingSummary {
            rows,
            features,
            classes: trained.classifier.classes().len(),
            train_rows: trained.train_rows,
            test_rows: trained.test_rows,
            accuracy: trained.accuracy,
            prevention_entries: datasets.prevention.len(),
        };

        let service = PredictionService::from_trained(
            trained,
            datasets.prevention,
            self.config.prediction.clone(),
        );
        Ok(Prepared { service, summary })
    }

    /// Run the startup sequence, logging instead of propagating failure
    pub fn initialize(&self) -> (BootstrapStatus, Option<PredictionService>) {
        info!("Starting application");
        match self.prepare() {
            Ok(prepared) => {
                let s = &prepared.summary;
                info!(
                    rows = s.rows,
                    features = s.features,
                    classes = s.classes,
                    prevention_entries = s.prevention_entries,
                    "Model ready"
                );
                (BootstrapStatus::Ready, Some(prepared.service))
            }
            Err(err) => {
                error!(error = %err, "Failed to initialize model or symptom columns");
                (BootstrapStatus::Degraded(err.to_string()), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;
    use std::path::PathBuf;

    #[test]
    fn test_missing_files_degrade() {
        let config = Config {
            data: DataConfig {
                symptoms_csv: PathBuf::from("/nonexistent/sym.csv"),
                prevention_csv: PathBuf::from("/nonexistent/prev.csv"),
                ..DataConfig::default()
            },
            ..Config::default()
        };
        let (status, service) = Bootstrap::new(config).initialize();
        assert!(service.is_none());
        match status {
            BootstrapStatus::Degraded(reason) => assert!(reason.contains("File not found")),
            BootstrapStatus::Ready => panic!("expected degraded startup"),
        }
    }
}
