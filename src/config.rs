//! Configuration management for SymptomBuddy
//!
//! TOML file with defaults for every field.
//! Location: --config, else ~/.symptombuddy/config.toml, else built-in defaults.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
}

/// HTTP listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Input files and the column names expected in them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub symptoms_csv: PathBuf,
    pub prevention_csv: PathBuf,
    pub label_column: String,
    pub disease_column: String,
    pub tip_column: String,
}

/// Forest and split parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub n_estimators: usize,
    pub seed: u64,
    pub test_ratio: f64,
}

/// Response shaping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    pub min_probability: f64,
    pub max_results: usize,
    pub fallback_tip: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            symptoms_csv: PathBuf::from("dis_sym_dataset_comb.csv"),
            prevention_csv: PathBuf::from("disease_details (1).csv"),
            label_column: "label_dis".to_string(),
            disease_column: "Disease".to_string(),
            tip_column: "Prevention_Tip".to_string(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            seed: 42,
            test_ratio: 0.2,
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_probability: 0.001,
            max_results: 10,
            fallback_tip: "No prevention tip available".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file or the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load ~/.symptombuddy/config.toml when present, defaults otherwise
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Config::default())
    }

    /// Standard configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".symptombuddy").join("config.toml"))
    }

    /// Apply command-line overrides on top of file values
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(host) = &args.host {
            self.server.host = host.clone();
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(path) = &args.symptoms_csv {
            self.data.symptoms_csv = path.clone();
        }
        if let Some(path) = &args.prevention_csv {
            self.data.prevention_csv = path.clone();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.model.n_estimators == 0 {
            bail!("n_estimators must be greater than 0");
        }

        if !(self.model.test_ratio > 0.0 && self.model.test_ratio < 1.0) {
            bail!("test_ratio must be between 0.0 and 1.0 (exclusive)");
        }

        if self.prediction.max_results == 0 {
            bail!("max_results must be greater than 0");
        }

        if !(0.0..1.0).contains(&self.prediction.min_probability) {
            bail!("min_probability must be in [0.0, 1.0)");
        }

        if self.data.label_column.is_empty()
            || self.data.disease_column.is_empty()
            || self.data.tip_column.is_empty()
        {
            bail!("column names must not be empty");
        }

        Ok(())
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Render as TOML for `symptombuddy config`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.model.n_estimators, 100);
        assert_eq!(config.model.seed, 42);
        assert_eq!(config.prediction.max_results, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8080\n\n[model]\nn_estimators = 10").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.model.n_estimators, 10);
        assert_eq!(config.model.seed, 42);
        assert_eq!(config.data.label_column, "label_dis");
    }

    #[test]
    fn test_validation_zero_trees() {
        let mut config = Config::default();
        config.model.n_estimators = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_test_ratio() {
        let mut config = Config::default();
        config.model.test_ratio = 1.0;
        assert!(config.validate().is_err());
        config.model.test_ratio = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_min_probability() {
        let mut config = Config::default();
        config.prediction.min_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[prediction]\nmax_results = 0").unwrap();
        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.server.port = 9000;
        let rendered = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_bind_address() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }
}
