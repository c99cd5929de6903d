//! Shared fixtures: small symptom and prevention CSVs in a temp directory

#![allow(dead_code)]

use std::path::PathBuf;

use symptombuddy::config::{Config, DataConfig, ModelConfig};
use tempfile::TempDir;

pub const SYMPTOMS_CSV: &str = r#"fever,cough,sneezing,headache,nausea,label_dis
1,1,0,1,0," Flu "
1,1,0,0,0," Flu "
1,0,0,1,1," Flu "
1,1,1,1,0," Flu "
0,1,1,0,0,Common Cold
0,0,1,0,0,Common Cold
0,1,1,1,0,Common Cold
1,0,1,0,0,Common Cold
0,0,0,1,1,Migraine
0,0,0,1,0,Migraine
0,0,1,1,1,Migraine
1,0,0,1,1,Migraine
1,1,0,1,0," Flu "
0,0,0,1,0,Migraine
"#;

pub const PREVENTION_CSV: &str = "\
Disease,Prevention_Tip
flu,Get a yearly flu vaccine
  COMMON COLD ,Wash hands often
";

pub const FEATURES: [&str; 5] = ["fever", "cough", "sneezing", "headache", "nausea"];

/// Temp directory holding the fixture files; keep it alive while the config is used
pub struct Fixture {
    pub dir: TempDir,
    pub config: Config,
}

pub fn fixture() -> Fixture {
    let dir = TempDir::new().expect("temp dir");
    let symptoms = dir.path().join("symptoms.csv");
    let prevention = dir.path().join("prevention.csv");
    std::fs::write(&symptoms, SYMPTOMS_CSV).expect("write symptoms");
    std::fs::write(&prevention, PREVENTION_CSV).expect("write prevention");

    let config = Config {
        data: DataConfig {
            symptoms_csv: symptoms,
            prevention_csv: prevention,
            ..DataConfig::default()
        },
        model: ModelConfig {
            n_estimators: 25,
            ..ModelConfig::default()
        },
        ..Config::default()
    };
    Fixture { dir, config }
}

/// Config pointing at files that do not exist
pub fn missing_data_config() -> Config {
    Config {
        data: DataConfig {
            symptoms_csv: PathBuf::from("/nonexistent/symptoms.csv"),
            prevention_csv: PathBuf::from("/nonexistent/prevention.csv"),
            ..DataConfig::default()
        },
        ..Config::default()
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
