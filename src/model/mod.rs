//! Disease classifier
//!
//! Random forest over symptom indicator features, trained once at startup
//! with aprender.

pub mod classifier;
pub mod forest;
pub mod split;
pub mod trainer;

pub use classifier::Classifier;
pub use forest::ForestClassifier;
pub use split::{holdout_split, Holdout};
pub use trainer::{train_model, TrainedModel};
