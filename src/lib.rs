//! SymptomBuddy - Disease Prediction Service
//!
//! Trains a random forest on a symptom/disease table at startup and serves
//! ranked disease predictions with prevention tips over HTTP.
//!
//! # Architecture
//!
//! - **dataset**: CSV loading, validation, deduplication
//! - **model**: random forest training and held-out evaluation
//! - **prediction**: symptom vectors, ranking, prevention tips
//! - **server**: axum routes over immutable startup state

pub mod errors;

// Re-export commonly used types
pub use errors::{Component, PredictError, Result};

pub mod dataset;
pub mod model;
pub mod prediction;

// Startup and HTTP surface
pub mod bootstrap;
pub mod server;

// Ambient: CLI, configuration, logging
pub mod cli;
pub mod config;
pub mod telemetry;
