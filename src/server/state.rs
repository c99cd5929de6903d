//! Shared application state handed to every handler

use std::sync::Arc;

use tracing::error;

use crate::errors::{Component, PredictError, Result};
use crate::prediction::PredictionService;

/// Startup result shared across requests. `None` means degraded mode.
#[derive(Clone, Default)]
pub struct AppState {
    service: Option<Arc<PredictionService>>,
}

impl AppState {
    /// State backed by a trained service
    pub fn ready(service: PredictionService) -> Self {
        Self {
            service: Some(Arc::new(service)),
        }
    }

    /// State for a failed startup; inference endpoints answer 500
    pub fn degraded() -> Self {
        Self::default()
    }

    pub fn from_service(service: Option<PredictionService>) -> Self {
        service.map_or_else(Self::degraded, Self::ready)
    }

    pub fn is_ready(&self) -> bool {
        self.service.is_some()
    }

    /// The prediction service, or `NotInitialized` naming what the caller needed
    pub fn service(&self, component: Component) -> Result<&PredictionService> {
        self.service.as_deref().ok_or_else(|| {
            error!(?component, "Endpoint called but startup state is not loaded");
            PredictError::NotInitialized(component)
        })
    }
}
