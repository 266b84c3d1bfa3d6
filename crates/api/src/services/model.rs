//! Irrigation model loading.

use std::sync::Arc;

use domain::services::{ForestRegressor, IrrigationPolicy, IrrigationPredictor, UnloadedModel};

use crate::config::IrrigationConfig;

/// Loads the irrigation model once for the whole process.
///
/// A missing or invalid artifact does not stop the server: the returned
/// predictor reports itself as unloaded and every prediction fails with
/// `ModelUnavailable`, which the ingest flow absorbs.
pub fn load_predictor(config: &IrrigationConfig) -> Arc<dyn IrrigationPredictor> {
    match ForestRegressor::load(&config.model_path) {
        Ok(forest) => {
            tracing::info!(
                path = %config.model_path.display(),
                trees = forest.tree_count(),
                "Irrigation model loaded"
            );
            Arc::new(forest)
        }
        Err(e) => {
            tracing::warn!(
                path = %config.model_path.display(),
                error = %e,
                "Irrigation model unavailable, watering decisions will be skipped"
            );
            Arc::new(UnloadedModel::new(e.to_string()))
        }
    }
}

/// Watering rule from configuration.
pub fn policy(config: &IrrigationConfig) -> IrrigationPolicy {
    IrrigationPolicy::new(config.threshold_ml, config.clamp_negative)
}
